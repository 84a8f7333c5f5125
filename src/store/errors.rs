//! Error types for store adapters.

use crate::error::ForecastError;

/// Errors that can occur inside a store adapter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No record exists for the id. Removing or updating a non-existent id
    /// is a caller error, not an idempotent success.
    #[error("No stored forecast with id {id}")]
    NotFound { id: i32 },

    /// The adapter failed to read or persist state. After this error the
    /// buffered delta must be treated as not durable.
    #[error("Persistence failure: {message}")]
    Persistence { message: String },
}

impl StoreError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}

impl From<StoreError> for ForecastError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ForecastError::not_found(id),
            StoreError::Persistence { message } => ForecastError::persistence(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_service_taxonomy() {
        assert!(matches!(
            ForecastError::from(StoreError::not_found(5)),
            ForecastError::NotFound { id: 5 }
        ));
        assert!(matches!(
            ForecastError::from(StoreError::persistence("disk gone")),
            ForecastError::Persistence { .. }
        ));
    }
}
