//! Error types for forecast service operations.
//!
//! This module provides the error taxonomy for the whole crate. Every core
//! failure is a typed outcome that an embedding request handler can translate
//! into a transport status code; nothing in the core panics on bad input.

use serde::Serialize;
use std::fmt;

/// Main error type for forecast service operations.
///
/// Covers every failure the core can produce, with enough context for the
/// handler layer to pick a status code and build an error body.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// The requested forecast id does not exist. No entity state changed.
    #[error("Forecast not found: id {id}")]
    NotFound { id: i32 },

    /// The resulting entity state violates one or more field constraints.
    /// No mutation occurred.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A patch operation was malformed or targeted a path outside the
    /// write-shape. The whole request is rejected; no mutation occurred.
    #[error("Patch operation {index} failed: {reason}")]
    Operation { index: usize, reason: String },

    /// The requested version token is not registered. Resolved before any
    /// store access.
    #[error("Unsupported API version: '{token}'")]
    UnsupportedVersion { token: String },

    /// The version exists but does not map the requested operation. This is
    /// distinct from [`ForecastError::UnsupportedVersion`] and never falls
    /// back to another version's behavior.
    #[error("Operation '{operation}' is not available in API version '{version}'")]
    OperationNotMapped { version: String, operation: String },

    /// The store failed to commit. Buffered mutations are not durable and
    /// callers must not report success.
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl ForecastError {
    /// Create a not found error.
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    /// Create a patch operation error for the operation at `index`.
    pub fn operation(index: usize, reason: impl Into<String>) -> Self {
        Self::Operation {
            index,
            reason: reason.into(),
        }
    }

    /// Create an unsupported version error.
    pub fn unsupported_version(token: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            token: token.into(),
        }
    }

    /// Create an operation not mapped error.
    pub fn operation_not_mapped(
        version: impl Into<String>,
        operation: impl fmt::Display,
    ) -> Self {
        Self::OperationNotMapped {
            version: version.into(),
            operation: operation.to_string(),
        }
    }

    /// Create a persistence error.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}

/// A single field-level constraint violation.
///
/// Serializable so a handler can return per-field detail in a 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FieldViolation {
    /// A required field is missing from the write-shape.
    #[error("Required field '{field}' is missing")]
    MissingRequired { field: &'static str },

    /// A string field exceeds its maximum length.
    #[error("Field '{field}' exceeds maximum length {max} (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl FieldViolation {
    /// The wire name of the violated field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRequired { field } => field,
            Self::TooLong { field, .. } => field,
        }
    }
}

/// The accumulated outcome of validating a write-shape.
///
/// Collects every violation rather than stopping at the first, so handlers
/// can report all rejected fields in one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// True when no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The recorded violations, in discovery order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Convert into a result, erroring when any violation was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for ForecastError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

// Result type aliases for convenience
pub type ForecastResult<T> = Result<T, ForecastError>;
pub type ValidationResult<T> = Result<T, ValidationErrors>;
