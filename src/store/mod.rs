//! Store adapter contracts and the in-memory implementation.
//!
//! The core consumes a store through two traits with identical semantics:
//! [`ForecastStore`] for blocking call sites and [`AsyncForecastStore`] for
//! handlers that suspend during I/O. A single adapter type normally
//! implements both over one body.
//!
//! # Durability model
//!
//! Mutating operations (`create`, `update`, `remove`) are buffered: they are
//! visible to subsequent reads through the same adapter but are not durable
//! until [`ForecastStore::commit`] succeeds. Callers must commit after any
//! mutating operation, and must not report success to their own callers
//! until the commit has returned. A failed or skipped commit leaves the
//! durable state exactly as it was before the request.
//!
//! # Example
//!
//! ```rust
//! use forecast_server::store::{ForecastStore, InMemoryStore};
//! use forecast_server::model::ForecastDraft;
//! use chrono::{TimeZone, Utc};
//!
//! # fn example() -> Result<(), forecast_server::store::StoreError> {
//! let store = InMemoryStore::new();
//! let draft = ForecastDraft {
//!     date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     temperature_celsius: 10,
//!     summary: Some("Mild".to_string()),
//! };
//!
//! let record = store.create(draft)?;
//! store.commit()?;
//! assert_eq!(store.get_by_id(record.id)?.map(|r| r.id), Some(record.id));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StoreError;
pub use in_memory::{InMemoryStore, StoreStats};

use crate::model::{ForecastDraft, ForecastRecord};
use std::future::Future;

/// Blocking store contract.
pub trait ForecastStore: Send + Sync {
    /// All records. Order is unspecified but stable within one call.
    fn list(&self) -> Result<Vec<ForecastRecord>, StoreError>;

    /// The record for `id`, or `None` when absent.
    fn get_by_id(&self, id: i32) -> Result<Option<ForecastRecord>, StoreError>;

    /// Buffer a new record and return it with its store-assigned id.
    ///
    /// Required fields are present by construction of [`ForecastDraft`];
    /// the id is unique and immutable for the record's lifetime.
    fn create(&self, draft: ForecastDraft) -> Result<ForecastRecord, StoreError>;

    /// Buffer the new state of an existing record.
    ///
    /// Adapters that track mutations through their own change tracking may
    /// treat this as a hint and do nothing.
    fn update(&self, record: &ForecastRecord) -> Result<(), StoreError>;

    /// Buffer removal of the record for `id`.
    ///
    /// Fails with [`StoreError::NotFound`] when no such record exists.
    fn remove(&self, id: i32) -> Result<(), StoreError>;

    /// Make all buffered mutations durable.
    fn commit(&self) -> Result<(), StoreError>;
}

/// Non-blocking store contract, semantically identical to [`ForecastStore`].
pub trait AsyncForecastStore: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<ForecastRecord>, StoreError>> + Send;

    fn get_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<ForecastRecord>, StoreError>> + Send;

    fn create(
        &self,
        draft: ForecastDraft,
    ) -> impl Future<Output = Result<ForecastRecord, StoreError>> + Send;

    fn update(
        &self,
        record: &ForecastRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn remove(&self, id: i32) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn commit(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
}
