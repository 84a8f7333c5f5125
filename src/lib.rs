//! Version-aware forecast record API core.
//!
//! Exposes a single resource, the forecast record, through a multi-version
//! API surface backed by a pluggable store. The crate is the representation
//! and reconciliation layer between an external HTTP handler and the store:
//!
//! - [`VersionRegistry`] - explicit table of supported versions, their
//!   deprecation status and exactly which operations each maps
//! - [`representation`] - hand-written projections between the canonical
//!   record and per-version read/write shapes
//! - [`patch`] - partial-update reconciliation with validate-before-commit
//! - [`ForecastService`] - the operation façade a request handler calls,
//!   in blocking and non-blocking variants
//! - [`ForecastStore`] / [`AsyncForecastStore`] - the store contract, with
//!   an [`InMemoryStore`] implementation
//!
//! # Quick Start
//!
//! ```rust
//! use forecast_server::{ForecastService, ForecastWrite, RequestContext};
//! use forecast_server::store::InMemoryStore;
//! use chrono::{TimeZone, Utc};
//!
//! # fn example() -> Result<(), forecast_server::ForecastError> {
//! let service = ForecastService::new(InMemoryStore::new());
//! let context = RequestContext::with_generated_id();
//!
//! let body = ForecastWrite {
//!     date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
//!     temperature_celsius: Some(10),
//!     summary: Some("Mild".to_string()),
//! };
//! let created = service.create("1.0", body, &context)?;
//! assert_eq!(created.representation.temperature_fahrenheit(), 49);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod patch;
pub mod representation;
pub mod service;
pub mod store;
pub mod version;

// Re-export commonly used types for convenience
pub use error::{FieldViolation, ForecastError, ForecastResult, ValidationErrors};
pub use model::{ForecastDraft, ForecastRecord, SUMMARY_MAX_LEN, fahrenheit_for};
pub use patch::PatchOperation;
pub use representation::{ForecastWrite, ReadRepresentation};
pub use service::{CreatedForecast, ForecastService, RequestContext};
pub use store::{AsyncForecastStore, ForecastStore, InMemoryStore, StoreError};
pub use version::{Operation, VersionBinding, VersionInfo, VersionRegistry};
