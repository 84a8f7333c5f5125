//! Service façade coordinating registry, mapper, reconciler and store.
//!
//! [`ForecastService`] is what an external request handler calls after
//! terminating HTTP. Every method resolves the requested version and checks
//! the operation is mapped before touching the store, performs the work,
//! commits, and projects results back through the version's read-shape. All
//! failures are typed [`crate::error::ForecastError`] values for the
//! handler to translate into status codes.
//!
//! The blocking methods are implemented over [`crate::store::ForecastStore`]
//! and the `*_async` methods over [`crate::store::AsyncForecastStore`];
//! both sets share the same semantics.

mod blocking;
mod context;
mod core;
mod non_blocking;

pub use context::RequestContext;
pub use core::{CreatedForecast, ForecastService};
