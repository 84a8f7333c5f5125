//! Service structure and version resolution shared by both dispatch modes.

use crate::error::ForecastResult;
use crate::representation::ReadRepresentation;
use crate::version::{Operation, VersionBinding, VersionInfo, VersionRegistry};
use log::debug;

/// The core service: a store plus the version registration table.
///
/// # Examples
///
/// ```rust
/// use forecast_server::service::{ForecastService, RequestContext};
/// use forecast_server::store::InMemoryStore;
///
/// let service = ForecastService::new(InMemoryStore::new());
/// let context = RequestContext::with_generated_id();
/// let all = service.list("1.0", &context).unwrap();
/// assert!(all.is_empty());
/// ```
pub struct ForecastService<S> {
    pub(super) store: S,
    pub(super) registry: VersionRegistry,
}

impl<S> ForecastService<S> {
    /// Create a service over `store` with the stock version table.
    pub fn new(store: S) -> Self {
        Self::with_registry(store, VersionRegistry::standard())
    }

    /// Create a service with a custom registration table.
    pub fn with_registry(store: S, registry: VersionRegistry) -> Self {
        Self { store, registry }
    }

    /// The registration table in use.
    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    /// Access the underlying store adapter.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Version-neutral liveness probe.
    pub fn ping(&self) -> &'static str {
        "ok"
    }

    /// Registered versions for discovery responses.
    pub fn supported_versions(&self) -> Vec<VersionInfo> {
        self.registry.supported_versions()
    }

    /// Resolve `version` and ensure `operation` is mapped, before any store
    /// access happens.
    pub(super) fn binding(
        &self,
        version: &str,
        operation: Operation,
    ) -> ForecastResult<&VersionBinding> {
        let binding = self.registry.ensure_operation(version, operation)?;
        if binding.is_deprecated() {
            debug!(
                "serving {} via deprecated API version {}",
                operation,
                binding.token()
            );
        }
        Ok(binding)
    }
}

/// Result of a successful create: the projected resource and the location
/// fragment of the new record, for the handler's Location header.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedForecast {
    pub location: String,
    pub representation: ReadRepresentation,
}

impl CreatedForecast {
    pub(super) fn at(representation: ReadRepresentation) -> Self {
        Self {
            location: format!("/forecasts/{}", representation.id()),
            representation,
        }
    }
}
