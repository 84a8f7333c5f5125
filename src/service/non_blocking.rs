//! Non-blocking operation set over an [`AsyncForecastStore`].
//!
//! Same semantics as the blocking set; the surrounding handler can suspend
//! during store I/O instead of occupying a worker thread. Projection, patch
//! application and validation remain synchronous and side-effect-free.

use super::core::{CreatedForecast, ForecastService};
use super::context::RequestContext;
use crate::error::{ForecastError, ForecastResult};
use crate::patch::{self, PatchOperation};
use crate::representation::{self, ForecastWrite, ReadRepresentation};
use crate::store::AsyncForecastStore;
use crate::version::Operation;
use log::{debug, info};

impl<S: AsyncForecastStore> ForecastService<S> {
    /// List every forecast in the version's read-shape.
    pub async fn list_async(
        &self,
        version: &str,
        context: &RequestContext,
    ) -> ForecastResult<Vec<ReadRepresentation>> {
        let binding = self.binding(version, Operation::List)?;
        debug!("[{}] listing forecasts (v{version})", context.request_id());

        let records = self.store.list().await?;
        Ok(records
            .iter()
            .map(|record| representation::project(record, binding.read_shape()))
            .collect())
    }

    /// Fetch one forecast by id in the version's read-shape.
    pub async fn get_by_id_async(
        &self,
        version: &str,
        id: i32,
        context: &RequestContext,
    ) -> ForecastResult<ReadRepresentation> {
        let binding = self.binding(version, Operation::GetById)?;
        debug!("[{}] fetching forecast {id} (v{version})", context.request_id());

        let record = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ForecastError::not_found(id))?;
        Ok(representation::project(&record, binding.read_shape()))
    }

    /// Create a forecast from a full write body.
    pub async fn create_async(
        &self,
        version: &str,
        body: ForecastWrite,
        context: &RequestContext,
    ) -> ForecastResult<CreatedForecast> {
        let binding = self.binding(version, Operation::Create)?;

        let draft = body.validate()?;
        let record = self.store.create(draft).await?;
        self.store.commit().await?;
        info!(
            "[{}] created forecast {} (v{version})",
            context.request_id(),
            record.id
        );

        Ok(CreatedForecast::at(representation::project(
            &record,
            binding.read_shape(),
        )))
    }

    /// Fully replace an existing forecast.
    pub async fn replace_async(
        &self,
        version: &str,
        id: i32,
        body: ForecastWrite,
        context: &RequestContext,
    ) -> ForecastResult<()> {
        self.binding(version, Operation::Replace)?;

        let mut record = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ForecastError::not_found(id))?;

        let draft = body.validate()?;
        draft.replace_into(&mut record);
        self.store.update(&record).await?;
        self.store.commit().await?;
        info!(
            "[{}] replaced forecast {id} (v{version})",
            context.request_id()
        );
        Ok(())
    }

    /// Apply an ordered list of patch operations to an existing forecast.
    pub async fn patch_async(
        &self,
        version: &str,
        id: i32,
        operations: &[PatchOperation],
        context: &RequestContext,
    ) -> ForecastResult<()> {
        self.binding(version, Operation::Patch)?;

        let mut record = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ForecastError::not_found(id))?;

        let draft = patch::reconcile(&record, operations)?;
        draft.replace_into(&mut record);
        self.store.update(&record).await?;
        self.store.commit().await?;
        info!(
            "[{}] patched forecast {id} with {} operation(s) (v{version})",
            context.request_id(),
            operations.len()
        );
        Ok(())
    }

    /// Delete an existing forecast.
    pub async fn delete_async(
        &self,
        version: &str,
        id: i32,
        context: &RequestContext,
    ) -> ForecastResult<()> {
        self.binding(version, Operation::Delete)?;

        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ForecastError::not_found(id))?;
        self.store.remove(id).await?;
        self.store.commit().await?;
        info!(
            "[{}] deleted forecast {id} (v{version})",
            context.request_id()
        );
        Ok(())
    }
}
