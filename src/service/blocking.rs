//! Blocking operation set over a [`ForecastStore`].

use super::core::{CreatedForecast, ForecastService};
use super::context::RequestContext;
use crate::error::{ForecastError, ForecastResult};
use crate::patch::{self, PatchOperation};
use crate::representation::{self, ForecastWrite, ReadRepresentation};
use crate::store::ForecastStore;
use crate::version::Operation;
use log::{debug, info};

impl<S: ForecastStore> ForecastService<S> {
    /// List every forecast in the version's read-shape.
    pub fn list(
        &self,
        version: &str,
        context: &RequestContext,
    ) -> ForecastResult<Vec<ReadRepresentation>> {
        let binding = self.binding(version, Operation::List)?;
        debug!("[{}] listing forecasts (v{version})", context.request_id());

        let records = self.store.list()?;
        Ok(records
            .iter()
            .map(|record| representation::project(record, binding.read_shape()))
            .collect())
    }

    /// Fetch one forecast by id in the version's read-shape.
    pub fn get_by_id(
        &self,
        version: &str,
        id: i32,
        context: &RequestContext,
    ) -> ForecastResult<ReadRepresentation> {
        let binding = self.binding(version, Operation::GetById)?;
        debug!("[{}] fetching forecast {id} (v{version})", context.request_id());

        let record = self
            .store
            .get_by_id(id)?
            .ok_or_else(|| ForecastError::not_found(id))?;
        Ok(representation::project(&record, binding.read_shape()))
    }

    /// Create a forecast from a full write body.
    pub fn create(
        &self,
        version: &str,
        body: ForecastWrite,
        context: &RequestContext,
    ) -> ForecastResult<CreatedForecast> {
        let binding = self.binding(version, Operation::Create)?;

        let draft = body.validate()?;
        let record = self.store.create(draft)?;
        self.store.commit()?;
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
    ///
    /// Every write-eligible field is overwritten from the body, including
    /// fields whose incoming value is a default. The id is untouched.
    pub fn replace(
        &self,
        version: &str,
        id: i32,
        body: ForecastWrite,
        context: &RequestContext,
    ) -> ForecastResult<()> {
        self.binding(version, Operation::Replace)?;

        let mut record = self
            .store
            .get_by_id(id)?
            .ok_or_else(|| ForecastError::not_found(id))?;

        let draft = body.validate()?;
        draft.replace_into(&mut record);
        self.store.update(&record)?;
        self.store.commit()?;
        info!(
            "[{}] replaced forecast {id} (v{version})",
            context.request_id()
        );
        Ok(())
    }

    /// Apply an ordered list of patch operations to an existing forecast.
    ///
    /// The whole document either lands or is rejected; a failed request
    /// leaves the stored record identical to its pre-request state.
    pub fn patch(
        &self,
        version: &str,
        id: i32,
        operations: &[PatchOperation],
        context: &RequestContext,
    ) -> ForecastResult<()> {
        self.binding(version, Operation::Patch)?;

        let mut record = self
            .store
            .get_by_id(id)?
            .ok_or_else(|| ForecastError::not_found(id))?;

        let draft = patch::reconcile(&record, operations)?;
        draft.replace_into(&mut record);
        self.store.update(&record)?;
        self.store.commit()?;
        info!(
            "[{}] patched forecast {id} with {} operation(s) (v{version})",
            context.request_id(),
            operations.len()
        );
        Ok(())
    }

    /// Delete an existing forecast.
    pub fn delete(
        &self,
        version: &str,
        id: i32,
        context: &RequestContext,
    ) -> ForecastResult<()> {
        self.binding(version, Operation::Delete)?;

        self.store
            .get_by_id(id)?
            .ok_or_else(|| ForecastError::not_found(id))?;
        self.store.remove(id)?;
        self.store.commit()?;
        info!(
            "[{}] deleted forecast {id} (v{version})",
            context.request_id()
        );
        Ok(())
    }
}
