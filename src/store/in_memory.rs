//! In-memory store implementation.
//!
//! Keeps two maps behind one lock: the working state that mutating
//! operations edit, and the committed snapshot that [`commit`] overwrites.
//! Uncommitted mutations are visible to reads through this adapter, which
//! matches change-tracking stores, but only a commit makes them durable;
//! [`rollback_uncommitted`] restores the working state from the snapshot.
//!
//! Intended for tests, development and embedding scenarios that do not need
//! persistence across process restarts.
//!
//! The blocking trait methods acquire the lock with `blocking_read` /
//! `blocking_write` and therefore must not be called from an async context;
//! use the [`AsyncForecastStore`] methods there.
//!
//! [`commit`]: crate::store::ForecastStore::commit
//! [`rollback_uncommitted`]: InMemoryStore::rollback_uncommitted

use crate::model::{ForecastDraft, ForecastRecord};
use crate::store::{AsyncForecastStore, ForecastStore, StoreError};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    working: HashMap<i32, ForecastRecord>,
    committed: HashMap<i32, ForecastRecord>,
    next_id: i32,
}

impl StoreState {
    fn list(&self) -> Vec<ForecastRecord> {
        let mut records: Vec<ForecastRecord> = self.working.values().cloned().collect();
        records.sort_by_key(|record| record.id);
        records
    }

    fn create(&mut self, draft: ForecastDraft) -> ForecastRecord {
        self.next_id += 1;
        let record = draft.into_record(self.next_id);
        self.working.insert(record.id, record.clone());
        debug!("buffered create of forecast {}", record.id);
        record
    }

    fn update(&mut self, record: &ForecastRecord) -> Result<(), StoreError> {
        if !self.working.contains_key(&record.id) {
            return Err(StoreError::not_found(record.id));
        }
        self.working.insert(record.id, record.clone());
        debug!("buffered update of forecast {}", record.id);
        Ok(())
    }

    fn remove(&mut self, id: i32) -> Result<(), StoreError> {
        if self.working.remove(&id).is_none() {
            return Err(StoreError::not_found(id));
        }
        debug!("buffered removal of forecast {id}");
        Ok(())
    }

    fn commit(&mut self) {
        self.committed = self.working.clone();
        debug!("committed {} records", self.committed.len());
    }
}

/// Thread-safe in-memory store.
///
/// Cloning shares the underlying state. The lock is held only for the
/// duration of each map operation and never across an await point, so one
/// state body backs both the blocking and the non-blocking trait.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

/// Snapshot counts for debugging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Records in the durable snapshot.
    pub committed_records: usize,
    /// Records in the working state, including uncommitted mutations.
    pub working_records: usize,
}

impl InMemoryStore {
    /// Create an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every buffered mutation, restoring the working state to the
    /// last committed snapshot. Blocking; not for async contexts.
    pub fn rollback_uncommitted(&self) {
        let mut state = self.state.blocking_write();
        state.working = state.committed.clone();
        debug!(
            "rolled back to committed snapshot ({} records)",
            state.working.len()
        );
    }

    /// Current record counts. Blocking; not for async contexts.
    pub fn stats(&self) -> StoreStats {
        let state = self.state.blocking_read();
        StoreStats {
            committed_records: state.committed.len(),
            working_records: state.working.len(),
        }
    }
}

impl ForecastStore for InMemoryStore {
    fn list(&self) -> Result<Vec<ForecastRecord>, StoreError> {
        Ok(self.state.blocking_read().list())
    }

    fn get_by_id(&self, id: i32) -> Result<Option<ForecastRecord>, StoreError> {
        Ok(self.state.blocking_read().working.get(&id).cloned())
    }

    fn create(&self, draft: ForecastDraft) -> Result<ForecastRecord, StoreError> {
        Ok(self.state.blocking_write().create(draft))
    }

    fn update(&self, record: &ForecastRecord) -> Result<(), StoreError> {
        self.state.blocking_write().update(record)
    }

    fn remove(&self, id: i32) -> Result<(), StoreError> {
        self.state.blocking_write().remove(id)
    }

    fn commit(&self) -> Result<(), StoreError> {
        self.state.blocking_write().commit();
        Ok(())
    }
}

impl AsyncForecastStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<ForecastRecord>, StoreError> {
        Ok(self.state.read().await.list())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<ForecastRecord>, StoreError> {
        Ok(self.state.read().await.working.get(&id).cloned())
    }

    async fn create(&self, draft: ForecastDraft) -> Result<ForecastRecord, StoreError> {
        Ok(self.state.write().await.create(draft))
    }

    async fn update(&self, record: &ForecastRecord) -> Result<(), StoreError> {
        self.state.write().await.update(record)
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        self.state.write().await.remove(id)
    }

    async fn commit(&self) -> Result<(), StoreError> {
        self.state.write().await.commit();
        Ok(())
    }
}
