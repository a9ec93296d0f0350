//! Establishment collection store.
//!
//! # Invariants
//! - `create` never checks for duplicate ids.
//! - `delete` of an unknown id is a no-op that still rewrites the file.
//! - `available_units` is stored as given.

use super::collection::JsonCollection;
use super::StoreResult;
use crate::config::StoreConfig;
use crate::model::establishment::{Establishment, EstablishmentId};
use crate::model::Record;
use log::info;
use std::path::{Path, PathBuf};

/// Store owning the `hotels` collection file.
#[derive(Debug, Clone)]
pub struct EstablishmentStore {
    collection: JsonCollection<Establishment>,
}

impl EstablishmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.establishments_path())
    }

    pub fn path(&self) -> &Path {
        self.collection.path()
    }

    /// Appends a new establishment and persists the full collection.
    pub fn create(
        &self,
        id: EstablishmentId,
        name: impl Into<String>,
        location: impl Into<String>,
        available_units: i64,
    ) -> StoreResult<()> {
        let establishment = Establishment::new(id, name, location, available_units);
        let total = self.collection.modify(|records| {
            records.push(establishment);
            records.len()
        })?;
        info!(
            "event=establishment_create module=store status=ok id={} records={}",
            id, total
        );
        Ok(())
    }

    /// Removes every establishment whose id equals `id`.
    ///
    /// Returns how many records were removed; zero is not an error.
    pub fn delete(&self, id: EstablishmentId) -> StoreResult<usize> {
        let removed = self.collection.modify(|records| {
            let before = records.len();
            records.retain(|record| record.record_id() != id);
            before - records.len()
        })?;
        info!(
            "event=establishment_delete module=store status=ok id={} removed={}",
            id, removed
        );
        Ok(removed)
    }

    /// Returns the collection in file order.
    pub fn list(&self) -> StoreResult<Vec<Establishment>> {
        self.collection.load()
    }
}
