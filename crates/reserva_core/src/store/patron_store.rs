//! Patron collection store. Patrons cannot be deleted.

use super::collection::JsonCollection;
use super::StoreResult;
use crate::config::StoreConfig;
use crate::model::patron::{Patron, PatronId};
use log::info;
use std::path::{Path, PathBuf};

/// Store owning the `customers` collection file.
#[derive(Debug, Clone)]
pub struct PatronStore {
    collection: JsonCollection<Patron>,
}

impl PatronStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.patrons_path())
    }

    pub fn path(&self) -> &Path {
        self.collection.path()
    }

    pub fn create(
        &self,
        id: PatronId,
        name: impl Into<String>,
        contact_address: impl Into<String>,
    ) -> StoreResult<()> {
        let patron = Patron::new(id, name, contact_address);
        let total = self.collection.modify(|records| {
            records.push(patron);
            records.len()
        })?;
        info!(
            "event=patron_create module=store status=ok id={} records={}",
            id, total
        );
        Ok(())
    }

    pub fn list(&self) -> StoreResult<Vec<Patron>> {
        self.collection.load()
    }
}
