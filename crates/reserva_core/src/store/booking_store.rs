//! Booking collection store.
//!
//! # Invariants
//! - References are stored without looking at the patron or establishment
//!   collections; dangling ids are accepted silently.

use super::collection::JsonCollection;
use super::StoreResult;
use crate::config::StoreConfig;
use crate::model::booking::{Booking, BookingId};
use crate::model::establishment::EstablishmentId;
use crate::model::patron::PatronId;
use log::info;
use std::path::{Path, PathBuf};

/// Store owning the `reservations` collection file.
#[derive(Debug, Clone)]
pub struct BookingStore {
    collection: JsonCollection<Booking>,
}

impl BookingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.bookings_path())
    }

    pub fn path(&self) -> &Path {
        self.collection.path()
    }

    pub fn create(
        &self,
        id: BookingId,
        patron_ref: PatronId,
        establishment_ref: EstablishmentId,
    ) -> StoreResult<()> {
        let booking = Booking::new(id, patron_ref, establishment_ref);
        let total = self.collection.modify(|records| {
            records.push(booking);
            records.len()
        })?;
        info!(
            "event=booking_create module=store status=ok id={} patron_ref={} establishment_ref={} records={}",
            id, patron_ref, establishment_ref, total
        );
        Ok(())
    }

    pub fn list(&self) -> StoreResult<Vec<Booking>> {
        self.collection.load()
    }
}
