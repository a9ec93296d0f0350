//! Reservation desk use-case service.
//!
//! # Responsibility
//! - Register establishments, patrons and bookings through their stores.
//! - Render the establishment directory for display.
//!
//! # Invariants
//! - The desk adds no cross-store checks: a booking may reference ids that
//!   exist in neither the patron nor the establishment collection.
//! - Removing an establishment leaves bookings that reference it untouched.

use crate::config::StoreConfig;
use crate::model::booking::{Booking, BookingId};
use crate::model::establishment::{Establishment, EstablishmentId};
use crate::model::patron::{Patron, PatronId};
use crate::store::booking_store::BookingStore;
use crate::store::establishment_store::EstablishmentStore;
use crate::store::patron_store::PatronStore;
use crate::store::StoreResult;
use log::info;

/// Front desk over the three collection stores.
#[derive(Debug, Clone)]
pub struct ReservationDesk {
    establishments: EstablishmentStore,
    patrons: PatronStore,
    bookings: BookingStore,
}

impl ReservationDesk {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            establishments: EstablishmentStore::from_config(config),
            patrons: PatronStore::from_config(config),
            bookings: BookingStore::from_config(config),
        }
    }

    pub fn register_establishment(
        &self,
        id: EstablishmentId,
        name: &str,
        location: &str,
        available_units: i64,
    ) -> StoreResult<()> {
        self.establishments.create(id, name, location, available_units)?;
        info!("event=establishment_registered module=service status=ok id={id}");
        Ok(())
    }

    /// Removes an establishment; returns the number of records removed.
    pub fn remove_establishment(&self, id: EstablishmentId) -> StoreResult<usize> {
        let removed = self.establishments.delete(id)?;
        info!("event=establishment_removed module=service status=ok id={id} removed={removed}");
        Ok(removed)
    }

    pub fn register_patron(
        &self,
        id: PatronId,
        name: &str,
        contact_address: &str,
    ) -> StoreResult<()> {
        self.patrons.create(id, name, contact_address)?;
        info!("event=patron_registered module=service status=ok id={id}");
        Ok(())
    }

    /// Records a booking without resolving either reference.
    pub fn book(
        &self,
        id: BookingId,
        patron_ref: PatronId,
        establishment_ref: EstablishmentId,
    ) -> StoreResult<()> {
        self.bookings.create(id, patron_ref, establishment_ref)?;
        info!("event=booking_recorded module=service status=ok id={id}");
        Ok(())
    }

    pub fn establishments(&self) -> StoreResult<Vec<Establishment>> {
        self.establishments.list()
    }

    pub fn patrons(&self) -> StoreResult<Vec<Patron>> {
        self.patrons.list()
    }

    pub fn bookings(&self) -> StoreResult<Vec<Booking>> {
        self.bookings.list()
    }

    /// Two display lines per establishment, in file order.
    pub fn establishment_directory(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .establishments
            .list()?
            .iter()
            .flat_map(directory_lines)
            .collect())
    }
}

fn directory_lines(establishment: &Establishment) -> [String; 2] {
    [
        format!("ID: {}, Name: {}", establishment.id, establishment.name),
        format!(
            "Location: {}, Rooms: {}",
            establishment.location, establishment.available_units
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::directory_lines;
    use crate::model::establishment::Establishment;

    #[test]
    fn directory_lines_match_display_format() {
        let lines = directory_lines(&Establishment::new(4, "Display Hotel", "Display City", 20));
        assert_eq!(lines[0], "ID: 4, Name: Display Hotel");
        assert_eq!(lines[1], "Location: Display City, Rooms: 20");
    }
}
