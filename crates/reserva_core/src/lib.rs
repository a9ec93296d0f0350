//! Reservation record-keeping core.
//!
//! Establishments, patrons and bookings each live in their own JSON
//! collection file and are reloaded in full on every operation.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use logging::{init_logging, logging_status, LogLevel, LoggingConfig, LoggingError};
pub use model::booking::{Booking, BookingId};
pub use model::establishment::{Establishment, EstablishmentId};
pub use model::patron::{Patron, PatronId};
pub use model::Record;
pub use service::reservation_desk::ReservationDesk;
pub use store::booking_store::BookingStore;
pub use store::collection::JsonCollection;
pub use store::establishment_store::EstablishmentStore;
pub use store::patron_store::PatronStore;
pub use store::{StoreError, StoreOperation, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
