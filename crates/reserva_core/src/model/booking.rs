//! Booking record linking a patron to an establishment by id.
//!
//! # Invariants
//! - `patron_ref` and `establishment_ref` are never resolved or checked.

use super::establishment::EstablishmentId;
use super::patron::PatronId;
use super::Record;
use serde::{Deserialize, Serialize};

/// Identity of a booking inside the `reservations` collection.
pub type BookingId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Booking {
    /// Serialized as `reservation_id`.
    #[serde(rename = "reservation_id")]
    pub id: BookingId,
    /// Serialized as `customer_id`.
    #[serde(rename = "customer_id")]
    pub patron_ref: PatronId,
    /// Serialized as `hotel_id`.
    #[serde(rename = "hotel_id")]
    pub establishment_ref: EstablishmentId,
}

impl Booking {
    pub fn new(id: BookingId, patron_ref: PatronId, establishment_ref: EstablishmentId) -> Self {
        Self {
            id,
            patron_ref,
            establishment_ref,
        }
    }
}

impl Record for Booking {
    const KIND: &'static str = "reservations";

    fn record_id(&self) -> i64 {
        self.id
    }
}
