//! Establishment record.
//!
//! # Invariants
//! - `id` is supplied by the caller; uniqueness is not enforced anywhere.
//! - `available_units` has no lower bound and is never adjusted by bookings.

use super::Record;
use serde::{Deserialize, Serialize};

/// Identity of an establishment inside the `hotels` collection.
pub type EstablishmentId = i64;

/// Bookable location with a count of available units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Establishment {
    /// Serialized as `hotel_id` to stay compatible with existing files.
    #[serde(rename = "hotel_id")]
    pub id: EstablishmentId,
    pub name: String,
    pub location: String,
    /// Serialized as `rooms_available`.
    #[serde(rename = "rooms_available")]
    pub available_units: i64,
}

impl Establishment {
    pub fn new(
        id: EstablishmentId,
        name: impl Into<String>,
        location: impl Into<String>,
        available_units: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            available_units,
        }
    }
}

impl Record for Establishment {
    const KIND: &'static str = "hotels";

    fn record_id(&self) -> i64 {
        self.id
    }
}
