//! Patron (customer) record.

use super::Record;
use serde::{Deserialize, Serialize};

/// Identity of a patron inside the `customers` collection.
pub type PatronId = i64;

/// Customer referenced by bookings through `PatronId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Patron {
    /// Serialized as `customer_id`.
    #[serde(rename = "customer_id")]
    pub id: PatronId,
    pub name: String,
    /// Serialized as `email`. Stored verbatim, never validated.
    #[serde(rename = "email")]
    pub contact_address: String,
}

impl Patron {
    pub fn new(id: PatronId, name: impl Into<String>, contact_address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact_address: contact_address.into(),
        }
    }
}

impl Record for Patron {
    const KIND: &'static str = "customers";

    fn record_id(&self) -> i64 {
        self.id
    }
}
