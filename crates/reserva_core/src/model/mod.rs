//! Domain records persisted by the reservation stores.
//!
//! # Responsibility
//! - Define the three flat record shapes kept in collection files.
//! - Pin the on-disk field names used by existing data files.
//!
//! # Invariants
//! - Records are flat: no nested structures, no metadata fields.
//! - Decoding is strict: every field is required, unknown keys are rejected.
//! - Cross-record references are plain ids and are never resolved here.

pub mod booking;
pub mod establishment;
pub mod patron;

/// Common surface shared by every persisted record kind.
pub trait Record {
    /// Collection name used in diagnostics (`hotels`, `customers`, ...).
    const KIND: &'static str;

    /// Caller-supplied identity of the record.
    fn record_id(&self) -> i64;
}
