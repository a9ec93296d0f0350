//! Store location configuration.
//!
//! # Responsibility
//! - Resolve where each collection file lives.
//!
//! # Invariants
//! - Configuration is a plain value handed to store constructors; there is
//!   no process-wide default that tests could leak into each other.

use crate::model::booking::Booking;
use crate::model::establishment::Establishment;
use crate::model::patron::Patron;
use crate::model::Record;
use std::path::{Path, PathBuf};

pub const ESTABLISHMENTS_FILE_NAME: &str = "hotels.json";
pub const PATRONS_FILE_NAME: &str = "customers.json";
pub const BOOKINGS_FILE_NAME: &str = "reservations.json";

/// Paths of the three collection files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    establishments_path: PathBuf,
    patrons_path: PathBuf,
    bookings_path: PathBuf,
}

impl StoreConfig {
    /// Places every collection under `dir` with its default file name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            establishments_path: dir.join(ESTABLISHMENTS_FILE_NAME),
            patrons_path: dir.join(PATRONS_FILE_NAME),
            bookings_path: dir.join(BOOKINGS_FILE_NAME),
        }
    }

    pub fn with_establishments_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.establishments_path = path.into();
        self
    }

    pub fn with_patrons_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.patrons_path = path.into();
        self
    }

    pub fn with_bookings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bookings_path = path.into();
        self
    }

    pub fn establishments_path(&self) -> &Path {
        &self.establishments_path
    }

    pub fn patrons_path(&self) -> &Path {
        &self.patrons_path
    }

    pub fn bookings_path(&self) -> &Path {
        &self.bookings_path
    }

    /// `(kind, path)` for every collection, establishments first.
    pub fn collections(&self) -> [(&'static str, &Path); 3] {
        [
            (Establishment::KIND, self.establishments_path()),
            (Patron::KIND, self.patrons_path()),
            (Booking::KIND, self.bookings_path()),
        ]
    }
}

impl Default for StoreConfig {
    /// Default file names in the current working directory.
    fn default() -> Self {
        Self::in_dir(".")
    }
}
