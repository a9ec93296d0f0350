//! Collection-file stores for establishments, patrons and bookings.
//!
//! # Responsibility
//! - Persist each record kind as one JSON collection file.
//! - Expose create/list (and delete for establishments) as full
//!   load -> transform -> save cycles.
//!
//! # Invariants
//! - No store caches records between calls; every call rereads the file.
//! - Every write replaces the whole file.
//! - Stores never consult each other; ids are not cross-checked.
//! - A missing file is an empty collection, never an error.
//! - No file locking: two writers racing on one file lose an update.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod booking_store;
pub mod collection;
pub mod establishment_store;
pub mod patron_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// I/O step that failed while touching a collection file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Read,
    Write,
}

impl StoreOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Failure surfaced by a collection store operation.
#[derive(Debug)]
pub enum StoreError {
    /// The file exists but is not a well-formed collection of the expected
    /// record shape. Never repaired automatically.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Reading or writing the file failed. After a failed write the record
    /// being persisted must be treated as not committed.
    Persistence {
        path: PathBuf,
        operation: StoreOperation,
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Corrupt { path, .. } | Self::Persistence { path, .. } => path,
        }
    }

    /// Stable short code used in diagnostic log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Corrupt { .. } => "corrupt_store",
            Self::Persistence {
                operation: StoreOperation::Read,
                ..
            } => "store_read_failed",
            Self::Persistence {
                operation: StoreOperation::Write,
                ..
            } => "store_write_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Corrupt { path, source } => {
                write!(f, "corrupt collection file `{}`: {source}", path.display())
            }
            Self::Persistence {
                path,
                operation,
                source,
            } => write!(
                f,
                "failed to {} collection file `{}`: {source}",
                operation.as_str(),
                path.display()
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Corrupt { source, .. } => Some(source),
            Self::Persistence { source, .. } => Some(source),
        }
    }
}
