//! JSON collection file shared by all record stores.
//!
//! # Responsibility
//! - Round-trip an ordered sequence of records to one JSON array file.
//!
//! # Invariants
//! - `load` preserves file order.
//! - `save` rewrites the whole file; there is no append path.
//! - Durability of the previous content after a failed `save` is undefined.

use super::{StoreError, StoreOperation, StoreResult};
use crate::model::Record;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Instant;

const INDENT: &[u8] = b"    ";

/// Backing file of one record collection.
#[derive(Debug, Clone)]
pub struct JsonCollection<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection.
    ///
    /// # Errors
    /// - `StoreError::Corrupt` when the file is not a JSON array of records.
    /// - `StoreError::Persistence` when an existing file cannot be read.
    pub fn load(&self) -> StoreResult<Vec<T>> {
        let started_at = Instant::now();

        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=collection_load module=store status=ok kind={} records=0 missing_file=true",
                    T::KIND
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                let err = StoreError::Persistence {
                    path: self.path.clone(),
                    operation: StoreOperation::Read,
                    source,
                };
                log_failure("collection_load", T::KIND, &err);
                return Err(err);
            }
        };

        let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| {
            let err = StoreError::Corrupt {
                path: self.path.clone(),
                source,
            };
            log_failure("collection_load", T::KIND, &err);
            err
        })?;

        debug!(
            "event=collection_load module=store status=ok kind={} records={} duration_ms={}",
            T::KIND,
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(records)
    }

    /// Replaces the file content with `records`.
    ///
    /// # Errors
    /// - `StoreError::Persistence` on any encoding or write failure.
    pub fn save(&self, records: &[T]) -> StoreResult<()> {
        let started_at = Instant::now();

        let result = encode(records).and_then(|bytes| std::fs::write(&self.path, bytes));
        if let Err(source) = result {
            let err = StoreError::Persistence {
                path: self.path.clone(),
                operation: StoreOperation::Write,
                source,
            };
            log_failure("collection_save", T::KIND, &err);
            return Err(err);
        }

        debug!(
            "event=collection_save module=store status=ok kind={} records={} duration_ms={}",
            T::KIND,
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Load, apply `mutate`, save. Returns whatever `mutate` returns.
    pub(crate) fn modify<R>(&self, mutate: impl FnOnce(&mut Vec<T>) -> R) -> StoreResult<R> {
        let mut records = self.load()?;
        let outcome = mutate(&mut records);
        self.save(&records)?;
        Ok(outcome)
    }
}

fn encode<T: Serialize>(records: &[T]) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

fn log_failure(event: &str, kind: &str, err: &StoreError) {
    error!(
        "event={} module=store status=error kind={} error_code={} error={}",
        event,
        kind,
        err.code(),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::JsonCollection;
    use crate::model::booking::Booking;
    use crate::store::StoreError;

    #[test]
    fn save_writes_four_space_indented_array() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let collection = JsonCollection::<Booking>::new(dir.path().join("reservations.json"));

        collection.save(&[Booking::new(1, 2, 3)]).expect("collection should save");

        let text = std::fs::read_to_string(collection.path()).expect("collection file should be readable");
        assert_eq!(
            text,
            "[\n    {\n        \"reservation_id\": 1,\n        \"customer_id\": 2,\n        \"hotel_id\": 3\n    }\n]"
        );
    }

    #[test]
    fn empty_file_is_corrupt() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("reservations.json");
        std::fs::write(&path, "").expect("fixture file should be written");

        let err = JsonCollection::<Booking>::new(&path).load().expect_err("load should fail");
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(err.code(), "corrupt_store");
    }

    #[test]
    fn save_into_missing_directory_is_persistence_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let collection =
            JsonCollection::<Booking>::new(dir.path().join("absent").join("reservations.json"));

        let err = collection.save(&[]).expect_err("save should fail");
        assert!(matches!(err, StoreError::Persistence { .. }));
        assert_eq!(err.code(), "store_write_failed");
    }
}
