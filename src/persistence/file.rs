//! JSON file backed best time store

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{BestTimeStore, PersistenceError};
use crate::consts::BEST_TIME_KEY;

/// Keeps the best time as `{"BEST_TIME": <seconds>}` in a single file.
///
/// A missing file means no record yet. Other keys in the file are preserved
/// on write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, serde_json::Value>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl BestTimeStore for JsonFileStore {
    fn get_best(&self) -> Result<Option<u64>, PersistenceError> {
        let entries = self.read_entries()?;
        Ok(entries.get(BEST_TIME_KEY).and_then(|v| v.as_u64()))
    }

    fn set_best(&mut self, seconds: u64) -> Result<(), PersistenceError> {
        let mut entries = self.read_entries()?;
        entries.insert(BEST_TIME_KEY.to_string(), seconds.into());

        // Write then rename: readers see either the old or the new record
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_string(&entries)?)?;
        std::fs::rename(&tmp, &self.path)?;

        log::info!("Best time saved ({}s) to {}", seconds, self.path.display());
        Ok(())
    }
}
