//! Best time persistence
//!
//! The only state that survives across rounds is a single named integer:
//! the fastest completion time in whole seconds.
//!
//! Stores:
//! - `MemoryStore`: process-local, used by tests and ephemeral sessions
//! - `JsonFileStore`: one JSON object on disk, `{"BEST_TIME": 12}`

pub mod file;

pub use file::JsonFileStore;

use thiserror::Error;

/// Failure to read or write the best time record
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Storage I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Malformed stored data: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Storage unavailable")]
    Unavailable,
}

/// Get/set pair for the persisted best time (seconds)
pub trait BestTimeStore {
    /// Previously recorded best time, `None` if nothing was stored yet
    fn get_best(&self) -> Result<Option<u64>, PersistenceError>;

    /// Overwrite the recorded best time
    fn set_best(&mut self, seconds: u64) -> Result<(), PersistenceError>;
}

impl<S: BestTimeStore + ?Sized> BestTimeStore for &mut S {
    fn get_best(&self) -> Result<Option<u64>, PersistenceError> {
        (**self).get_best()
    }

    fn set_best(&mut self, seconds: u64) -> Result<(), PersistenceError> {
        (**self).set_best(seconds)
    }
}

/// In-memory best time
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { best: None }
    }

    pub fn with_best(seconds: u64) -> Self {
        Self {
            best: Some(seconds),
        }
    }
}

impl BestTimeStore for MemoryStore {
    fn get_best(&self) -> Result<Option<u64>, PersistenceError> {
        Ok(self.best)
    }

    fn set_best(&mut self, seconds: u64) -> Result<(), PersistenceError> {
        self.best = Some(seconds);
        Ok(())
    }
}
