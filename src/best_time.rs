//! Best completion time record
//!
//! A finished round's time is compared against the stored best and written
//! back only when strictly faster.

use thiserror::Error;

use crate::persistence::{BestTimeStore, PersistenceError};

/// Result of submitting a finished round's time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestTimeUpdate {
    /// The best time before this submission (`None` if there was none)
    pub previous: Option<u64>,
    /// Whether the submitted time replaced the stored one
    pub new_record: bool,
}

/// Submission failed part way through
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Could not read best time: {0}")]
    Read(#[source] PersistenceError),
    #[error("Could not save best time (previous best: {previous:?}): {source}")]
    Write {
        previous: Option<u64>,
        #[source]
        source: PersistenceError,
    },
}

impl SubmitError {
    /// What was known before the failure. A failed write still read the old best.
    pub fn partial_update(&self) -> Option<BestTimeUpdate> {
        match self {
            SubmitError::Read(_) => None,
            SubmitError::Write { previous, .. } => Some(BestTimeUpdate {
                previous: *previous,
                new_record: true,
            }),
        }
    }

    pub fn into_source(self) -> PersistenceError {
        match self {
            SubmitError::Read(source) | SubmitError::Write { source, .. } => source,
        }
    }
}

/// Check if a time beats the previous best
pub fn qualifies(seconds: u64, previous: Option<u64>) -> bool {
    previous.is_none_or(|best| seconds < best)
}

/// Read, compare and (maybe) write the best time in one step
pub fn submit<S>(store: &mut S, seconds: u64) -> Result<BestTimeUpdate, SubmitError>
where
    S: BestTimeStore + ?Sized,
{
    let previous = store.get_best().map_err(SubmitError::Read)?;
    let new_record = qualifies(seconds, previous);
    if new_record {
        store
            .set_best(seconds)
            .map_err(|source| SubmitError::Write { previous, source })?;
        log::info!("New best time: {}s (previous: {:?})", seconds, previous);
    }
    Ok(BestTimeUpdate {
        previous,
        new_record,
    })
}
