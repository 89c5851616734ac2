//! Round state and display status

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board is up, clock not running yet
    NotStarted,
    /// Last tap was correct
    InProgress,
    /// Last tap was the wrong number; the round continues
    Error,
    /// Every label was tapped in order
    Finished,
}

impl GamePhase {
    /// True while taps advance or fail the sequence
    pub fn is_active(&self) -> bool {
        !matches!(self, GamePhase::Finished)
    }
}

/// Mutable record of one round, changed only by [`super::tap::handle_tap`]
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub phase: GamePhase,
    /// Label the player must tap next
    pub expected_next: u32,
    /// Highest label on the board; tapping it finishes the round
    pub last_label: u32,
    /// Set by the first labeled tap
    pub started_at: Option<Instant>,
    /// Set when the round finishes
    pub elapsed: Option<Duration>,
    pub error_count: u32,
}

impl RoundState {
    /// Fresh round for a board labeled `1..=last_label`
    pub fn new(last_label: u32) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            expected_next: 1,
            last_label,
            started_at: None,
            elapsed: None,
            error_count: 0,
        }
    }

    /// Back to the start, keeping the board size
    pub fn reset(&mut self) {
        *self = Self::new(self.last_label);
    }

    /// Status for the current phase. A finished round reports no best time;
    /// use the outcome of the finishing tap for that.
    pub fn status(&self) -> DisplayStatus {
        match self.phase {
            GamePhase::NotStarted | GamePhase::InProgress => DisplayStatus::Next(self.expected_next),
            GamePhase::Error => DisplayStatus::Error {
                next: self.expected_next,
            },
            GamePhase::Finished => DisplayStatus::Finished(FinishSummary {
                elapsed_secs: self.elapsed.map_or(0, |e| e.as_secs()),
                previous_best: None,
                new_record: false,
                error_count: self.error_count,
            }),
        }
    }
}

/// How a finished round went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishSummary {
    /// Whole seconds from first to last tap
    pub elapsed_secs: u64,
    /// Best time before this round, `None` if none or unreadable
    pub previous_best: Option<u64>,
    pub new_record: bool,
    pub error_count: u32,
}

/// What the presentation layer shows in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Next(u32),
    Error { next: u32 },
    Finished(FinishSummary),
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStatus::Next(n) => write!(f, "Next: {}", n),
            DisplayStatus::Error { .. } => write!(f, "ERROR"),
            DisplayStatus::Finished(summary) => {
                match summary.previous_best {
                    Some(best) if !summary.new_record => {
                        write!(f, "{} sec (best: {} sec)", summary.elapsed_secs, best)?
                    }
                    _ => write!(f, "{} seconds", summary.elapsed_secs)?,
                }
                match summary.error_count {
                    0 => Ok(()),
                    1 => write!(f, ", 1 error"),
                    n => write!(f, ", {} errors", n),
                }
            }
        }
    }
}
