//! Tap handling
//!
//! One transition function drives the round. The three active phases share a
//! single rule; a finished round resets on any tap.

use std::time::Instant;

use super::geometry::Circle;
use super::state::{DisplayStatus, FinishSummary, GamePhase, RoundState};
use crate::best_time;
use crate::persistence::{BestTimeStore, PersistenceError};

/// What a tap landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    /// No circle under the point
    Empty,
    /// A circle without a number
    Unlabeled,
    Label(u32),
}

impl Tap {
    pub fn from_hit(hit: Option<&Circle>) -> Self {
        match hit {
            None => Tap::Empty,
            Some(circle) => circle.label().map_or(Tap::Unlabeled, Tap::Label),
        }
    }
}

/// What a tap did, for the presentation layer
#[derive(Debug)]
pub struct TapOutcome {
    pub status: DisplayStatus,
    /// Wrong circle: buzz/flash the player
    pub feedback: bool,
    /// The round was dismissed; the circles must be regenerated
    pub reset: bool,
    /// Best time could not be read or written. The round still finished.
    pub warning: Option<PersistenceError>,
}

impl TapOutcome {
    fn quiet(status: DisplayStatus) -> Self {
        Self {
            status,
            feedback: false,
            reset: false,
            warning: None,
        }
    }
}

/// Advance the round by one tap.
///
/// Empty space is ignored while the round is active. Any circle other than the
/// expected number, unlabeled ones included, counts as an error.
pub fn handle_tap<S>(round: &mut RoundState, tap: Tap, now: Instant, store: &mut S) -> TapOutcome
where
    S: BestTimeStore + ?Sized,
{
    match (round.phase, tap) {
        (phase, _) if !phase.is_active() => {
            round.reset();
            log::debug!("Round dismissed");
            TapOutcome {
                reset: true,
                ..TapOutcome::quiet(round.status())
            }
        }

        (_, Tap::Empty) => TapOutcome::quiet(round.status()),

        (phase, tap) => {
            if phase == GamePhase::NotStarted {
                round.started_at = Some(now);
            }

            if tap != Tap::Label(round.expected_next) {
                round.phase = GamePhase::Error;
                round.error_count += 1;
                log::debug!(
                    "Tapped {:?} but expected {} ({} errors)",
                    tap,
                    round.expected_next,
                    round.error_count
                );
                return TapOutcome {
                    feedback: true,
                    ..TapOutcome::quiet(round.status())
                };
            }

            if round.expected_next >= round.last_label {
                return finish(round, now, store);
            }

            round.phase = GamePhase::InProgress;
            round.expected_next += 1;
            TapOutcome::quiet(round.status())
        }
    }
}

fn finish<S>(round: &mut RoundState, now: Instant, store: &mut S) -> TapOutcome
where
    S: BestTimeStore + ?Sized,
{
    let elapsed = round
        .started_at
        .map(|start| now.saturating_duration_since(start))
        .unwrap_or_default();
    round.phase = GamePhase::Finished;
    round.elapsed = Some(elapsed);

    let elapsed_secs = elapsed.as_secs();
    let mut summary = FinishSummary {
        elapsed_secs,
        previous_best: None,
        new_record: false,
        error_count: round.error_count,
    };

    let (update, warning) = match best_time::submit(store, elapsed_secs) {
        Ok(update) => (Some(update), None),
        Err(e) => {
            log::warn!("Best time unavailable: {}", e);
            (e.partial_update(), Some(e.into_source()))
        }
    };
    if let Some(update) = update {
        summary.previous_best = update.previous;
        summary.new_record = update.new_record;
    }

    log::info!(
        "Round finished in {}s with {} errors",
        elapsed_secs,
        round.error_count
    );

    TapOutcome {
        status: DisplayStatus::Finished(summary),
        feedback: false,
        reset: false,
        warning,
    }
}
