//! Game session
//!
//! Owns everything one player's screen needs: the current circles, the round
//! state and the best time store. The presentation layer calls
//! [`Game::new_round`] whenever [`Game::needs_layout`] is true, forwards taps
//! to [`Game::tap`], and renders [`Game::registry`] plus the returned status.

use std::time::Instant;

use glam::Vec2;

use crate::error::ConfigError;
use crate::persistence::BestTimeStore;
use crate::settings::Settings;
use crate::sim::{CircleRegistry, DisplayStatus, Packing, RoundState, Tap, TapOutcome, generate_round, handle_tap};

pub struct Game<S: BestTimeStore> {
    settings: Settings,
    registry: CircleRegistry,
    round: RoundState,
    store: S,
}

impl<S: BestTimeStore> Game<S> {
    pub fn new(settings: Settings, store: S) -> Result<Self, ConfigError> {
        settings.validate()?;
        let round = RoundState::new(settings.numbered_count);
        Ok(Self {
            settings,
            registry: CircleRegistry::new(),
            round,
            store,
        })
    }

    /// Lay out a new board for the given surface and restart the round
    pub fn new_round(
        &mut self,
        width: f32,
        height: f32,
        seed: Option<u64>,
    ) -> Result<&Packing, ConfigError> {
        let packing = generate_round(width, height, seed, &self.settings)?;
        let last_label = packing.numbered().count() as u32;
        self.round = RoundState::new(last_label);
        Ok(self.registry.populate(packing))
    }

    /// True when there are no circles and a new round must be generated
    pub fn needs_layout(&self) -> bool {
        self.registry.packing().is_none()
    }

    /// Handle a tap at `point` (surface coordinates) at time `now`
    pub fn tap(&mut self, point: Vec2, now: Instant) -> TapOutcome {
        let tap = Tap::from_hit(self.registry.hit_test(point));
        let outcome = handle_tap(&mut self.round, tap, now, &mut self.store);
        if outcome.reset {
            self.registry.reset();
        }
        outcome
    }

    pub fn status(&self) -> DisplayStatus {
        self.round.status()
    }

    pub fn registry(&self) -> &CircleRegistry {
        &self.registry
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::GamePhase;
    use std::time::Duration;

    fn small_game(best: Option<u64>) -> Game<MemoryStore> {
        let settings = Settings {
            numbered_count: 3,
            ..Default::default()
        };
        let store = best.map_or_else(MemoryStore::new, MemoryStore::with_best);
        Game::new(settings, store).unwrap()
    }

    fn center_of(game: &Game<MemoryStore>, label: u32) -> Vec2 {
        game.registry().circle_with_label(label).unwrap().center
    }

    /// A point not covered by any circle
    fn empty_spot(game: &Game<MemoryStore>) -> Vec2 {
        let packing = game.registry().packing().unwrap();
        (0..packing.width as u32)
            .flat_map(|x| (0..packing.height as u32).map(move |y| Vec2::new(x as f32, y as f32)))
            .find(|&p| packing.hit_test(p).is_none())
            .unwrap()
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            numbered_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            Game::new(settings, MemoryStore::new()),
            Err(ConfigError::ZeroNumberedCount)
        ));
    }

    #[test]
    fn test_needs_layout_until_round_generated() {
        let mut game = small_game(None);
        assert!(game.needs_layout());
        game.new_round(480.0, 800.0, Some(1)).unwrap();
        assert!(!game.needs_layout());
        assert_eq!(game.round().last_label, 3);
    }

    #[test]
    fn test_bad_surface_keeps_previous_board() {
        let mut game = small_game(None);
        game.new_round(480.0, 800.0, Some(1)).unwrap();
        assert!(game.new_round(0.0, 800.0, Some(1)).is_err());
        assert!(!game.needs_layout());
    }

    #[test]
    fn test_full_round() {
        let mut game = small_game(Some(20));
        game.new_round(480.0, 800.0, Some(8)).unwrap();
        let t0 = Instant::now();

        let out = game.tap(center_of(&game, 1), t0);
        assert_eq!(out.status, DisplayStatus::Next(2));

        let out = game.tap(center_of(&game, 3), t0 + Duration::from_secs(2));
        assert!(out.feedback);
        assert_eq!(game.round().error_count, 1);

        game.tap(center_of(&game, 2), t0 + Duration::from_secs(6));
        let out = game.tap(center_of(&game, 3), t0 + Duration::from_secs(12));
        assert_eq!(game.round().phase, GamePhase::Finished);
        assert_eq!(out.status.to_string(), "12 seconds, 1 error");
        assert_eq!(game.store().get_best().unwrap(), Some(12));
    }

    #[test]
    fn test_empty_space_is_ignored() {
        let mut game = small_game(None);
        game.new_round(480.0, 800.0, Some(8)).unwrap();
        let t0 = Instant::now();

        let out = game.tap(empty_spot(&game), t0);
        assert!(!out.feedback);
        assert_eq!(game.round().phase, GamePhase::NotStarted);
        assert!(game.round().started_at.is_none());
        assert_eq!(game.round().error_count, 0);
    }

    #[test]
    fn test_unlabeled_circle_is_an_error() {
        let mut game = small_game(None);
        game.new_round(480.0, 800.0, Some(8)).unwrap();
        let t0 = Instant::now();

        let unlabeled = game
            .registry()
            .circles()
            .iter()
            .find(|c| !c.is_numbered())
            .map(|c| c.center)
            .unwrap();
        let out = game.tap(unlabeled, t0);
        assert!(out.feedback);
        assert_eq!(out.status.to_string(), "ERROR");
        assert_eq!(game.round().phase, GamePhase::Error);
        assert_eq!(game.round().error_count, 1);
        assert_eq!(game.round().started_at, Some(t0));
    }

    #[test]
    fn test_surface_too_small_for_any_circle() {
        let mut game = small_game(None);
        assert_eq!(
            game.new_round(4.0, 4.0, Some(1)).err(),
            Some(ConfigError::SurfaceTooSmall {
                width: 4.0,
                height: 4.0
            })
        );
        assert!(game.needs_layout());
        assert!(game.registry().is_empty());
    }

    #[test]
    fn test_dismissing_finished_round_clears_board() {
        let mut game = small_game(None);
        game.new_round(480.0, 800.0, Some(8)).unwrap();
        let t0 = Instant::now();
        for label in 1..=3 {
            game.tap(center_of(&game, label), t0);
        }
        assert_eq!(game.round().phase, GamePhase::Finished);

        let out = game.tap(Vec2::new(1.0, 1.0), t0);
        assert!(out.reset);
        assert!(game.needs_layout());
        assert!(game.registry().is_empty());
        assert_eq!(game.round().phase, GamePhase::NotStarted);
        assert_eq!(game.round().expected_next, 1);
        assert_eq!(game.round().error_count, 0);

        // Taps before the next layout hit nothing
        game.tap(Vec2::new(100.0, 100.0), t0);
        assert_eq!(game.round().phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_short_board_finishes_early() {
        // A 30x30 surface fits only a few circles
        let mut game = Game::new(Settings::default(), MemoryStore::new()).unwrap();
        let count = game.new_round(30.0, 30.0, Some(4)).unwrap().numbered().count() as u32;
        assert!(count > 0 && count < 25);
        assert_eq!(game.round().last_label, count);

        let t0 = Instant::now();
        for label in 1..=count {
            game.tap(center_of(&game, label), t0 + Duration::from_secs(label as u64));
        }
        assert_eq!(game.round().phase, GamePhase::Finished);
        assert_eq!(game.round().elapsed, Some(Duration::from_secs(count as u64 - 1)));
    }
}
