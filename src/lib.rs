//! Number Circles - tap the numbered circles in ascending order
//!
//! Core modules:
//! - `sim`: Deterministic round generation (circle packing, numbering) and the tap state machine
//! - `session`: Owned game session for a presentation layer
//! - `persistence`: Best time storage
//! - `settings`: Tunable packing and round constants

pub mod best_time;
pub mod error;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use persistence::{BestTimeStore, PersistenceError};
pub use session::Game;
pub use settings::Settings;

/// Game configuration defaults
pub mod consts {
    /// Random candidate centers drawn per packing
    pub const MAX_ATTEMPTS: u32 = 2000;

    /// Largest radius a packed circle may have (surface units)
    pub const UPPER_RADIUS_BOUND: f32 = 50.0;
    /// Candidates at or below this radius are discarded
    pub const LOWER_RADIUS_BOUND: f32 = 3.0;

    /// How many of the largest circles get a label
    pub const NUMBERED_COUNT: u32 = 25;

    /// Key under which the best time is persisted
    pub const BEST_TIME_KEY: &str = "BEST_TIME";
}
