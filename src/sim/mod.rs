//! Deterministic round logic
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed in explicitly (an unseeded round draws and records its seed)
//! - Stable iteration order (creation order of circles)
//! - Time comes in as an argument, never read from the system clock
//! - No rendering or platform dependencies

pub mod geometry;
pub mod numbering;
pub mod packer;
pub mod registry;
pub mod round;
pub mod state;
pub mod tap;

pub use geometry::{Circle, edge_distance, sd_circle};
pub use numbering::number_circles;
pub use packer::{Packing, check_surface, pack};
pub use registry::CircleRegistry;
pub use round::generate_round;
pub use state::{DisplayStatus, FinishSummary, GamePhase, RoundState};
pub use tap::{Tap, TapOutcome, handle_tap};
