//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, fixed per-step constants
//! - Randomness only through the session's `RandomSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod countdown;
pub mod launch;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod step;

pub use collision::{CollisionResult, circles_touch, ground_collision, wall_collision};
pub use countdown::Countdown;
pub use launch::{InputEvent, apply_input, begin_aim, release_aim, update_aim};
pub use rng::{RandomSource, ScriptedSource};
pub use snapshot::Snapshot;
pub use state::{AimState, GameEvent, GameState, Projectile, Target};
pub use step::step;
