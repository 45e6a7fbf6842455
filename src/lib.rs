//! Slingshot - a target practice mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aiming, launch, physics, target hits)
//! - `config`: Simulation and arena tuning, loaded from JSON

pub mod config;
pub mod sim;

pub use config::{ArenaConfig, ConfigError, GameConfig, SimulationConfig, TargetRegion};

use glam::Vec2;

/// Game configuration constants (defaults for `config`)
pub mod consts {
    /// Frame rate the per-step constants are tuned for
    pub const FRAME_RATE: f32 = 60.0;
    /// Fixed frame duration in seconds
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE;

    /// Arena dimensions (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Slingshot anchor sits 150px in from the left and 150px above the ground
    pub const ANCHOR_X: f32 = 150.0;
    pub const ANCHOR_Y: f32 = ARENA_HEIGHT - 150.0;
    /// Pointer must press within this distance of the anchor to start aiming
    pub const ACTIVATION_RADIUS: f32 = 30.0;

    pub const PROJECTILE_RADIUS: f32 = 15.0;
    pub const TARGET_RADIUS: f32 = 30.0;

    /// Per-step velocity added downward
    pub const GRAVITY: f32 = 0.5;
    /// Per-step velocity multiplier (both axes)
    pub const AIR_RESISTANCE: f32 = 0.99;
    /// Vertical multiplier on ground contact (sign flip + damping)
    pub const GROUND_BOUNCE: f32 = -0.6;
    /// Horizontal multiplier on ground contact
    pub const GROUND_FRICTION: f32 = 0.8;
    /// Horizontal multiplier on wall contact (sign flip + damping)
    pub const WALL_BOUNCE: f32 = -0.6;

    /// Maximum band stretch in pixels
    pub const MAX_PULL_DISTANCE: f32 = 120.0;
    /// Launch speed per pixel of pull
    pub const LAUNCH_POWER: f32 = 0.3;

    /// Round length in seconds
    pub const TIME_LIMIT_SECS: u32 = 30;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
