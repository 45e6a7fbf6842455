//! Simulation and arena configuration
//!
//! Loaded from a JSON file by the driver. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Physics tuning, applied once per step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Added to vertical velocity every step (positive is downward)
    pub gravity: f32,
    /// Velocity multiplier per step (0-1)
    pub air_resistance: f32,
    /// Vertical velocity multiplier on ground contact (negative, magnitude < 1)
    pub ground_bounce: f32,
    /// Horizontal velocity multiplier on ground contact (0-1)
    pub ground_friction: f32,
    /// Horizontal velocity multiplier on wall contact (negative, magnitude < 1)
    pub wall_bounce: f32,
    pub max_pull_distance: f32,
    /// Launch speed per pixel of pull
    pub launch_power: f32,
    /// Grounded speed below which the projectile settles. `None` keeps it
    /// bouncing forever.
    pub rest_speed: Option<f32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            air_resistance: AIR_RESISTANCE,
            ground_bounce: GROUND_BOUNCE,
            ground_friction: GROUND_FRICTION,
            wall_bounce: WALL_BOUNCE,
            max_pull_distance: MAX_PULL_DISTANCE,
            launch_power: LAUNCH_POWER,
            rest_speed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::NotFinite { field: "gravity" });
        }
        check_range("air_resistance", self.air_resistance, 0.0, 1.0)?;
        check_bounce("ground_bounce", self.ground_bounce)?;
        check_range("ground_friction", self.ground_friction, 0.0, 1.0)?;
        check_bounce("wall_bounce", self.wall_bounce)?;
        check_positive("max_pull_distance", self.max_pull_distance)?;
        check_positive("launch_power", self.launch_power)?;
        if let Some(speed) = self.rest_speed {
            check_positive("rest_speed", speed)?;
        }
        Ok(())
    }
}

/// Integer pixel region the target center is drawn from.
///
/// Upper bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRegion {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl TargetRegion {
    /// Right half of the arena, kept clear of the right wall and the ground
    pub fn for_arena(width: f32, height: f32) -> Self {
        Self {
            x_min: (width / 2.0) as i32,
            x_max: (width - 50.0) as i32,
            y_min: 100,
            y_max: (height - 150.0) as i32,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x_min as f32
            && point.x < self.x_max as f32
            && point.y >= self.y_min as f32
            && point.y < self.y_max as f32
    }

    pub fn is_empty(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }
}

/// Arena geometry and entity sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    /// Also the ground line
    pub height: f32,
    /// Slingshot reference point
    pub anchor: Vec2,
    /// Press distance from the anchor that starts an aim
    pub activation_radius: f32,
    pub projectile_radius: f32,
    pub target_radius: f32,
    pub target_region: TargetRegion,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            anchor: Vec2::new(ANCHOR_X, ANCHOR_Y),
            activation_radius: ACTIVATION_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            target_radius: TARGET_RADIUS,
            target_region: TargetRegion::for_arena(ARENA_WIDTH, ARENA_HEIGHT),
        }
    }
}

impl ArenaConfig {
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn left_bound(&self) -> f32 {
        0.0
    }

    #[inline]
    pub fn right_bound(&self) -> f32 {
        self.width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("activation_radius", self.activation_radius)?;
        check_positive("projectile_radius", self.projectile_radius)?;
        check_positive("target_radius", self.target_radius)?;

        let a = self.anchor;
        if !(a.is_finite() && a.x >= 0.0 && a.x <= self.width && a.y >= 0.0 && a.y <= self.height) {
            return Err(ConfigError::AnchorOutsideArena { x: a.x, y: a.y });
        }

        let region = self.target_region;
        if region.is_empty() {
            return Err(ConfigError::EmptyTargetRegion(region));
        }
        if region.x_min < 0
            || region.y_min < 0
            || region.x_max as f32 > self.width
            || region.y_max as f32 > self.height
        {
            return Err(ConfigError::TargetRegionOutsideArena(region));
        }
        Ok(())
    }
}

/// Complete configuration for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub simulation: SimulationConfig,
    pub arena: ArenaConfig,
    pub time_limit_secs: u32,
    /// Fixed RNG seed for reproducible target placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            arena: ArenaConfig::default(),
            time_limit_secs: TIME_LIMIT_SECS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.arena.validate()?;
        if self.time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|err| {
                log::warn!("Using default config: {err}");
                Self::default()
            }),
            None => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{field} must be negative with magnitude < 1, got {value}")]
    InvalidBounce { field: &'static str, value: f32 },
    #[error("anchor ({x}, {y}) lies outside the arena")]
    AnchorOutsideArena { x: f32, y: f32 },
    #[error("target region {0:?} is empty")]
    EmptyTargetRegion(TargetRegion),
    #[error("target region {0:?} extends outside the arena")]
    TargetRegionOutsideArena(TargetRegion),
    #[error("time_limit_secs must be > 0")]
    ZeroTimeLimit,
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_bounce(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value >= 0.0 || value <= -1.0 {
        return Err(ConfigError::InvalidBounce { field, value });
    }
    Ok(())
}
