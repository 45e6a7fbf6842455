//! Collision detection and response for the projectile
//!
//! Everything is a circle against an axis-aligned line or another circle.
//! Functions here are pure; the stepper decides what to do with the results.

use glam::Vec2;

/// Result of a boundary check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Corrected position (equal to the input when not clamped)
    pub pos: Vec2,
    /// Velocity after response
    pub vel: Vec2,
    /// Speed along the surface normal before the response
    pub impact_speed: f32,
}

impl CollisionResult {
    pub fn miss(pos: Vec2, vel: Vec2) -> Self {
        Self {
            hit: false,
            pos,
            vel,
            impact_speed: 0.0,
        }
    }
}

/// Resolve contact with the ground line at `ground_y` (y grows downward).
///
/// On overlap the circle is pushed back to rest on the ground, vertical
/// velocity is scaled by `bounce` and horizontal velocity by `friction`.
pub fn ground_collision(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    ground_y: f32,
    bounce: f32,
    friction: f32,
) -> CollisionResult {
    if pos.y + radius > ground_y {
        return CollisionResult {
            hit: true,
            pos: Vec2::new(pos.x, ground_y - radius),
            vel: Vec2::new(vel.x * friction, vel.y * bounce),
            impact_speed: vel.y.abs(),
        };
    }
    CollisionResult::miss(pos, vel)
}

/// Resolve contact with the side walls.
///
/// Only velocity is reflected; position is left as is, so the circle can sit
/// past a wall for a step before the reflected velocity carries it back.
pub fn wall_collision(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    left: f32,
    right: f32,
    bounce: f32,
) -> CollisionResult {
    if pos.x + radius > right || pos.x - radius < left {
        return CollisionResult {
            hit: true,
            pos,
            vel: Vec2::new(vel.x * bounce, vel.y),
            impact_speed: vel.x.abs(),
        };
    }
    CollisionResult::miss(pos, vel)
}

/// Check if two circles touch (inclusive)
#[inline]
pub fn circles_touch(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) <= a_radius + b_radius
}

/// Check if a circle rests on the ground within `tolerance`
#[inline]
pub fn on_ground(pos: Vec2, radius: f32, ground_y: f32, tolerance: f32) -> bool {
    pos.y + radius >= ground_y - tolerance
}
