//! Physics stepper
//!
//! Advances the projectile by one frame: gravity, air drag, integration,
//! ground and wall response, target contact, then optional rest detection.

use super::collision::{circles_touch, ground_collision, on_ground, wall_collision};
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};

/// How close to the ground counts as grounded for rest detection
const REST_GROUND_TOLERANCE: f32 = 0.5;

/// Advance the session by one step. Returns what was resolved this step.
///
/// Does nothing unless the projectile is flying and the round is live.
pub fn step<R: RandomSource>(state: &mut GameState<R>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.projectile.is_flying || state.game_over {
        return events;
    }

    let sim = &state.config.simulation;
    let arena = &state.config.arena;
    let projectile = &mut state.projectile;

    projectile.vel.y += sim.gravity;
    projectile.vel *= sim.air_resistance;
    projectile.pos += projectile.vel;

    let ground = ground_collision(
        projectile.pos,
        projectile.vel,
        projectile.radius,
        arena.ground_y(),
        sim.ground_bounce,
        sim.ground_friction,
    );
    if ground.hit {
        projectile.pos = ground.pos;
        projectile.vel = ground.vel;
        events.push(GameEvent::GroundBounce {
            impact_speed: ground.impact_speed,
        });
    }

    let wall = wall_collision(
        projectile.pos,
        projectile.vel,
        projectile.radius,
        arena.left_bound(),
        arena.right_bound(),
        sim.wall_bounce,
    );
    if wall.hit {
        projectile.vel = wall.vel;
        events.push(GameEvent::WallBounce {
            impact_speed: wall.impact_speed,
        });
    }

    let touching = circles_touch(
        state.projectile.pos,
        state.projectile.radius,
        state.target.pos,
        state.target.radius,
    );
    if touching && !state.target.hit {
        let at = state.target.pos;
        state.target.hit = true;
        state.hits += 1;
        state.relocate_target();
        log::info!(
            "Target hit at ({:.0}, {:.0}), total {}; moved to ({:.0}, {:.0})",
            at.x,
            at.y,
            state.hits,
            state.target.pos.x,
            state.target.pos.y
        );
        events.push(GameEvent::TargetHit {
            at,
            hits: state.hits,
        });
    }

    // A settled shot goes back on the anchor, ready for the next pull
    if let Some(rest_speed) = state.config.simulation.rest_speed {
        let p = state.projectile;
        let grounded = on_ground(
            p.pos,
            p.radius,
            state.config.arena.ground_y(),
            REST_GROUND_TOLERANCE,
        );
        if grounded && p.speed() < rest_speed {
            let anchor = state.anchor();
            state.projectile.reset(anchor);
            events.push(GameEvent::CameToRest { at: p.pos });
            log::debug!("Projectile settled at ({:.1}, {:.1})", p.pos.x, p.pos.y);
        }
    }

    events
}
