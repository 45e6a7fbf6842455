//! Launch controller
//!
//! Turns pointer samples into aim state and, on release, a launch velocity.
//! Calls that don't apply (press away from the anchor, drag without a press,
//! input after game over) are ignored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::GameState;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Pointer input, in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer pressed
    BeginAim(Vec2),
    /// Pointer moved
    UpdateAim(Vec2),
    /// Pointer released
    Release,
}

/// Dispatch one pointer event
pub fn apply_input<R: RandomSource>(state: &mut GameState<R>, event: InputEvent) {
    match event {
        InputEvent::BeginAim(pointer) => begin_aim(state, pointer),
        InputEvent::UpdateAim(pointer) => update_aim(state, pointer),
        InputEvent::Release => release_aim(state),
    }
}

/// Start aiming if the press lands on the slingshot. Resets the projectile.
pub fn begin_aim<R: RandomSource>(state: &mut GameState<R>, pointer: Vec2) {
    let anchor = state.anchor();
    if pointer.distance(anchor) > state.config.arena.activation_radius {
        return;
    }

    state.aim.is_aiming = true;
    state.aim.pointer = pointer;
    state.projectile.reset(anchor);
}

/// Track the pull while aiming
pub fn update_aim<R: RandomSource>(state: &mut GameState<R>, pointer: Vec2) {
    if !state.aim.is_aiming || state.game_over {
        return;
    }

    let (distance, angle) = cartesian_to_polar(pointer - state.anchor());
    state.aim.angle = angle;
    state.aim.pull_distance = distance.min(state.config.simulation.max_pull_distance);
    state.aim.pointer = pointer;
}

/// Let go: fire opposite the pull direction
pub fn release_aim<R: RandomSource>(state: &mut GameState<R>) {
    if !state.aim.is_aiming || state.game_over {
        return;
    }

    let sim = &state.config.simulation;
    let speed = sim.launch_power * state.aim.pull_distance;
    let vel = polar_to_cartesian(-speed, state.aim.angle);

    state.aim.is_aiming = false;
    state.projectile.launch(vel);
    state.shots += 1;
    log::debug!(
        "Shot {} launched: pull {:.1} at {:.2} rad, vel ({:.2}, {:.2})",
        state.shots,
        state.aim.pull_distance,
        state.aim.angle,
        vel.x,
        vel.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const ANCHOR: Vec2 = Vec2::new(150.0, 450.0);

    fn session() -> GameState {
        GameState::with_seed(GameConfig::default(), 12345)
    }

    #[test]
    fn test_press_far_from_anchor_is_ignored() {
        let mut state = session();
        begin_aim(&mut state, Vec2::new(300.0, 300.0));
        assert!(!state.aim.is_aiming);

        // Drag and release without an accepted press do nothing
        update_aim(&mut state, Vec2::new(50.0, 450.0));
        release_aim(&mut state);
        assert!(!state.projectile.is_flying);
        assert_eq!(state.shots, 0);
    }

    #[test]
    fn test_press_near_anchor_resets_projectile() {
        let mut state = session();
        state.projectile.pos = Vec2::new(600.0, 585.0);
        state.projectile.launch(Vec2::new(2.0, -1.0));

        begin_aim(&mut state, Vec2::new(170.0, 460.0));
        assert!(state.aim.is_aiming);
        assert!(!state.projectile.is_flying);
        assert_eq!(state.projectile.pos, state.anchor());
        assert_eq!(state.projectile.vel, Vec2::ZERO);
    }

    #[test]
    fn test_release_scenario_pull_left_fires_right() {
        let mut state = session();
        begin_aim(&mut state, ANCHOR);
        update_aim(&mut state, Vec2::new(30.0, 450.0));
        assert!((state.aim.angle - PI).abs() < 1e-6);
        assert!((state.aim.pull_distance - 120.0).abs() < 1e-4);

        release_aim(&mut state);
        assert!(!state.aim.is_aiming);
        assert!(state.projectile.is_flying);
        assert!((state.projectile.vel.x - 36.0).abs() < 1e-3);
        assert!(state.projectile.vel.y.abs() < 1e-3);
        assert_eq!(state.shots, 1);
    }

    #[test]
    fn test_pull_down_fires_up() {
        let mut state = session();
        apply_input(&mut state, InputEvent::BeginAim(ANCHOR));
        apply_input(&mut state, InputEvent::UpdateAim(Vec2::new(150.0, 500.0)));
        apply_input(&mut state, InputEvent::Release);
        assert!((state.projectile.vel.y - (-15.0)).abs() < 1e-3);
        assert!(state.projectile.vel.x.abs() < 1e-3);
    }

    #[test]
    fn test_release_without_drag_launches_at_zero_speed() {
        let mut state = session();
        begin_aim(&mut state, ANCHOR);
        release_aim(&mut state);
        assert!(state.projectile.is_flying);
        assert_eq!(state.projectile.vel, Vec2::ZERO);
    }

    #[test]
    fn test_game_over_blocks_aim_and_release() {
        let mut state = session();
        begin_aim(&mut state, ANCHOR);
        update_aim(&mut state, Vec2::new(100.0, 450.0));
        state.game_over = true;

        update_aim(&mut state, Vec2::new(30.0, 450.0));
        assert!((state.aim.pull_distance - 50.0).abs() < 1e-4);
        release_aim(&mut state);
        assert!(!state.projectile.is_flying);
        assert!(state.aim.is_aiming);
    }

    #[test]
    fn test_aiming_and_flying_are_exclusive() {
        let mut state = session();
        begin_aim(&mut state, ANCHOR);
        update_aim(&mut state, Vec2::new(60.0, 500.0));
        release_aim(&mut state);
        assert!(state.projectile.is_flying && !state.aim.is_aiming);

        begin_aim(&mut state, ANCHOR);
        assert!(state.aim.is_aiming && !state.projectile.is_flying);
    }

    proptest! {
        #[test]
        fn prop_pull_never_exceeds_max(x in -5000.0f32..5000.0, y in -5000.0f32..5000.0) {
            let mut state = session();
            begin_aim(&mut state, ANCHOR);
            update_aim(&mut state, Vec2::new(x, y));
            prop_assert!(state.aim.pull_distance >= 0.0);
            prop_assert!(state.aim.pull_distance <= state.config.simulation.max_pull_distance);
        }

        #[test]
        fn prop_launch_opposes_pull(x in -500.0f32..500.0, y in -500.0f32..500.0) {
            let mut state = session();
            let pointer = state.anchor() + Vec2::new(x, y);
            begin_aim(&mut state, ANCHOR);
            update_aim(&mut state, pointer);
            release_aim(&mut state);
            let pull = pointer - state.anchor();
            prop_assert!(state.projectile.vel.dot(pull) <= 1e-3);
        }
    }
}
