//! Slingshot entry point
//!
//! Headless native driver: plays a round with a scripted shooter at a fixed
//! frame rate and prints the final snapshot as JSON.
//!
//! Usage: `slingshot [config.json]`

use std::path::PathBuf;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use slingshot::GameConfig;
use slingshot::consts::FRAME_DT;
use slingshot::polar_to_cartesian;
use slingshot::sim::{GameEvent, GameState, InputEvent, Snapshot, apply_input, step};

/// Frames between shots
const FRAMES_PER_SHOT: u32 = 150;
/// Frames the scripted shooter spends dragging before release
const DRAG_FRAMES: u32 = 10;

fn main() {
    env_logger::init();
    log::info!("Slingshot (native) starting...");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref());
    match config.to_json() {
        Ok(json) => log::debug!("Effective config:\n{json}"),
        Err(err) => log::warn!("Failed to encode config: {err}"),
    }
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Seed {seed}");

    let mut state = GameState::with_seed(config, seed);
    // Separate stream so the shooter never perturbs target placement
    let mut shooter = Pcg32::seed_from_u64(seed ^ 0x5EED);

    let mut frame: u32 = 0;
    let mut pull_to = Vec2::ZERO;
    while !state.game_over {
        let phase = frame % FRAMES_PER_SHOT;
        if phase == 0 {
            // Pull back and down-left so the shot goes up and right
            let angle = shooter.random_range(0.2..1.2_f32) + std::f32::consts::FRAC_PI_2;
            let pull = shooter.random_range(60.0..140.0_f32);
            let anchor = state.anchor();
            pull_to = anchor + polar_to_cartesian(pull, angle);
            apply_input(&mut state, InputEvent::BeginAim(anchor));
        } else if phase <= DRAG_FRAMES {
            let t = phase as f32 / DRAG_FRAMES as f32;
            let pointer = state.anchor().lerp(pull_to, t);
            apply_input(&mut state, InputEvent::UpdateAim(pointer));
        } else if phase == DRAG_FRAMES + 1 {
            apply_input(&mut state, InputEvent::Release);
        }

        for event in step(&mut state) {
            match event {
                GameEvent::TargetHit { hits, .. } => println!("Hit! ({hits})"),
                GameEvent::GroundBounce { impact_speed } if impact_speed > 5.0 => {
                    log::debug!("Thud ({impact_speed:.1})")
                }
                _ => {}
            }
        }

        state.advance_clock(FRAME_DT);
        frame += 1;
    }

    println!("Game Over! Hits: {} from {} shots", state.hits, state.shots);
    match Snapshot::capture(&state).to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to encode snapshot: {err}"),
    }
}
