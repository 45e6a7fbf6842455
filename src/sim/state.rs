//! Game state and core simulation types
//!
//! One `GameState` is one play session. Every operation takes it explicitly.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::countdown::Countdown;
use super::rng::{self, RandomSource};
use crate::config::{GameConfig, TargetRegion};

/// In-progress pull gesture
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AimState {
    pub is_aiming: bool,
    /// Direction from anchor to pointer (radians)
    pub angle: f32,
    /// Band stretch, clamped to the configured maximum
    pub pull_distance: f32,
    /// Last pointer sample, for drawing the band
    pub pointer: Vec2,
}

/// The slingshot shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub is_flying: bool,
}

impl Projectile {
    /// At rest on the anchor
    pub fn new(anchor: Vec2, radius: f32) -> Self {
        Self {
            pos: anchor,
            vel: Vec2::ZERO,
            radius,
            is_flying: false,
        }
    }

    /// Put back on the anchor for the next shot
    pub fn reset(&mut self, anchor: Vec2) {
        self.pos = anchor;
        self.vel = Vec2::ZERO;
        self.is_flying = false;
    }

    /// Start flying with the given velocity
    pub fn launch(&mut self, vel: Vec2) {
        self.vel = vel;
        self.is_flying = true;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
    /// Set only while a hit is being resolved
    pub hit: bool,
}

impl Target {
    /// Place a fresh target inside `region`
    pub fn spawn(region: &TargetRegion, radius: f32, rng: &mut impl RandomSource) -> Self {
        Self {
            pos: random_point(region, rng),
            radius,
            hit: false,
        }
    }

    /// Move to a new random spot and clear `hit`
    pub fn relocate(&mut self, region: &TargetRegion, rng: &mut impl RandomSource) {
        self.pos = random_point(region, rng);
        self.hit = false;
    }
}

fn random_point(region: &TargetRegion, rng: &mut impl RandomSource) -> Vec2 {
    // Region upper bounds are exclusive
    let x = rng.int_in_range(region.x_min, region.x_max - 1);
    let y = rng.int_in_range(region.y_min, region.y_max - 1);
    Vec2::new(x as f32, y as f32)
}

/// Something the stepper resolved, for presentation only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bounced off the ground; speed is the vertical speed before the bounce
    GroundBounce { impact_speed: f32 },
    /// Bounced off a side wall; speed is the horizontal speed before the bounce
    WallBounce { impact_speed: f32 },
    /// Target struck at `at`; `hits` is the new running total
    TargetHit { at: Vec2, hits: u32 },
    /// Settled on the ground at `at` and returned to the anchor (only with
    /// rest detection enabled)
    CameToRest { at: Vec2 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub config: GameConfig,
    pub rng: R,
    pub aim: AimState,
    pub projectile: Projectile,
    pub target: Target,
    /// Targets hit this round
    pub hits: u32,
    /// Shots launched this round
    pub shots: u32,
    /// Hard gate for stepping and aiming
    pub game_over: bool,
    pub countdown: Countdown,
}

impl GameState<Pcg32> {
    /// New session with a seeded RNG (the config seed wins if present)
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let seed = config.seed.unwrap_or(seed);
        Self::new(config, rng::seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let arena = &config.arena;
        let projectile = Projectile::new(arena.anchor, arena.projectile_radius);
        let target = Target::spawn(&arena.target_region, arena.target_radius, &mut rng);
        let countdown = Countdown::new(config.time_limit_secs);
        log::debug!("New session, target at {:?}", target.pos);

        Self {
            config,
            rng,
            aim: AimState::default(),
            projectile,
            target,
            hits: 0,
            shots: 0,
            game_over: false,
            countdown,
        }
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.config.arena.anchor
    }

    /// Move the target and clear its hit flag
    pub fn relocate_target(&mut self) {
        self.target.relocate(&self.config.arena.target_region, &mut self.rng);
    }

    /// Advance the round timer by `dt` seconds, flipping `game_over` on expiry
    pub fn advance_clock(&mut self, dt: f32) {
        if self.game_over {
            return;
        }
        if self.countdown.advance(dt) {
            self.set_game_over();
        }
    }

    /// End the round. Further steps and aim input are ignored.
    pub fn set_game_over(&mut self) {
        if !self.game_over {
            self.game_over = true;
            self.aim.is_aiming = false;
            log::info!("Game over: {} hits from {} shots", self.hits, self.shots);
        }
    }

    /// Start a new round with the same config
    pub fn restart(&mut self) {
        let anchor = self.anchor();
        self.projectile.reset(anchor);
        self.aim = AimState::default();
        self.relocate_target();
        self.hits = 0;
        self.shots = 0;
        self.game_over = false;
        self.countdown.reset();
    }
}
