//! Render snapshot
//!
//! Everything a renderer needs after a step, detached from the session.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{AimState, GameState, Projectile, Target};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub projectile: Projectile,
    /// For drawing the pull band
    pub aim: AimState,
    pub target: Target,
    pub hits: u32,
    pub shots: u32,
    pub time_left_secs: u32,
    pub game_over: bool,
}

impl Snapshot {
    pub fn capture<R: RandomSource>(state: &GameState<R>) -> Self {
        Self {
            projectile: state.projectile,
            aim: state.aim,
            target: state.target,
            hits: state.hits,
            shots: state.shots,
            time_left_secs: state.countdown.time_left_secs,
            game_over: state.game_over,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
