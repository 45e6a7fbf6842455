//! Round countdown
//!
//! Only detects expiry. Telling the player the round is over is up to the
//! driver.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    pub time_limit_secs: u32,
    pub time_left_secs: u32,
    /// Real time not yet converted into whole seconds
    accumulator: f32,
}

impl Countdown {
    pub fn new(time_limit_secs: u32) -> Self {
        Self {
            time_limit_secs,
            time_left_secs: time_limit_secs,
            accumulator: 0.0,
        }
    }

    pub fn expired(&self) -> bool {
        self.time_left_secs == 0
    }

    /// Advance by `dt` seconds. Returns true once the countdown has run out,
    /// including a zero limit.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.expired() {
            return true;
        }
        self.accumulator += dt.max(0.0);
        while self.accumulator >= 1.0 && self.time_left_secs > 0 {
            self.accumulator -= 1.0;
            self.time_left_secs -= 1;
        }
        self.expired()
    }

    pub fn reset(&mut self) {
        self.time_left_secs = self.time_limit_secs;
        self.accumulator = 0.0;
    }
}
