//! Cosmetic feedback: hit-shake and health bar
//!
//! Nothing in here is read by collision or damage logic.

use serde::{Deserialize, Serialize};

use crate::util::rng::RandomSource;

/// Number of jitter steps in one shake sequence
pub const SHAKE_STEPS: u32 = 6;
/// Minimum time between two shake steps (ms)
pub const SHAKE_INTERVAL_MS: u64 = 30;
/// Offsets are drawn from `[-SHAKE_AMPLITUDE, SHAKE_AMPLITUDE)`
pub const SHAKE_AMPLITUDE: f32 = 2.0;

/// Tick-driven hit-shake state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShakeState {
    frames_remaining: u32,
    last_step_ms: Option<u64>,
    offset_x: f32,
    offset_y: f32,
}

impl ShakeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a shake sequence. A sequence already in flight is restarted:
    /// the step budget and throttle reset, the current offsets stay until
    /// the next step overwrites them.
    pub fn start(&mut self) {
        self.frames_remaining = SHAKE_STEPS;
        self.last_step_ms = None;
    }

    /// Advance by one simulation tick.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, now_ms: u64, rng: &mut R) {
        if self.frames_remaining == 0 {
            return;
        }

        let due = match self.last_step_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > SHAKE_INTERVAL_MS,
        };
        if !due {
            return;
        }

        self.offset_x = (rng.next_unit() - 0.5) * 2.0 * SHAKE_AMPLITUDE;
        self.offset_y = (rng.next_unit() - 0.5) * 2.0 * SHAKE_AMPLITUDE;
        self.frames_remaining -= 1;
        self.last_step_ms = Some(now_ms);

        if self.frames_remaining == 0 {
            self.offset_x = 0.0;
            self.offset_y = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.frames_remaining > 0
    }

    pub fn frames_remaining(&self) -> u32 {
        self.frames_remaining
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }
}

/// Colour band of the health bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// More than half health
    Healthy,
    /// More than 30% health
    Wounded,
    Critical,
}

impl HealthBand {
    pub fn for_ratio(ratio: f32) -> Self {
        if ratio > 0.5 {
            Self::Healthy
        } else if ratio > 0.3 {
            Self::Wounded
        } else {
            Self::Critical
        }
    }
}

/// Health bar fill ratio, clamped to `[0, 1]`
pub fn health_ratio(health: i32, max_health: i32) -> f32 {
    if max_health <= 0 {
        return 0.0;
    }
    (health as f32 / max_health as f32).clamp(0.0, 1.0)
}
