//! Time utilities for the simulation tick

use std::time::{Duration, Instant};

/// Default tick rate for the headless arena
pub const SIMULATION_TPS: u32 = 60;

/// Wall-clock length of one tick at the given rate
pub fn tick_duration(tps: u32) -> Duration {
    Duration::from_micros(1_000_000 / tps.max(1) as u64)
}

/// Monotonic millisecond clock measured from its creation.
///
/// The simulation only ever sees the `u64` it returns, so tests can feed
/// hand-picked timestamps instead.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
