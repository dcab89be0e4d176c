//! Injected randomness for simulation logic

use rand::Rng;

/// Uniform random source consumed by the combat core.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded `ChaCha8Rng` gives
/// replayable outcomes under test.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform integer in `[0, bound)`; `bound` must be non-zero
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}
