//! Per-invocation jitter source.
//!
//! Every stage that perturbs a score takes `&mut dyn JitterSource` instead
//! of reaching for a process-global RNG, so concurrent pipeline runs never
//! share mutable generator state and tests can inject a fixed source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounded integer noise and uniform index picks for the scoring stages.
pub trait JitterSource {
    /// Uniform integer in `[lo, hi]` (both inclusive).
    fn jitter(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform index in `[0, len)`. `len` must be nonzero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production jitter source backed by any [`rand::Rng`].
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Seeded source for reproducible reports (`facelore analyze --seed N`).
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn jitter(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.gen_range(lo..=hi)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Fresh thread-local source for one pipeline invocation.
pub fn thread_jitter() -> RandomJitter<rand::rngs::ThreadRng> {
    RandomJitter::new(rand::thread_rng())
}

/// Deterministic stub: zero jitter, always picks index 0.
///
/// Exists so callers (and the test suite) can strip all randomness and
/// observe the deterministic core of every formula.
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn jitter(&mut self, _lo: i32, _hi: i32) -> i32 {
        0
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Test-only source pinned to one end of every jitter interval, for
/// exercising clamp bounds.
#[cfg(test)]
pub(crate) struct BoundJitter {
    pub take_high: bool,
}

#[cfg(test)]
impl JitterSource for BoundJitter {
    fn jitter(&mut self, lo: i32, hi: i32) -> i32 {
        if self.take_high {
            hi
        } else {
            lo
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        len - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_jitter_stays_in_bounds() {
        let mut src = RandomJitter::seeded(7);
        for _ in 0..1000 {
            let v = src.jitter(-5, 10);
            assert!((-5..=10).contains(&v), "jitter out of range: {v}");
        }
    }

    #[test]
    fn test_random_pick_stays_in_bounds() {
        let mut src = RandomJitter::seeded(7);
        for _ in 0..1000 {
            assert!(src.pick(7) < 7);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.jitter(-10, 25), b.jitter(-10, 25));
        }
    }

    #[test]
    fn test_zero_jitter_is_zero() {
        let mut z = ZeroJitter;
        assert_eq!(z.jitter(-5, 10), 0);
        assert_eq!(z.pick(49), 0);
    }
}
