//! Injectable randomness for the generators.
//!
//! Generators take `&mut impl RandomSource` instead of reaching for a global
//! RNG. Production code hands in [`SystemRandom`]; tests hand in a seeded
//! [`Xorshift32`] and get the same palette on every run.

use rand::RngCore;
use rand::rngs::ThreadRng;

/// A source of uniformly distributed 32-bit values.
pub trait RandomSource {
    /// Next uniformly distributed `u32`.
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[lo, hi]` (both inclusive).
    ///
    /// Returns `lo` when `hi <= lo`.
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        // Multiply-shift maps 32 random bits onto [0, span) without modulo
        // bias worth caring about at these spans.
        let offset = (u64::from(self.next_u32()) * span) >> 32;
        (i64::from(lo) + offset as i64) as i32
    }

    /// Uniform 8-bit channel value.
    fn channel(&mut self) -> u8 {
        self.range(0, 255) as u8
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG for reproducible palettes in tests and demos.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed 0 is bumped to 1: an all-zero state would stay zero forever.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }
}

impl RandomSource for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

// ---------------------------------------------------------------------------
// SystemRandom
// ---------------------------------------------------------------------------

/// The thread-local OS-seeded generator from `rand`.
#[derive(Debug, Clone, Default)]
pub struct SystemRandom {
    rng: ThreadRng,
}

impl SystemRandom {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for SystemRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_is_deterministic() {
        let mut a = Xorshift32::new(42);
        let mut b = Xorshift32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn xorshift_zero_seed_still_moves() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn range_stays_inclusive() {
        let mut rng = Xorshift32::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..10_000 {
            let v = rng.range(10, 14);
            assert!((10..=14).contains(&v), "out of range: {v}");
            seen_lo |= v == 10;
            seen_hi |= v == 14;
        }
        assert!(seen_lo && seen_hi, "endpoints never drawn");
    }

    #[test]
    fn range_degenerate_returns_lo() {
        let mut rng = Xorshift32::new(3);
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(9, 2), 9);
    }

    #[test]
    fn range_full_hue_circle() {
        let mut rng = Xorshift32::new(99);
        for _ in 0..1_000 {
            assert!((0..=359).contains(&rng.range(0, 359)));
        }
    }

    #[test]
    fn system_random_respects_range() {
        let mut rng = SystemRandom::new();
        for _ in 0..1_000 {
            assert!((40..=80).contains(&rng.range(40, 80)));
        }
    }

    #[test]
    fn borrowed_source_advances_owner() {
        fn draw(mut source: impl RandomSource) -> u32 {
            source.next_u32()
        }

        let mut owner = Xorshift32::new(11);
        let mut copy = owner.clone();
        assert_eq!(draw(&mut owner), copy.next_u32());
        assert_eq!(owner.next_u32(), copy.next_u32());
    }
}
