//! Seed derivation and draw helpers.
//!
//! Every generator takes its randomness as a `&mut R where R: Rng + ?Sized`
//! parameter. Nothing in this crate reaches for an ambient thread RNG, so a
//! seeded `StdRng` (or a constant mock source in tests) reproduces output
//! exactly.
//!
//! A master seed is expanded into per-`(symbol, iteration)` sub-seeds using
//! BLAKE3, so a batch generated in parallel is identical regardless of thread
//! count or scheduling order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic seed hierarchy.
#[derive(Debug, Clone)]
pub struct SeedHierarchy {
    master_seed: u64,
}

impl SeedHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a `(symbol, iteration)` pair.
    ///
    /// Symbols are hashed as given; callers that want `aapl` and `AAPL` to
    /// share a seed normalise before calling.
    pub fn sub_seed(&self, symbol: &str, iteration: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(symbol.as_bytes());
        hasher.update(&iteration.to_le_bytes());
        let hash = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }

    /// Create a seeded `StdRng` for a `(symbol, iteration)` pair.
    pub fn rng_for(&self, symbol: &str, iteration: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(symbol, iteration))
    }
}

/// One uniform draw in `[0, 1)`.
#[inline]
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// Uniform draw in `[lo, hi)`, expressed as `lo + U * (hi - lo)`.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + unit(rng) * (hi - lo)
}

/// Uniform integer draw in `[lo, hi]` (inclusive on both ends).
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, lo: u64, hi: u64) -> u64 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as f64 + 1.0;
    let offset = (unit(rng) * span).floor() as u64;
    (lo + offset).min(hi)
}

/// `true` with probability `p`.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    unit(rng) < p
}

/// Pick one element uniformly. Panics on an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "pick from empty slice");
    let idx = uniform_int(rng, 0, items.len() as u64 - 1) as usize;
    &items[idx]
}

/// Round half away from zero to `dp` decimal places.
pub fn round_to(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}
