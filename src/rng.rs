//! Deterministic integer stream seeded by a slug-style string.
//!
//! All stochastic decisions in the pipeline route through [`Prng`] so that
//! `(seed, options)` uniquely determines the output, on any platform: the
//! seed string is folded to a `u64` with FNV-1a (not `std::hash`, whose
//! `DefaultHasher` is not guaranteed stable across Rust releases) and fed to
//! `rand`'s PCG-based `StdRng`, which is itself specified to be
//! platform-independent.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(seed: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in seed.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Generates a short alphanumeric slug to use as an auto-generated seed.
pub fn generate_seed() -> String {
    let mut rng = rand::rng();
    (&mut rng)
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}

/// Deterministic pseudo-random source for the generation pipeline.
#[derive(Debug, Clone)]
pub struct Prng {
    rng: StdRng,
}

impl Prng {
    /// Creates a PRNG from a seed string. The same seed always yields the
    /// same draw sequence.
    pub fn from_seed(seed: &str) -> Self {
        Self {
            rng: StdRng::seed_from_u64(fnv1a(seed)),
        }
    }

    /// Draws a uniform integer in `[min, max]` inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `max < min`, mirroring the contract's "fails if max < min".
    pub fn int_between(&mut self, min: i32, max: i32) -> i32 {
        assert!(max >= min, "int_between: max ({max}) < min ({min})");
        self.rng.random_range(min..=max)
    }

    /// Returns `true` with probability `1/n`.
    pub fn one_in(&mut self, n: i32) -> bool {
        self.int_between(1, n) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Prng::from_seed("s1");
        let mut b = Prng::from_seed("s1");
        let draws_a: Vec<i32> = (0..50).map(|_| a.int_between(0, 1000)).collect();
        let draws_b: Vec<i32> = (0..50).map(|_| b.int_between(0, 1000)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn different_seed_usually_differs() {
        let mut a = Prng::from_seed("s1");
        let mut b = Prng::from_seed("s2");
        let draws_a: Vec<i32> = (0..50).map(|_| a.int_between(0, 1_000_000)).collect();
        let draws_b: Vec<i32> = (0..50).map(|_| b.int_between(0, 1_000_000)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn int_between_respects_bounds() {
        let mut p = Prng::from_seed("bounds");
        for _ in 0..200 {
            let v = p.int_between(3, 7);
            assert!((3..=7).contains(&v));
        }
    }

    #[test]
    fn one_in_one_is_always_true() {
        let mut p = Prng::from_seed("always");
        for _ in 0..20 {
            assert!(p.one_in(1));
        }
    }

    #[test]
    fn generated_seed_is_nonempty_alphanumeric() {
        let seed = generate_seed();
        assert_eq!(seed.len(), 10);
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
