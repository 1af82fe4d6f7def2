//! SplitMix64 PRNG and hash-based seed derivation
//!
//! Page synthesis and the occurrence model both need a generator that is
//! deterministic in its seed and identical across platforms, so the same
//! query always reproduces the same pages. SplitMix64 is defined entirely
//! by 64-bit integer arithmetic, which gives that portability for free.
//!
//! # Reference
//!
//! Steele, Guy L., Doug Lea, and Christine H. Flood. "Fast splittable
//! pseudorandom number generators." ACM SIGPLAN Notices 49.10 (2014): 453-472.

use sha2::{Digest, Sha256};

/// Derive a PRNG seed from arbitrary input bytes
///
/// Takes the first 8 bytes of SHA-256 as a big-endian u64. The hash is used
/// only to spread seed inputs over the full 64-bit state space, never for
/// secrecy.
pub fn hash_seed(input: &[u8]) -> u64 {
    let digest = Sha256::digest(input);
    u64::from_be_bytes(digest[..8].try_into().expect("digest is 32 bytes"))
}

/// SplitMix64 PRNG state
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a new SplitMix64 PRNG seeded with the given value
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next u64 value
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Generate a uniform integer in [0, bound)
    ///
    /// Uses rejection sampling, so the distribution is exact and the draw
    /// sequence is identical on every platform.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "bound must be positive");
        // Reject the low tail that would bias the modulo
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u64();
            if value >= threshold {
                return value % bound;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix64_deterministic() {
        let mut rng1 = SplitMix64::new(42);
        let mut rng2 = SplitMix64::new(42);

        for _ in 0..1000 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_splitmix64_different_seeds() {
        let mut rng1 = SplitMix64::new(0);
        let mut rng2 = SplitMix64::new(1);

        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_next_below_in_range() {
        let mut rng = SplitMix64::new(123);

        for bound in [1, 2, 29, 3200, u64::MAX] {
            for _ in 0..100 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_next_below_bound_one() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..100 {
            assert_eq!(rng.next_below(1), 0);
        }
    }

    #[test]
    fn test_hash_seed_deterministic() {
        assert_eq!(hash_seed(b"hello world"), hash_seed(b"hello world"));
        assert_ne!(hash_seed(b"hello world"), hash_seed(b"hello worle"));
    }

    #[test]
    fn test_hash_seed_big_endian_prefix() {
        // SHA-256("") = e3b0c44298fc1c14...
        assert_eq!(hash_seed(b""), 0xe3b0c44298fc1c14);
    }
}
