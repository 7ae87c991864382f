//! Short code candidate generation.
//!
//! [`generate_code`] is a pure function over any [`Rng`], so the allocator's
//! collision loop can be tested against a mocked store without touching the
//! randomness source. [`CodeGenerator`] is the seam the allocator draws
//! candidates through.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::domain::entities::{ALPHABET, ShortCode};

/// Draws `length` independent, uniformly distributed symbols from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate_code(&mut rng, 5);
/// assert_eq!(code.len(), 5);
/// ```
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> ShortCode {
    let code = (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();

    ShortCode::new_unchecked(code)
}

/// Source of candidate codes for the allocator.
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh candidate of `length` symbols.
    fn generate(&self, length: usize) -> ShortCode;
}

/// Generator backed by the thread-local RNG. Holds no shared state.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> ShortCode {
        generate_code(&mut rand::rng(), length)
    }
}

/// Deterministic generator for reproducible candidate sequences.
///
/// Two generators built from the same seed yield the same sequence.
#[derive(Debug)]
pub struct SeededCodeGenerator {
    rng: Mutex<StdRng>,
}

impl SeededCodeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CodeGenerator for SeededCodeGenerator {
    fn generate(&self, length: usize) -> ShortCode {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_code(&mut *rng, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::short_code::is_alphabet_symbol;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [1, 5, 12, 32] {
            assert_eq!(generate_code(&mut rng, length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        let generator = RandomCodeGenerator;
        for _ in 0..500 {
            let code = generator.generate(5);
            assert!(code.as_str().chars().all(is_alphabet_symbol), "{code}");
        }
    }

    #[test]
    fn test_generate_code_is_valid_short_code() {
        let code = RandomCodeGenerator.generate(8);
        assert_eq!(ShortCode::new(code.as_str()), Ok(code));
    }

    #[test]
    fn test_generate_code_covers_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..2_000 {
            seen.extend(generate_code(&mut rng, 5).as_str().chars());
        }

        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(RandomCodeGenerator.generate(8));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_seeded_generators_repeat_sequence() {
        let a = SeededCodeGenerator::new(99);
        let b = SeededCodeGenerator::new(99);

        let first: Vec<_> = (0..10).map(|_| a.generate(5)).collect();
        let second: Vec<_> = (0..10).map(|_| b.generate(5)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_generator_advances() {
        let generator = SeededCodeGenerator::new(3);
        let codes: HashSet<_> = (0..10).map(|_| generator.generate(5)).collect();
        assert_eq!(codes.len(), 10);
    }
}
