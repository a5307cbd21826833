//! Injectable random source.
//!
//! Operators never reach for a global generator. Every call that needs
//! randomness receives a `&mut dyn RandomSource`, which keeps the draw order
//! observable and lets tests replay an exact sequence with [`ScriptedRandom`].
//!
//! Any [`rand::RngCore`] is a `RandomSource`, so production code simply passes
//! a seeded generator from [`create_rng`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A source of uniform draws consumed by the crossover operators.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Uniform integer in `[lower, upper]` (both inclusive).
    fn next_int(&mut self, lower: usize, upper: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_double(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_int(&mut self, lower: usize, upper: usize) -> usize {
        if lower >= upper {
            return lower;
        }
        self.random_range(lower..=upper)
    }
}

/// Creates a seeded, reproducible generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each call to either method consumes exactly one value. Integer draws
/// return the scripted value truncated to `usize`, ignoring the requested
/// range, so a script can force any cluster count.
///
/// ```
/// use u_consensus::random::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new(vec![0.25, 3.0]);
/// assert_eq!(rng.next_double(), 0.25);
/// assert_eq!(rng.next_int(0, 10), 3);
/// assert_eq!(rng.next_double(), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source replaying `values`.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted sequence must not be empty");
        Self { values, cursor: 0 }
    }

    /// Number of values consumed so far (not wrapped).
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_value(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

impl RandomSource for ScriptedRandom {
    fn next_double(&mut self) -> f64 {
        self.next_value()
    }

    /// Returns the next scripted value truncated to an integer, ignoring the
    /// requested range.
    ///
    /// # Panics
    /// Panics if that value is negative or not finite.
    fn next_int(&mut self, _lower: usize, _upper: usize) -> usize {
        let v = self.next_value();
        assert!(
            v.is_finite() && v >= 0.0,
            "scripted integer draw must be finite and non-negative, got {v}"
        );
        v as usize
    }
}
