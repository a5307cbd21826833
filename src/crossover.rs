//! Crossover operator interface.
//!
//! Every recombination variant exposes the same shape so the evolutionary
//! loop can swap them freely: it asks how many parents to select, how many
//! children to expect, and hands over the parents together with the random
//! source.
//!
//! # Variants
//!
//! - [`HbgfCrossover`](crate::hbgf::HbgfCrossover): two-parent HBGF consensus
//! - [`MultiParentHbgfCrossover`](crate::hbgf::MultiParentHbgfCrossover): HBGF
//!   over an ensemble of parents
//! - [`NullCrossover`]: copies parents through

use crate::error::{ConsensusError, Result};
use crate::random::RandomSource;

/// A recombination operator over solutions of type `S`.
pub trait CrossoverOperator<S> {
    /// Number of parents [`execute`](Self::execute) expects.
    fn required_parents(&self) -> usize;

    /// Number of children [`execute`](Self::execute) returns.
    fn generated_children(&self) -> usize;

    /// Recombines `parents` into `generated_children()` new solutions.
    ///
    /// Fails with [`ConsensusError::InvalidArgument`] if `parents.len()` is not
    /// `required_parents()`.
    fn execute(&self, parents: &[S], rng: &mut dyn RandomSource) -> Result<Vec<S>>;
}

/// Checks the parent-count precondition shared by all variants.
pub(crate) fn check_parent_count<S>(parents: &[S], required: usize) -> Result<()> {
    if parents.len() != required {
        return Err(ConsensusError::InvalidArgument(format!(
            "expected {required} parents, got {}",
            parents.len()
        )));
    }
    Ok(())
}

/// Returns `count` copies of `parents`, cycling through them in order.
pub(crate) fn cycle_copies<S: Clone>(parents: &[S], count: usize) -> Vec<S> {
    parents.iter().cycle().take(count).cloned().collect()
}

/// Crossover that performs no recombination.
///
/// Children are copies of the parents, cycling in order. Consumes no
/// randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullCrossover {
    parents: usize,
    children: usize,
}

impl NullCrossover {
    /// Fails with [`ConsensusError::InvalidConfiguration`] if either count is
    /// zero.
    pub fn new(parents: usize, children: usize) -> Result<Self> {
        if parents == 0 || children == 0 {
            return Err(ConsensusError::InvalidConfiguration(
                "parent and child counts must be at least 1".into(),
            ));
        }
        Ok(Self { parents, children })
    }
}

impl Default for NullCrossover {
    fn default() -> Self {
        Self {
            parents: 2,
            children: 2,
        }
    }
}

impl<S: Clone> CrossoverOperator<S> for NullCrossover {
    fn required_parents(&self) -> usize {
        self.parents
    }

    fn generated_children(&self) -> usize {
        self.children
    }

    fn execute(&self, parents: &[S], _rng: &mut dyn RandomSource) -> Result<Vec<S>> {
        check_parent_count(parents, self.parents)?;
        Ok(cycle_copies(parents, self.children))
    }
}
