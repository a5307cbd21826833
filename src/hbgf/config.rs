//! HBGF crossover configuration.
//!
//! [`HbgfConfig`] holds the gating probability, the number of children per
//! mating, and the range the per-child cluster count is drawn from.

use crate::error::{ConsensusError, Result};

/// Range from which each child's target cluster count `k` is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClusterCountRange {
    /// Uniform over `[min(k_a, k_b), max(k_a, k_b)]`, where `k_a` and `k_b`
    /// are the parents' distinct-label counts.
    #[default]
    ParentBounds,

    /// Uniform over the fixed inclusive range `[min, max]`.
    Between { min: usize, max: usize },
}

impl ClusterCountRange {
    /// Resolves the inclusive draw range given the parents' cluster counts.
    pub fn bounds(&self, parent_min: usize, parent_max: usize) -> (usize, usize) {
        match *self {
            ClusterCountRange::ParentBounds => (parent_min, parent_max),
            ClusterCountRange::Between { min, max } => (min, max),
        }
    }

    fn validate(&self) -> Result<()> {
        if let ClusterCountRange::Between { min, max } = *self {
            if min == 0 {
                return Err(ConsensusError::InvalidConfiguration(
                    "cluster range minimum must be at least 1".into(),
                ));
            }
            if min > max {
                return Err(ConsensusError::InvalidConfiguration(format!(
                    "cluster range is empty: [{min}, {max}]"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for [`HbgfCrossover`](super::HbgfCrossover).
///
/// # Defaults
///
/// ```
/// use u_consensus::hbgf::{ClusterCountRange, HbgfConfig};
///
/// let config = HbgfConfig::default();
/// assert_eq!(config.crossover_probability, 1.0);
/// assert_eq!(config.children, 2);
/// assert_eq!(config.cluster_range, ClusterCountRange::ParentBounds);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_consensus::hbgf::{ClusterCountRange, HbgfConfig};
///
/// let config = HbgfConfig::default()
///     .with_crossover_probability(0.9)
///     .with_children(1)
///     .with_cluster_range(ClusterCountRange::Between { min: 2, max: 8 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HbgfConfig {
    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When the gating draw is not below this value, the parents are copied
    /// through unchanged.
    pub crossover_probability: f64,

    /// Number of children produced per mating.
    pub children: usize,

    /// Where each child's cluster count comes from.
    pub cluster_range: ClusterCountRange,

    /// Whether to run the per-child partitioning in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Random draws are made
    /// sequentially beforehand, so results do not depend on this flag.
    pub parallel: bool,
}

impl Default for HbgfConfig {
    fn default() -> Self {
        Self {
            crossover_probability: 1.0,
            children: 2,
            cluster_range: ClusterCountRange::default(),
            parallel: false,
        }
    }
}

impl HbgfConfig {
    /// Sets the crossover probability.
    ///
    /// Unlike rates elsewhere this is not clamped: an out-of-range value is
    /// reported by [`validate`](Self::validate).
    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    /// Sets the number of children per mating.
    pub fn with_children(mut self, n: usize) -> Self {
        self.children = n;
        self
    }

    /// Sets the cluster-count range.
    pub fn with_cluster_range(mut self, range: ClusterCountRange) -> Self {
        self.cluster_range = range;
        self
    }

    /// Enables or disables parallel partitioning.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`ConsensusError::InvalidConfiguration`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(ConsensusError::InvalidConfiguration(format!(
                "crossover_probability must be in [0, 1], got {}",
                self.crossover_probability
            )));
        }
        if self.children == 0 {
            return Err(ConsensusError::InvalidConfiguration(
                "children must be at least 1".into(),
            ));
        }
        self.cluster_range.validate()
    }
}
