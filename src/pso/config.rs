//! PSO configuration and repair strategies.

use crate::error::SwarmError;

/// How a post-move position vector is projected back onto permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepairStrategy {
    /// Left-to-right scan; a slot whose value is already taken is
    /// resampled uniformly from `0..n` until an unused value is drawn.
    ///
    /// Each slot may draw at most `attempts_per_value * n` candidates
    /// before the run fails with
    /// [`SwarmError::RepairExhausted`].
    Resample {
        /// Draw budget per slot, as a multiple of the dimension.
        attempts_per_value: usize,
    },

    /// Keeps the first occurrence of every value and gives each later
    /// duplicate the lowest value not used anywhere in the vector.
    ///
    /// Deterministic and consumes no randomness.
    LowestUnused,
}

impl Default for RepairStrategy {
    fn default() -> Self {
        RepairStrategy::Resample {
            attempts_per_value: 64,
        }
    }
}

/// Configuration for a PSO run.
///
/// # Defaults
///
/// ```
/// use u_swarm::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.swarm_size, 30);
/// assert_eq!(config.max_iterations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_swarm::pso::{PsoConfig, RepairStrategy};
///
/// let config = PsoConfig::default()
///     .with_swarm_size(50)
///     .with_inertia(0.7)
///     .with_repair(RepairStrategy::LowestUnused)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles.
    pub swarm_size: usize,

    /// Iteration budget. A run executes at most this many iterations.
    pub max_iterations: usize,

    /// Inertia weight `w`: share of the previous velocity kept.
    pub inertia: f64,

    /// Cognitive coefficient `c1`: pull toward the personal best.
    pub cognitive: f64,

    /// Social coefficient `c2`: pull toward the global best.
    pub social: f64,

    /// Repair applied after every position update.
    pub repair: RepairStrategy,

    /// Whether to evaluate costs in parallel using rayon.
    ///
    /// Only honoured when the `parallel` feature is enabled. Results are
    /// identical to the sequential path for the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each iteration, so the run may overshoot
    /// by one iteration's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 30,
            max_iterations: 1000,
            inertia: 0.5,
            cognitive: 1.5,
            social: 1.5,
            repair: RepairStrategy::default(),
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl PsoConfig {
    /// Sets the number of particles.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia weight `w`.
    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive coefficient `c1`.
    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    /// Sets the social coefficient `c2`.
    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    /// Sets all three velocity coefficients at once.
    pub fn with_coefficients(self, w: f64, c1: f64, c2: f64) -> Self {
        self.with_inertia(w).with_cognitive(c1).with_social(c2)
    }

    /// Sets the repair strategy.
    pub fn with_repair(mut self, repair: RepairStrategy) -> Self {
        self.repair = repair;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SwarmError> {
        if self.swarm_size == 0 {
            return Err(SwarmError::InvalidConfig(
                "swarm_size must be at least 1".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SwarmError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SwarmError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if let RepairStrategy::Resample {
            attempts_per_value: 0,
        } = self.repair
        {
            return Err(SwarmError::InvalidConfig(
                "attempts_per_value must be at least 1".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(SwarmError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
