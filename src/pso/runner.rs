//! PSO execution loop.
//!
//! # Algorithm
//!
//! 1. Initialize the swarm (random permutations, velocities in `[-1, 1]`)
//! 2. At each iteration:
//!    a. Evaluate every particle, update personal and global bests
//!    b. Stop if the global best cost is 0
//!    c. Otherwise update every velocity, then every position (with repair)
//! 3. Terminate on convergence, exhausted budget, cancellation, or time limit

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::config::PsoConfig;
use super::swarm::SwarmState;
use super::types::PermutationProblem;
use crate::error::SwarmError;
use crate::random::create_rng;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The global best reached cost 0.
    Converged,
    /// The iteration budget ran out without reaching cost 0.
    Exhausted,
    /// The cancellation flag was raised.
    Cancelled,
    /// The wall-clock time limit elapsed.
    TimeLimit,
}

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// The best position found (a permutation).
    pub best: Vec<usize>,

    /// Cost of the best position.
    pub best_cost: usize,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Iteration at which the global best reached cost 0, if it did.
    pub converged_at: Option<usize>,

    /// Global best cost after initialization and after the best-update
    /// pass of every executed iteration. Non-increasing.
    pub cost_history: Vec<usize>,
}

impl PsoResult {
    /// Whether the run found a zero-cost position.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Executes the PSO loop.
///
/// # Usage
///
/// ```
/// use u_swarm::pso::{PermutationProblem, PsoConfig, PsoRunner};
///
/// struct SortProblem;
///
/// impl PermutationProblem for SortProblem {
///     fn dimension(&self) -> usize { 5 }
///     fn cost(&self, p: &[usize]) -> usize {
///         p.iter().enumerate().filter(|&(i, &v)| i != v).count()
///     }
/// }
///
/// let config = PsoConfig::default().with_seed(42).with_max_iterations(200);
/// let result = PsoRunner::run(&SortProblem, &config).unwrap();
/// assert!(result.iterations <= 200);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO optimization.
    pub fn run<P: PermutationProblem>(
        problem: &P,
        config: &PsoConfig,
    ) -> Result<PsoResult, SwarmError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs PSO with an optional cancellation token.
    ///
    /// The flag is checked once at the start of every iteration. A
    /// cancelled run returns the best position found so far and counts
    /// only the iterations that fully executed (possibly zero).
    pub fn run_with_cancel<P: PermutationProblem>(
        problem: &P,
        config: &PsoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<PsoResult, SwarmError> {
        config.validate()?;

        let n = problem.dimension();
        if n == 0 {
            return Err(SwarmError::InvalidArgument(
                "problem dimension must be positive".into(),
            ));
        }

        let seed = match config.seed {
            Some(seed) => seed,
            None => rand::random(),
        };
        let mut rng = create_rng(seed);
        let start = Instant::now();

        log::debug!(
            "pso start: dimension={n} swarm_size={} max_iterations={} seed={seed}",
            config.swarm_size,
            config.max_iterations
        );

        let mut swarm = SwarmState::init(problem, config.swarm_size, &mut rng);

        let mut cost_history = Vec::with_capacity(config.max_iterations.min(1024) + 1);
        cost_history.push(swarm.global_best().cost);

        let mut iterations = 0usize;
        let mut termination = Termination::Exhausted;
        let mut converged_at = None;

        while iterations < config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    termination = Termination::TimeLimit;
                    break;
                }
            }

            iterations += 1;

            if swarm.observe(problem, config.parallel) {
                log::trace!(
                    "iteration {iterations}: global best improved to {}",
                    swarm.global_best().cost
                );
            }

            let best_cost = swarm.global_best().cost;
            cost_history.push(best_cost);
            problem.on_iteration(iterations, best_cost);

            if best_cost == 0 {
                termination = Termination::Converged;
                converged_at = Some(iterations);
                break;
            }

            swarm.advance(config, &mut rng)?;
        }

        let best = swarm.into_global_best();

        log::debug!(
            "pso stop: {termination:?} after {iterations} iterations, best cost {}",
            best.cost
        );

        Ok(PsoResult {
            best: best.position,
            best_cost: best.cost,
            iterations,
            termination,
            converged_at,
            cost_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pso::RepairStrategy;
    use std::sync::Mutex;

    /// Cost = number of out-of-place elements. Optimum is the identity.
    struct SortProblem {
        n: usize,
    }

    impl PermutationProblem for SortProblem {
        fn dimension(&self) -> usize {
            self.n
        }

        fn cost(&self, position: &[usize]) -> usize {
            position.iter().enumerate().filter(|&(i, &v)| i != v).count()
        }
    }

    /// A problem with no zero-cost position.
    struct FloorProblem {
        n: usize,
    }

    impl PermutationProblem for FloorProblem {
        fn dimension(&self) -> usize {
            self.n
        }

        fn cost(&self, position: &[usize]) -> usize {
            1 + position[0]
        }
    }

    /// Records every `on_iteration` call.
    struct Recording {
        inner: SortProblem,
        calls: Mutex<Vec<(usize, usize)>>,
    }

    impl PermutationProblem for Recording {
        fn dimension(&self) -> usize {
            self.inner.dimension()
        }

        fn cost(&self, position: &[usize]) -> usize {
            self.inner.cost(position)
        }

        fn on_iteration(&self, iteration: usize, best_cost: usize) {
            self.calls.lock().unwrap().push((iteration, best_cost));
        }
    }

    #[test]
    fn test_sort_converges() {
        let problem = SortProblem { n: 5 };
        let config = PsoConfig::default().with_seed(42);

        let result = PsoRunner::run(&problem, &config).unwrap();

        assert!(result.converged(), "expected convergence, got {result:?}");
        assert_eq!(result.best, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.best_cost, 0);
        assert_eq!(result.converged_at, Some(result.iterations));
    }

    #[test]
    fn test_exhausts_budget() {
        let problem = FloorProblem { n: 4 };
        let config = PsoConfig::default().with_max_iterations(25).with_seed(42);

        let result = PsoRunner::run(&problem, &config).unwrap();

        assert_eq!(result.termination, Termination::Exhausted);
        assert_eq!(result.iterations, 25);
        assert_eq!(result.best_cost, 1);
        assert_eq!(result.best[0], 0);
        assert_eq!(result.cost_history.len(), 26);
        assert_eq!(result.converged_at, None);
    }

    #[test]
    fn test_time_limit_with_unbounded_budget() {
        let problem = FloorProblem { n: 4 };
        let config = PsoConfig::default()
            .with_max_iterations(usize::MAX)
            .with_time_limit_ms(20)
            .with_seed(42);

        let result = PsoRunner::run(&problem, &config).unwrap();

        assert_eq!(result.termination, Termination::TimeLimit);
        assert!(result.iterations >= 1);
        assert_eq!(result.cost_history.len(), result.iterations + 1);
        assert_eq!(result.converged_at, None);
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let problem = SortProblem { n: 12 };
        let config = PsoConfig::default().with_max_iterations(200).with_seed(42);

        let result = PsoRunner::run(&problem, &config).unwrap();

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.cost_history.last(), Some(&result.best_cost));
        assert_eq!(problem.cost(&result.best), result.best_cost);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let problem = SortProblem { n: 10 };
        let config = PsoConfig::default().with_max_iterations(50).with_seed(7);

        let a = PsoRunner::run(&problem, &config).unwrap();
        let b = PsoRunner::run(&problem, &config).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_lowest_unused_repair_runs() {
        let problem = SortProblem { n: 8 };
        let config = PsoConfig::default()
            .with_repair(RepairStrategy::LowestUnused)
            .with_max_iterations(100)
            .with_seed(42);

        let result = PsoRunner::run(&problem, &config).unwrap();

        let mut sorted = result.best.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
        assert!(result.iterations >= 1 && result.iterations <= 100);
    }

    #[test]
    fn test_cancellation() {
        let problem = SortProblem { n: 20 };
        let config = PsoConfig::default().with_seed(42);

        // Raised before the run so the first boundary check stops it.
        let cancel = Arc::new(AtomicBool::new(true));

        let result = PsoRunner::run_with_cancel(&problem, &config, Some(cancel)).unwrap();
        assert_eq!(result.termination, Termination::Cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best.len(), 20);
    }

    #[test]
    fn test_on_iteration_hook() {
        let problem = Recording {
            inner: SortProblem { n: 6 },
            calls: Mutex::new(Vec::new()),
        };
        let config = PsoConfig::default().with_max_iterations(30).with_seed(1);

        let result = PsoRunner::run(&problem, &config).unwrap();
        let calls = problem.calls.lock().unwrap();

        assert_eq!(calls.len(), result.iterations);
        for (k, &(iteration, cost)) in calls.iter().enumerate() {
            assert_eq!(iteration, k + 1);
            assert_eq!(cost, result.cost_history[k + 1]);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = SortProblem { n: 4 };
        let config = PsoConfig::default().with_swarm_size(0);
        assert!(matches!(
            PsoRunner::run(&problem, &config),
            Err(SwarmError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let problem = SortProblem { n: 0 };
        assert!(matches!(
            PsoRunner::run(&problem, &PsoConfig::default()),
            Err(SwarmError::InvalidArgument(_))
        ));
    }
}
