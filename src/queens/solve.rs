//! The `solve` entry point.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::board::Board;
use super::problem::NQueens;
use crate::error::SwarmError;
use crate::pso::{PsoConfig, PsoResult, PsoRunner};

/// Outcome of one N-Queens run.
///
/// Serializes (with the `serde` feature) to
/// `{"solution": [...], "conflicts": <int>, "iterations": <int>}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// `solution[row]` is the queen's column. Always a permutation.
    pub solution: Vec<usize>,
    /// Attacking pairs in `solution`. 0 means a valid arrangement.
    pub conflicts: usize,
    /// Iterations executed by the run.
    pub iterations: usize,
}

impl Solution {
    /// Whether no two queens attack each other.
    pub fn is_valid(&self) -> bool {
        self.conflicts == 0
    }

    /// Text rendering of the arrangement.
    pub fn board(&self) -> Board<'_> {
        Board::new(&self.solution)
    }
}

impl From<PsoResult> for Solution {
    fn from(result: PsoResult) -> Self {
        Self {
            solution: result.best,
            conflicts: result.best_cost,
            iterations: result.iterations,
        }
    }
}

/// Searches for a conflict-free placement of `n` queens.
///
/// Reaching the iteration budget with `conflicts > 0` is a normal outcome
/// (boards of size 2 and 3 have no solution), not an error.
///
/// # Errors
///
/// - [`SwarmError::InvalidArgument`] if `n == 0`
/// - [`SwarmError::InvalidConfig`] if `config` fails validation
/// - [`SwarmError::RepairExhausted`] if resampling repair runs out of draws
///
/// # Examples
///
/// ```
/// use u_swarm::pso::PsoConfig;
/// use u_swarm::queens;
///
/// let result = queens::solve(1, &PsoConfig::default()).unwrap();
/// assert_eq!(result.solution, vec![0]);
/// assert_eq!(result.conflicts, 0);
/// assert_eq!(result.iterations, 1);
/// ```
pub fn solve(n: usize, config: &PsoConfig) -> Result<Solution, SwarmError> {
    solve_with_cancel(n, config, None)
}

/// [`solve`] with an optional cancellation token, checked once per
/// iteration.
pub fn solve_with_cancel(
    n: usize,
    config: &PsoConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Solution, SwarmError> {
    let problem = NQueens::new(n)?;
    let result = PsoRunner::run_with_cancel(&problem, config, cancel)?;
    Ok(result.into())
}
