//! Conflict counting and the N-Queens problem definition.

use crate::error::SwarmError;
use crate::pso::PermutationProblem;

/// Number of attacking queen pairs.
///
/// For every pair `i < j`, counts one conflict when the two entries are
/// equal or lie on a shared diagonal (`|p[i] - p[j]| == j - i`). Accepts
/// arbitrary vectors, not only permutations. Returns 0 iff `position` is a
/// valid N-Queens arrangement. O(n²).
pub fn fitness(position: &[usize]) -> usize {
    let mut conflicts = 0;
    for (i, &a) in position.iter().enumerate() {
        for (offset, &b) in position[i + 1..].iter().enumerate() {
            if a == b || a.abs_diff(b) == offset + 1 {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// The N-Queens problem on an `n × n` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    /// Creates the problem.
    ///
    /// Fails with [`SwarmError::InvalidArgument`] when `n == 0`.
    pub fn new(n: usize) -> Result<Self, SwarmError> {
        if n == 0 {
            return Err(SwarmError::InvalidArgument(
                "n must be a positive integer".into(),
            ));
        }
        Ok(Self { n })
    }

    /// Board size.
    pub fn n(&self) -> usize {
        self.n
    }
}

impl PermutationProblem for NQueens {
    fn dimension(&self) -> usize {
        self.n
    }

    fn cost(&self, position: &[usize]) -> usize {
        fitness(position)
    }
}
