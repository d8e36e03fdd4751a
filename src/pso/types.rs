//! Core trait and particle state for permutation PSO.

/// Defines a permutation-encoded minimisation problem for the swarm.
///
/// A candidate is a permutation of `0..dimension()`. The user implements
/// the cost function; the PSO framework handles initialization, velocity
/// and position updates, repair, and best tracking.
///
/// Costs are non-negative integers and `0` is treated as a proven optimum:
/// the run stops as soon as the global best reaches it.
///
/// # Examples
///
/// ```
/// use u_swarm::pso::PermutationProblem;
///
/// /// Counts elements that are out of place.
/// struct SortProblem { n: usize }
///
/// impl PermutationProblem for SortProblem {
///     fn dimension(&self) -> usize { self.n }
///
///     fn cost(&self, position: &[usize]) -> usize {
///         position.iter().enumerate().filter(|&(i, &v)| i != v).count()
///     }
/// }
/// ```
pub trait PermutationProblem: Send + Sync {
    /// Length of every position vector.
    fn dimension(&self) -> usize;

    /// Cost of a position. Lower is better; `0` is optimal.
    ///
    /// Must accept arbitrary vectors of length `dimension()`, not only
    /// permutations.
    fn cost(&self, position: &[usize]) -> usize;

    /// Called after the best-update pass of every iteration.
    ///
    /// The default implementation is a no-op.
    fn on_iteration(&self, _iteration: usize, _best_cost: usize) {}
}

/// A (position, cost) pair kept as an independent value copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Best {
    /// Snapshot of the position at the time it was recorded.
    pub position: Vec<usize>,
    /// Cost of `position`.
    pub cost: usize,
}

impl Best {
    /// Records a copy of `position`.
    pub fn capture(position: &[usize], cost: usize) -> Self {
        Self {
            position: position.to_vec(),
            cost,
        }
    }

    /// Overwrites this best with a copy of `position`, reusing the buffer.
    pub fn replace(&mut self, position: &[usize], cost: usize) {
        self.position.clear();
        self.position.extend_from_slice(position);
        self.cost = cost;
    }
}

/// One member of the swarm.
///
/// Each particle exclusively owns its position, velocity and personal
/// best. Nothing is shared between particles.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position. A permutation after every repair.
    pub position: Vec<usize>,
    /// Current velocity. Unclamped.
    pub velocity: Vec<f64>,
    /// Best position this particle has held.
    pub personal_best: Best,
}
