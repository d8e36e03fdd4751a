//! N-Queens on top of the permutation PSO engine.
//!
//! A board is encoded as a permutation: `position[i] = c` puts the queen
//! of row `i` in column `c`. The permutation structure rules out column
//! clashes, leaving row-value and diagonal attacks for the cost function.
//!
//! # Key Types
//!
//! - [`NQueens`]: The problem definition, implementing
//!   [`PermutationProblem`](crate::pso::PermutationProblem)
//! - [`Solution`]: `{ solution, conflicts, iterations }` returned by [`solve`]
//! - [`Board`]: Text rendering of an arrangement

mod board;
mod problem;
mod solve;

pub use board::Board;
pub use crate::pso::operators::is_permutation;
pub use problem::{fitness, NQueens};
pub use solve::{solve, solve_with_cancel, Solution};
