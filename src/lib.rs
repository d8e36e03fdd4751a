//! Particle Swarm Optimization over permutation encodings.
//!
//! - **PSO**: A generic swarm engine for problems whose candidates are
//!   permutations of `0..n` and whose cost is a non-negative integer.
//!   Velocities are real-valued; positions are moved, wrapped, and
//!   repaired back onto permutations after every step.
//! - **N-Queens**: Places `n` non-attacking queens on an `n × n` board,
//!   encoding row `i`'s queen column as `position[i]`, solved with the
//!   PSO engine through a single [`queens::solve`] entry point.
//!
//! # Example
//!
//! ```
//! use u_swarm::pso::PsoConfig;
//! use u_swarm::queens;
//!
//! let config = PsoConfig::default().with_seed(42);
//! let result = queens::solve(8, &config).unwrap();
//! assert_eq!(result.solution.len(), 8);
//! assert_eq!(result.conflicts, queens::fitness(&result.solution));
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate swarm costs with rayon
//! - `serde`: derive `Serialize`/`Deserialize` for results and configs

pub mod error;
pub mod pso;
pub mod queens;
pub mod random;

pub use error::SwarmError;
