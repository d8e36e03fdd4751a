//! Particle Swarm Optimization (PSO) over permutations.
//!
//! A swarm of particles moves through the space of permutations of
//! `0..n`. Each particle carries an integer position, a real-valued
//! velocity, and a personal best; the swarm shares a global best. Moves
//! follow the classic continuous update and are projected back onto
//! permutations by a repair operator after every step.
//!
//! Users define their problem by implementing [`PermutationProblem`].
//!
//! # Key Types
//!
//! - [`PsoConfig`]: Run parameters (swarm size, budget, coefficients, repair)
//! - [`SwarmState`]: Particles, personal bests, and the global best
//! - [`PsoRunner`]: Executes the optimization loop
//! - [`PsoResult`]: Final result with termination reason and history
//!
//! # Submodules
//!
//! - [`operators`]: Velocity update, position update, and repair
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"
//! - Hu, Eberhart & Shi (2003), "Swarm Intelligence for Permutation Optimization"

mod config;
pub mod operators;
mod runner;
mod swarm;
mod types;

pub use config::{PsoConfig, RepairStrategy};
pub use runner::{PsoResult, PsoRunner, Termination};
pub use swarm::SwarmState;
pub use types::{Best, Particle, PermutationProblem};
