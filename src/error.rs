//! Error type shared by the swarm engine and the N-Queens surface.

use thiserror::Error;

/// Errors raised by the PSO engine and the problem front-ends.
///
/// Reaching the iteration budget without a zero-cost solution is **not**
/// an error; it is reported through
/// [`Termination::Exhausted`](crate::pso::Termination::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwarmError {
    /// A caller-supplied argument is outside its domain (e.g. `n == 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A [`PsoConfig`](crate::pso::PsoConfig) field is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Resampling repair drew `attempts` candidates for `slot` without
    /// finding an unused value.
    #[error("repair exhausted after {attempts} draws at slot {slot}")]
    RepairExhausted {
        /// Index of the slot that could not be repaired.
        slot: usize,
        /// Number of candidates drawn for that slot.
        attempts: usize,
    },
}
