//! Velocity, position, and repair operators for permutation PSO.
//!
//! The continuous PSO update is applied to integer positions in two steps:
//! move by the (real) velocity and wrap into `0..n`, then repair the vector
//! back into a permutation.
//!
//! # Velocity rule (Kennedy & Eberhart, 1995)
//!
//! ```text
//! v = w·v + c₁·r₁·(pbest - x) + c₂·r₂·(gbest - x)
//! ```
//!
//! with `r₁, r₂ ~ U(0, 1)` drawn fresh per dimension.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

use rand::Rng;

use super::config::RepairStrategy;
use super::types::Particle;
use crate::error::SwarmError;
use crate::random::uniform_unit;

/// Updates `particle.velocity` in place from inertia, personal-best pull,
/// and global-best pull. No clamping is applied.
///
/// Two independent uniforms are drawn per dimension, `r1` before `r2`.
pub fn update_velocity<R: Rng>(
    particle: &mut Particle,
    global_best: &[usize],
    inertia: f64,
    cognitive: f64,
    social: f64,
    rng: &mut R,
) {
    let Particle {
        position,
        velocity,
        personal_best,
    } = particle;

    for (j, v) in velocity.iter_mut().enumerate() {
        let r1 = uniform_unit(rng);
        let r2 = uniform_unit(rng);
        let x = position[j] as f64;
        *v = inertia * *v
            + cognitive * r1 * (personal_best.position[j] as f64 - x)
            + social * r2 * (global_best[j] as f64 - x);
    }
}

/// Moves `position` by `velocity`, wraps every entry into `0..n`, then
/// repairs the vector into a permutation.
///
/// Between the move and the repair the vector may contain duplicates.
pub fn update_position<R: Rng>(
    position: &mut [usize],
    velocity: &[f64],
    strategy: RepairStrategy,
    rng: &mut R,
) -> Result<(), SwarmError> {
    let n = position.len();
    if n == 0 {
        return Ok(());
    }

    for (x, &v) in position.iter_mut().zip(velocity) {
        *x = wrap_index(*x as f64 + v, n);
    }

    repair(position, strategy, rng)
}

/// Truncates `raw` toward zero and wraps it into `0..n`.
///
/// Non-finite input is absorbed by the saturating float cast (`NaN` maps
/// to 0). `n` must be positive.
pub fn wrap_index(raw: f64, n: usize) -> usize {
    let truncated = raw as i64;
    truncated.rem_euclid(n as i64) as usize
}

/// Whether `position` is a permutation of `0..position.len()`.
pub fn is_permutation(position: &[usize]) -> bool {
    let n = position.len();
    let mut seen = vec![false; n];
    for &v in position {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Projects `position` onto the permutations of `0..position.len()`.
///
/// Entries that repeat an earlier value, or that are out of range, are
/// replaced according to `strategy`. Already-valid permutations are left
/// untouched and consume no randomness.
pub fn repair<R: Rng>(
    position: &mut [usize],
    strategy: RepairStrategy,
    rng: &mut R,
) -> Result<(), SwarmError> {
    match strategy {
        RepairStrategy::Resample { attempts_per_value } => {
            repair_resample(position, attempts_per_value, rng)
        }
        RepairStrategy::LowestUnused => {
            repair_lowest_unused(position);
            Ok(())
        }
    }
}

fn repair_resample<R: Rng>(
    position: &mut [usize],
    attempts_per_value: usize,
    rng: &mut R,
) -> Result<(), SwarmError> {
    let n = position.len();
    let budget = attempts_per_value.saturating_mul(n);
    let mut seen = vec![false; n];

    for slot in 0..n {
        if position[slot] >= n || seen[position[slot]] {
            let mut attempts = 0usize;
            loop {
                if attempts == budget {
                    return Err(SwarmError::RepairExhausted { slot, attempts });
                }
                attempts += 1;
                let candidate = rng.random_range(0..n);
                if !seen[candidate] {
                    position[slot] = candidate;
                    break;
                }
            }
        }
        seen[position[slot]] = true;
    }

    Ok(())
}

fn repair_lowest_unused(position: &mut [usize]) {
    let n = position.len();
    let mut used = vec![false; n];
    let mut duplicates = Vec::new();

    for (slot, &value) in position.iter().enumerate() {
        if value < n && !used[value] {
            used[value] = true;
        } else {
            duplicates.push(slot);
        }
    }

    // One free value per duplicate slot.
    let free = (0..n).filter(|&value| !used[value]);
    for (slot, value) in duplicates.into_iter().zip(free) {
        position[slot] = value;
    }
}

// ============================================================================
// Tests
// ============================================================================
