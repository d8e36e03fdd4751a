//! Swarm state: particles, personal bests, and the global best.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::PsoConfig;
use super::operators::{update_position, update_velocity};
use super::types::{Best, Particle, PermutationProblem};
use crate::error::SwarmError;
use crate::random::{random_permutation, uniform_signed};

/// Mutable state of one PSO run.
///
/// Created fresh for every run and owned exclusively by it. Both the
/// personal bests and the global best are value copies, so moving a
/// particle never alters a recorded best.
#[derive(Debug, Clone)]
pub struct SwarmState {
    particles: Vec<Particle>,
    global_best: Best,
}

impl SwarmState {
    /// Draws `swarm_size` particles with random permutation positions and
    /// velocities uniform in `[-1, 1]`.
    ///
    /// The global best is the first particle (in swarm order) with the
    /// minimum initial cost.
    ///
    /// # Panics
    /// Panics if `swarm_size` is zero.
    pub fn init<P: PermutationProblem, R: Rng>(
        problem: &P,
        swarm_size: usize,
        rng: &mut R,
    ) -> Self {
        assert!(swarm_size > 0, "swarm must not be empty");
        let n = problem.dimension();

        let particles: Vec<Particle> = (0..swarm_size)
            .map(|_| {
                let position = random_permutation(n, rng);
                let velocity = (0..n).map(|_| uniform_signed(rng)).collect();
                let cost = problem.cost(&position);
                Particle {
                    personal_best: Best::capture(&position, cost),
                    position,
                    velocity,
                }
            })
            .collect();

        let mut leader = &particles[0].personal_best;
        for p in &particles[1..] {
            if p.personal_best.cost < leader.cost {
                leader = &p.personal_best;
            }
        }
        let global_best = leader.clone();

        Self {
            particles,
            global_best,
        }
    }

    /// Evaluates every particle and updates personal and global bests.
    ///
    /// Evaluation may run in parallel; the reduction is always serial in
    /// swarm order with a strict `<`, so ties keep the earliest holder.
    /// Returns `true` if the global best improved.
    pub fn observe<P: PermutationProblem>(&mut self, problem: &P, parallel: bool) -> bool {
        let costs = self.evaluate(problem, parallel);
        let mut improved = false;

        for (particle, cost) in self.particles.iter_mut().zip(costs) {
            if cost < particle.personal_best.cost {
                particle.personal_best.replace(&particle.position, cost);
            }
            if cost < self.global_best.cost {
                self.global_best.replace(&particle.position, cost);
                improved = true;
            }
        }

        improved
    }

    /// Applies the velocity update then the position update to every
    /// particle, steering toward the current global best.
    pub fn advance<R: Rng>(&mut self, config: &PsoConfig, rng: &mut R) -> Result<(), SwarmError> {
        for particle in &mut self.particles {
            update_velocity(
                particle,
                &self.global_best.position,
                config.inertia,
                config.cognitive,
                config.social,
                rng,
            );
            update_position(
                &mut particle.position,
                &particle.velocity,
                config.repair,
                rng,
            )?;
        }
        Ok(())
    }

    /// The particles, in swarm order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Best (position, cost) observed so far.
    pub fn global_best(&self) -> &Best {
        &self.global_best
    }

    /// Consumes the state, returning the global best.
    pub fn into_global_best(self) -> Best {
        self.global_best
    }

    fn evaluate<P: PermutationProblem>(&self, problem: &P, parallel: bool) -> Vec<usize> {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                return self
                    .particles
                    .par_iter()
                    .map(|p| problem.cost(&p.position))
                    .collect();
            }
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        self.particles
            .iter()
            .map(|p| problem.cost(&p.position))
            .collect()
    }
}
