//! Distance springs between two particles.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::particle::Particle;

/// A spring between particles `a` and `b`.
///
/// The rest length is fixed when the spring is created and never changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F) -> Self {
        Spring { a, b, rest_length, stiffness }
    }

    /// Spring whose rest length is the current distance between its endpoints.
    pub fn between(a: usize, b: usize, particles: &[Particle<F>], stiffness: F) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Spring { a, b, rest_length, stiffness }
    }

    /// Unordered endpoint pair as `(min, max)`.
    pub fn key(&self) -> (usize, usize) {
        if self.a < self.b { (self.a, self.b) } else { (self.b, self.a) }
    }

    /// Current endpoint separation.
    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// Hooke force acting on endpoint `a`. Endpoint `b` receives the exact negation.
    ///
    /// Returns `None` for a zero-length spring: the direction is undefined.
    pub fn force(&self, particles: &[Particle<F>]) -> Option<Vec3<F>> {
        let delta = particles[self.b].pos - particles[self.a].pos;
        let len = delta.length();
        if len == F::zero() {
            return None;
        }
        let dir = delta.scale(F::one() / len);
        Some(dir.scale(self.stiffness * (len - self.rest_length)))
    }

    /// Accumulate this spring's force into both endpoints.
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        if let Some(force) = self.force(particles) {
            particles[self.a].apply_force(force);
            particles[self.b].apply_force(-force);
        }
    }

    /// One Gauss-Seidel correction towards the rest length.
    ///
    /// Each endpoint moves half the violation scaled by its inverse mass.
    /// Stiffness does not take part.
    pub fn relax(&self, particles: &mut [Particle<F>]) {
        let a_pos = particles[self.a].pos;
        let b_pos = particles[self.b].pos;

        let delta = b_pos - a_pos;
        let len = delta.length();
        if len == F::zero() {
            return; // degenerate
        }

        let violation = len - self.rest_length;
        let correction = delta.scale(violation / len * F::half());

        let a_inv = particles[self.a].inv_mass();
        let b_inv = particles[self.b].inv_mass();
        particles[self.a].pos = a_pos + correction.scale(a_inv);
        particles[self.b].pos = b_pos - correction.scale(b_inv);
    }
}
