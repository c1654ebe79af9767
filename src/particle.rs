//! Point masses.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// A point mass.
///
/// `velocity` is the history used by the Euler integrator, `prev_pos` the one
/// used by the Verlet integrator. A body only ever advances one of them.
///
/// The inverse mass is a cache of `1 / mass`. It is never serialized and is
/// recomputed on load, so stored data cannot disagree with the mass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ParticleState<F>"))]
pub struct Particle<F: Float> {
    pub pos: Vec3<F>,
    pub prev_pos: Vec3<F>,
    pub velocity: Vec3<F>,
    /// Per-step force accumulator, cleared at the start of every Euler tick.
    pub force: Vec3<F>,
    mass: F,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    inv_mass: F,
}

/// Stored form of a particle.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ParticleState<F: Float> {
    pos: Vec3<F>,
    prev_pos: Vec3<F>,
    velocity: Vec3<F>,
    force: Vec3<F>,
    mass: F,
}

#[cfg(feature = "serde")]
impl<F: Float> From<ParticleState<F>> for Particle<F> {
    fn from(s: ParticleState<F>) -> Self {
        Particle {
            pos: s.pos,
            prev_pos: s.prev_pos,
            velocity: s.velocity,
            force: s.force,
            mass: s.mass,
            inv_mass: inverse(s.mass),
        }
    }
}

/// Zero for masses the network would reject anyway.
fn inverse<F: Float>(mass: F) -> F {
    if mass.is_positive_finite() {
        F::one() / mass
    } else {
        F::zero()
    }
}

impl<F: Float> Particle<F> {
    /// Create a particle at rest.
    ///
    /// Mass is validated when the particle enters a [`Network`](crate::Network);
    /// a non-positive mass yields a zero inverse mass here rather than a division by zero.
    pub fn new(pos: Vec3<F>, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            mass,
            inv_mass: inverse(mass),
        }
    }

    pub fn mass(&self) -> F { self.mass }
    pub fn inv_mass(&self) -> F { self.inv_mass }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.force = self.force + force;
    }

    /// Implicit Verlet velocity, `(pos - prev_pos) / dt`.
    pub fn implied_velocity(&self, dt: F) -> Vec3<F> {
        if dt.is_near_zero(F::from_f32(1e-30)) {
            return Vec3::zero();
        }
        (self.pos - self.prev_pos).scale(F::one() / dt)
    }

    /// Put the particle back at `pos` with no motion history.
    pub fn reset(&mut self, pos: Vec3<F>) {
        self.pos = pos;
        self.prev_pos = pos;
        self.velocity = Vec3::zero();
        self.force = Vec3::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_is_at_rest() {
        let p = Particle::new(Vec3::new(1.0f32, 2.0, 3.0), 2.0);
        assert_eq!(p.prev_pos, p.pos);
        assert_eq!(p.velocity, Vec3::zero());
        assert_eq!(p.force, Vec3::zero());
        assert!((p.inv_mass() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn invalid_mass_has_zero_inverse() {
        let p = Particle::new(Vec3::<f64>::zero(), 0.0);
        assert_eq!(p.inv_mass(), 0.0);
    }

    #[test]
    fn implied_velocity_zero_dt() {
        let mut p = Particle::new(Vec3::<f32>::zero(), 1.0);
        p.pos = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(p.implied_velocity(0.0), Vec3::zero());
        assert!((p.implied_velocity(0.5).x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn reset_clears_motion_history() {
        let mut p = Particle::new(Vec3::new(0.0f32, 1.0, 0.0), 2.0);
        p.pos = Vec3::new(3.0, -1.0, 0.0);
        p.velocity = Vec3::new(0.0, -4.0, 0.0);
        p.apply_force(Vec3::new(1.0, 0.0, 0.0));
        p.reset(Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(p.pos, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(p.prev_pos, p.pos);
        assert_eq!(p.velocity, Vec3::zero());
        assert_eq!(p.force, Vec3::zero());
        assert_eq!(p.implied_velocity(0.1), Vec3::zero());
        assert_eq!(p.mass(), 2.0);
    }
}
