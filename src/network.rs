//! The particle/spring graph shared by every builder and integrator.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::particle::Particle;
use crate::spring::Spring;
use crate::error::PhysicsError;
use alloc::collections::BTreeSet;
use alloc::vec::Vec as AllocVec;

/// Binds a particle to the source-mesh vertex slot it drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceBinding {
    pub particle: usize,
    pub vertex: usize,
}

/// Particles plus the springs between them.
///
/// Springs refer to particles by index. Topology is fixed once built: only
/// the motion state of particles changes while simulating.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Network<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    surface: AllocVec<SurfaceBinding>,
}

impl<F: Float> Network<F> {
    /// Assemble and validate a network.
    pub fn new(
        particles: AllocVec<Particle<F>>,
        springs: AllocVec<Spring<F>>,
        surface: AllocVec<SurfaceBinding>,
    ) -> Result<Self, PhysicsError> {
        let network = Network { particles, springs, surface };
        network.validate()?;
        Ok(network)
    }

    /// Check every structural invariant.
    ///
    /// Useful after deserializing a network from untrusted data.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let count = self.particles.len();
        for p in &self.particles {
            if !p.mass().is_positive_finite() {
                return Err(PhysicsError::InvalidMass);
            }
        }

        let mut seen = BTreeSet::new();
        for s in &self.springs {
            for index in [s.a, s.b] {
                if index >= count {
                    return Err(PhysicsError::ParticleOutOfBounds { index, count });
                }
            }
            if s.a == s.b {
                return Err(PhysicsError::SelfSpring { index: s.a });
            }
            if !s.stiffness.is_positive_finite() {
                return Err(PhysicsError::InvalidStiffness);
            }
            if !s.rest_length.is_finite() || s.rest_length < F::zero() {
                return Err(PhysicsError::InvalidDimension("rest length"));
            }
            let (a, b) = s.key();
            if !seen.insert((a, b)) {
                return Err(PhysicsError::DuplicateSpring { a, b });
            }
        }

        for binding in &self.surface {
            if binding.particle >= count {
                return Err(PhysicsError::ParticleOutOfBounds { index: binding.particle, count });
            }
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn surface(&self) -> &[SurfaceBinding] { &self.surface }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }

    /// Split borrow used by the integrators.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Particle<F>], &[Spring<F>]) {
        (&mut self.particles, &self.springs)
    }

    /// Snapshot of every particle position, in particle order.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Endpoint index pairs, in spring order.
    pub fn spring_pairs(&self) -> AllocVec<(usize, usize)> {
        self.springs.iter().map(|s| (s.a, s.b)).collect()
    }

    pub fn current_length(&self, spring: usize) -> F {
        self.springs[spring].current_length(&self.particles)
    }

    /// Largest relative deviation `|len - rest| / rest` over all springs with non-zero rest length.
    pub fn max_strain(&self) -> F {
        let mut worst = F::zero();
        for s in &self.springs {
            if s.rest_length == F::zero() {
                continue;
            }
            let strain = ((s.current_length(&self.particles) - s.rest_length) / s.rest_length).abs();
            worst = worst.max(strain);
        }
        worst
    }

    /// Sum of particle positions weighted by mass, divided by total mass.
    pub fn center_of_mass(&self) -> Vec3<F> {
        let mut total = F::zero();
        let mut sum = Vec3::zero();
        for p in &self.particles {
            sum = sum + p.pos.scale(p.mass());
            total = total + p.mass();
        }
        if total == F::zero() {
            return Vec3::zero();
        }
        sum.scale(F::one() / total)
    }
}
