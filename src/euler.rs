//! Semi-implicit Euler integration with Hooke springs.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::network::Network;
use crate::ground::GroundPlane;
use crate::integrator::Integrator;
use crate::observer::StepObserver;

/// Force-based integrator.
///
/// Per tick:
/// 1. clear every force accumulator,
/// 2. add each spring's Hooke force (zero-length springs are skipped),
/// 3. add gravity weighted by mass,
/// 4. `v += F/m * dt`, then `v *= damping_factor`, then `x += v * dt`,
/// 5. bounce off the ground plane.
///
/// `damping_factor` is a numerical velocity multiplier, not a drag force.
#[derive(Clone, Debug, PartialEq)]
pub struct EulerIntegrator<F: Float> {
    pub gravity: Vec3<F>,
    pub damping_factor: F,
    pub ground: GroundPlane<F>,
}

impl<F: Float> EulerIntegrator<F> {
    pub fn new(gravity: Vec3<F>, damping_factor: F, ground: GroundPlane<F>) -> Self {
        EulerIntegrator { gravity, damping_factor, ground }
    }

    /// Steps 1 to 3: rebuild every particle's force for this tick.
    pub fn accumulate_forces(&self, network: &mut Network<F>) {
        let (particles, springs) = network.parts_mut();
        for p in particles.iter_mut() {
            p.force = Vec3::zero();
        }
        for s in springs {
            s.apply(particles);
        }
        for p in particles.iter_mut() {
            let weight = self.gravity.scale(p.mass());
            p.apply_force(weight);
        }
    }
}

impl<F: Float> Integrator<F> for EulerIntegrator<F> {
    fn step<O: StepObserver>(&mut self, network: &mut Network<F>, dt: F, observer: &mut O) {
        self.accumulate_forces(network);
        observer.on_forces_accumulated();

        for p in network.particles_mut().iter_mut() {
            let accel = p.force.scale(p.inv_mass());
            p.velocity = (p.velocity + accel.scale(dt)).scale(self.damping_factor);
            p.pos = p.pos + p.velocity.scale(dt);
        }
        observer.on_integrate();

        let mut contacts = 0;
        for (i, p) in network.particles_mut().iter_mut().enumerate() {
            if self.ground.resolve_velocity(p) {
                observer.on_ground_contact(i);
                contacts += 1;
            }
        }
        if contacts > 0 {
            log::trace!("euler: {} ground contacts", contacts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::spring::Spring;
    use crate::observer::NoOpStepObserver;
    use alloc::vec;

    fn weightless(ground: f32) -> EulerIntegrator<f32> {
        EulerIntegrator::new(Vec3::zero(), 1.0, GroundPlane::new(ground, 0.5))
    }

    #[test]
    fn forces_are_equal_and_opposite() {
        let particles = vec![
            Particle::new(Vec3::new(0.0, 5.0, 0.0), 1.0),
            Particle::new(Vec3::new(2.0, 6.0, 1.0), 3.0),
        ];
        let springs = vec![Spring::new(0, 1, 1.0, 40.0)];
        let mut net = Network::new(particles, springs, vec![]).unwrap();
        weightless(-100.0).accumulate_forces(&mut net);
        let fa = net.particles()[0].force;
        let fb = net.particles()[1].force;
        assert_eq!(fa, -fb);
        assert!(fa.length() > 0.0);
    }

    #[test]
    fn gravity_scales_with_mass() {
        let particles = vec![Particle::new(Vec3::new(0.0, 5.0, 0.0), 2.0f32)];
        let mut net = Network::new(particles, vec![], vec![]).unwrap();
        let euler = EulerIntegrator::new(Vec3::new(0.0, -10.0, 0.0), 1.0, GroundPlane::new(0.0, 0.5));
        euler.accumulate_forces(&mut net);
        assert_eq!(net.particles()[0].force, Vec3::new(0.0, -20.0, 0.0));
    }

    #[test]
    fn damping_scales_velocity_after_integration() {
        let particles = vec![Particle::new(Vec3::new(0.0, 5.0, 0.0), 1.0f32)];
        let mut net = Network::new(particles, vec![], vec![]).unwrap();
        let mut euler = EulerIntegrator::new(Vec3::new(0.0, -10.0, 0.0), 0.5, GroundPlane::new(0.0, 0.5));
        euler.step(&mut net, 0.1, &mut NoOpStepObserver);
        let p = &net.particles()[0];
        assert!((p.velocity.y - (-0.5)).abs() < 1e-6);
        assert!((p.pos.y - 4.95).abs() < 1e-6);
    }
}
