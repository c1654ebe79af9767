//! Position Verlet integration with spring-length relaxation.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::network::Network;
use crate::ground::GroundPlane;
use crate::integrator::Integrator;
use crate::observer::StepObserver;

/// Position-based integrator.
///
/// Velocity lives implicitly in `pos - prev_pos`. Each tick advances positions
/// from that history, then relaxes every spring towards its rest length
/// `iterations` times, then resolves ground contact.
///
/// Relaxation is Gauss-Seidel: springs are corrected one after another in list
/// order and each sees the corrections made before it. The result therefore
/// depends on spring order, and a stiff or over-constrained network can keep
/// some residual stretch after the last pass.
///
/// # Stability
///
/// A pass removes `(inv_a + inv_b) / 2` of a spring's violation. At 2 or more
/// the correction overshoots by at least the violation itself and the spring
/// oscillates or diverges, so every spring needs `inv_a + inv_b < 4`. With
/// equal masses that means every particle heavier than 0.5. See
/// [`relaxation_is_stable`](Self::relaxation_is_stable).
#[derive(Clone, Debug, PartialEq)]
pub struct VerletIntegrator<F: Float> {
    pub gravity: Vec3<F>,
    pub damping: F,
    pub iterations: usize,
    pub ground: GroundPlane<F>,
}

impl<F: Float> VerletIntegrator<F> {
    pub fn new(gravity: Vec3<F>, damping: F, iterations: usize, ground: GroundPlane<F>) -> Self {
        VerletIntegrator { gravity, damping, iterations, ground }
    }

    /// `x' = x + (x - x_prev) * damping + g * dt²`, remembering `x` as the new history.
    pub fn advance(&self, network: &mut Network<F>, dt: F) {
        let g_term = self.gravity.scale(dt * dt);
        for p in network.particles_mut().iter_mut() {
            let saved = p.pos;
            p.pos = p.pos + (p.pos - p.prev_pos).scale(self.damping) + g_term;
            p.prev_pos = saved;
        }
    }

    /// True when no spring's endpoints are light enough to make a relaxation
    /// pass overshoot.
    pub fn relaxation_is_stable(network: &Network<F>) -> bool {
        let limit = F::two() + F::two();
        let particles = network.particles();
        network
            .springs()
            .iter()
            .all(|s| particles[s.a].inv_mass() + particles[s.b].inv_mass() < limit)
    }

    /// One relaxation pass over every spring.
    pub fn relax(&self, network: &mut Network<F>) {
        let (particles, springs) = network.parts_mut();
        for s in springs {
            s.relax(particles);
        }
    }
}

impl<F: Float> Integrator<F> for VerletIntegrator<F> {
    fn step<O: StepObserver>(&mut self, network: &mut Network<F>, dt: F, observer: &mut O) {
        self.advance(network, dt);
        observer.on_integrate();

        for i in 0..self.iterations {
            self.relax(network);
            observer.on_constraint_iteration(i);
        }

        for (i, p) in network.particles_mut().iter_mut().enumerate() {
            if self.ground.resolve_verlet(p, dt) {
                observer.on_ground_contact(i);
            }
        }
    }
}
