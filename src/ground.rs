//! Ground-plane collision response for both integrators.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::particle::Particle;

/// Horizontal plane at `height` that particles cannot sink below.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroundPlane<F: Float> {
    pub height: F,
    pub restitution: F,
}

impl<F: Float> GroundPlane<F> {
    pub fn new(height: F, restitution: F) -> Self {
        GroundPlane { height, restitution }
    }

    /// Euler response: clamp the height and reflect the vertical velocity,
    /// scaled by restitution. Horizontal velocity is untouched.
    ///
    /// Returns true on contact.
    pub fn resolve_velocity(&self, p: &mut Particle<F>) -> bool {
        if p.pos.y >= self.height {
            return false;
        }
        p.pos.y = self.height;
        p.velocity.y = -p.velocity.y * self.restitution;
        true
    }

    /// Verlet response: clamp the height, then rewrite `prev_pos` so that the
    /// next tick's implicit velocity is the bounced one.
    ///
    /// Returns true on contact.
    pub fn resolve_verlet(&self, p: &mut Particle<F>, dt: F) -> bool {
        if p.pos.y >= self.height {
            return false;
        }
        p.pos.y = self.height;
        let v = p.implied_velocity(dt);
        let bounced: Vec3<F> = v.with_height(-v.y * self.restitution);
        p.prev_pos = p.pos - bounced.scale(dt);
        true
    }
}
