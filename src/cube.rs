//! Eight-corner cube with a fixed spring topology.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::particle::Particle;
use crate::spring::Spring;
use crate::network::Network;
use crate::config::BuildConfig;
use crate::builder::{log_built, NetworkBuilder};
use crate::error::PhysicsError;
use alloc::vec::Vec as AllocVec;

/// Corner pairs along the cube's 12 edges.
pub const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// 8 face diagonals followed by 4 space diagonals.
///
/// The two faces perpendicular to `x` are not braced; the four space
/// diagonals hold the cube's volume.
pub const DIAGONALS: [(usize, usize); 12] = [
    (0, 2), (1, 3), (4, 6), (5, 7),
    (0, 5), (1, 4), (2, 7), (3, 6),
    (0, 6), (1, 7), (2, 4), (3, 5),
];

/// A cube of `side_length` centred on `origin`.
///
/// Corners 0..4 lie on the `-z` face, 4..8 on the `+z` face, each face wound
/// `(-x,-y)`, `(+x,-y)`, `(+x,+y)`, `(-x,+y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeBuilder<F: Float> {
    pub side_length: F,
    pub origin: Vec3<F>,
}

impl<F: Float> CubeBuilder<F> {
    pub fn new(side_length: F, origin: Vec3<F>) -> Self {
        CubeBuilder { side_length, origin }
    }

    fn corners(&self) -> [Vec3<F>; 8] {
        let h = self.side_length * F::half();
        let o = self.origin;
        [
            Vec3::new(o.x - h, o.y - h, o.z - h),
            Vec3::new(o.x + h, o.y - h, o.z - h),
            Vec3::new(o.x + h, o.y + h, o.z - h),
            Vec3::new(o.x - h, o.y + h, o.z - h),
            Vec3::new(o.x - h, o.y - h, o.z + h),
            Vec3::new(o.x + h, o.y - h, o.z + h),
            Vec3::new(o.x + h, o.y + h, o.z + h),
            Vec3::new(o.x - h, o.y + h, o.z + h),
        ]
    }
}

impl<F: Float> NetworkBuilder<F> for CubeBuilder<F> {
    fn build(&self, config: &BuildConfig<F>) -> Result<Network<F>, PhysicsError> {
        config.validate()?;
        if !self.side_length.is_positive_finite() {
            return Err(PhysicsError::InvalidDimension("cube side length"));
        }
        if !self.origin.is_finite() {
            return Err(PhysicsError::NonFiniteParameter("cube origin"));
        }

        let particles: AllocVec<_> = self
            .corners()
            .iter()
            .map(|&pos| Particle::new(pos, config.mass))
            .collect();

        let springs = EDGES
            .iter()
            .chain(DIAGONALS.iter())
            .map(|&(a, b)| Spring::between(a, b, &particles, config.stiffness))
            .collect();

        let network = Network::new(particles, springs, AllocVec::new())?;
        log_built("cube", &network);
        Ok(network)
    }
}
