//! Volumetric sampling: surface vertices plus an interior lattice.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::particle::Particle;
use crate::spring::Spring;
use crate::network::{Network, SurfaceBinding};
use crate::mesh::TriangleMesh;
use crate::transform::Transform;
use crate::config::BuildConfig;
use crate::builder::{log_built, NetworkBuilder};
use crate::error::PhysicsError;
use alloc::vec::Vec as AllocVec;

/// Above this many particles the neighbour search gets a warning in the log.
const LARGE_NEIGHBOR_SEARCH: usize = 4096;

/// Fills a sphere of `radius` (local space, centred on the local origin) with
/// particles.
///
/// Particles `0..surface.vertex_count()` are the surface vertices in mesh
/// order, each bound to its own vertex slot. Interior lattice points follow,
/// kept only when within `radius` of the centre. Lattice coordinates are
/// `-radius + i * spacing` for integer `i`, so the lattice is identical on
/// every build.
///
/// Springs join every pair closer than `spacing * tolerance_factor`. The
/// pair test runs in local space so that the body transform does not change
/// connectivity; rest lengths are measured on the world positions.
///
/// Surface vertices are not merged with the lattice. A vertex that lands
/// exactly on a lattice point yields two coincident particles joined by a
/// zero-rest-length spring. That spring exerts no force and is skipped by
/// relaxation while its ends coincide, so the pair moves as one point.
///
/// # Cost
///
/// The neighbour search compares every pair of particles: O(n²) time in the
/// particle count. The lattice size grows with `(radius / spacing)³`, so
/// halving the spacing multiplies build time by roughly 64. The tolerance
/// factor is the only control over connectivity density: values just above
/// 1 link axis neighbours only, values above √2 add face diagonals.
#[derive(Clone, Debug)]
pub struct VolumetricSampler<F: Float> {
    pub surface: Option<TriangleMesh<F>>,
    pub transform: Transform<F>,
    pub radius: F,
}

impl<F: Float> VolumetricSampler<F> {
    pub fn new(surface: TriangleMesh<F>, transform: Transform<F>, radius: F) -> Self {
        VolumetricSampler { surface: Some(surface), transform, radius }
    }

    /// Local-space lattice points inside the sphere, in x-major order.
    fn interior_points(&self, spacing: F) -> AllocVec<Vec3<F>> {
        let r = self.radius;
        let steps = ((r + r) / spacing).floor().to_usize();
        let r_sq = r * r;
        let mut points = AllocVec::new();
        for i in 0..=steps {
            let x = -r + F::from_usize(i) * spacing;
            for j in 0..=steps {
                let y = -r + F::from_usize(j) * spacing;
                for k in 0..=steps {
                    let z = -r + F::from_usize(k) * spacing;
                    let p = Vec3::new(x, y, z);
                    if p.length_sq() <= r_sq {
                        points.push(p);
                    }
                }
            }
        }
        points
    }
}

impl<F: Float> NetworkBuilder<F> for VolumetricSampler<F> {
    fn build(&self, config: &BuildConfig<F>) -> Result<Network<F>, PhysicsError> {
        let surface = self
            .surface
            .as_ref()
            .ok_or(PhysicsError::MissingGeometry("volumetric surface mesh"))?;
        config.validate()?;
        self.transform.validate()?;
        if !self.radius.is_positive_finite() {
            return Err(PhysicsError::InvalidDimension("sampling radius"));
        }

        let mut local: AllocVec<Vec3<F>> = surface.vertices().to_vec();
        local.extend(self.interior_points(config.internal_point_spacing));

        let particles: AllocVec<_> = local
            .iter()
            .map(|&p| Particle::new(self.transform.transform_point(p), config.mass))
            .collect();

        let n = particles.len();
        if n > LARGE_NEIGHBOR_SEARCH {
            log::warn!(
                "volumetric sampler: quadratic neighbour search over {} particles ({} pairs)",
                n,
                n * (n - 1) / 2
            );
        }

        let max_sq = {
            let radius = config.neighbor_radius();
            radius * radius
        };
        let mut springs = AllocVec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if local[i].distance_sq(local[j]) <= max_sq {
                    springs.push(Spring::between(i, j, &particles, config.stiffness));
                }
            }
        }

        let surface_bindings = (0..surface.vertex_count())
            .map(|v| SurfaceBinding { particle: v, vertex: v })
            .collect();

        let network = Network::new(particles, springs, surface_bindings)?;
        log_built("volumetric", &network);
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_surface() -> TriangleMesh<f64> {
        TriangleMesh::new(AllocVec::new(), AllocVec::new()).unwrap()
    }

    #[test]
    fn lattice_stays_inside_radius() {
        let sampler = VolumetricSampler::new(empty_surface(), Transform::identity(), 0.5);
        let pts = sampler.interior_points(0.25);
        assert!(!pts.is_empty());
        for p in &pts {
            assert!(p.length() <= 0.5 + 1e-12);
        }
    }

    #[test]
    fn missing_surface_fails_fast() {
        let sampler = VolumetricSampler::<f32> {
            surface: None,
            transform: Transform::identity(),
            radius: 1.0,
        };
        assert_eq!(
            sampler.build(&BuildConfig::new()).unwrap_err(),
            PhysicsError::MissingGeometry("volumetric surface mesh")
        );
    }

    #[test]
    fn vertex_on_lattice_point_gets_zero_length_spring() {
        let surface = TriangleMesh::new(alloc::vec![Vec3::new(0.5, 0.0, 0.0)], AllocVec::new()).unwrap();
        let network = VolumetricSampler::new(surface, Transform::identity(), 0.5)
            .build(&BuildConfig::new().with_spacing(0.25))
            .unwrap();
        let coincident: AllocVec<_> = network
            .springs()
            .iter()
            .filter(|s| s.rest_length == 0.0)
            .collect();
        assert_eq!(coincident.len(), 1);
        assert_eq!(coincident[0].a, 0);
        assert_eq!(network.particles()[coincident[0].b].pos, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn scaled_body_keeps_local_connectivity() {
        let config = BuildConfig::new().with_spacing(0.5).with_tolerance_factor(1.05);
        let plain = VolumetricSampler::new(empty_surface(), Transform::identity(), 1.0)
            .build(&config)
            .unwrap();
        let scaled = VolumetricSampler::new(
            empty_surface(),
            Transform::identity().with_uniform_scale(3.0),
            1.0,
        )
        .build(&config)
        .unwrap();
        assert_eq!(plain.spring_pairs(), scaled.spring_pairs());
        assert!((scaled.springs()[0].rest_length - 1.5).abs() < 1e-9);
    }
}
