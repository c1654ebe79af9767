//! Sparse networks derived from triangle-mesh adjacency.

use crate::float::Float;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::network::{Network, SurfaceBinding};
use crate::mesh::TriangleMesh;
use crate::transform::Transform;
use crate::config::BuildConfig;
use crate::builder::{log_built, NetworkBuilder};
use crate::error::PhysicsError;
use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Reduces a dense mesh to a particle per kept vertex and a spring per kept
/// triangle edge.
///
/// Vertices `0, stride, 2*stride, ...` are kept until `max_particle_count` is
/// reached. Each triangle edge whose endpoints were both kept becomes one
/// spring, however many triangles share it. With `max_spring_length` set,
/// edges longer than that in world space are dropped: after reduction,
/// vertices close in index order can still be far apart on the surface.
#[derive(Clone, Debug)]
pub struct MeshAdjacencyBuilder<F: Float> {
    pub mesh: Option<TriangleMesh<F>>,
    pub transform: Transform<F>,
}

impl<F: Float> MeshAdjacencyBuilder<F> {
    pub fn new(mesh: TriangleMesh<F>, transform: Transform<F>) -> Self {
        MeshAdjacencyBuilder { mesh: Some(mesh), transform }
    }
}

/// Map from source vertex index to particle index for the kept vertices.
fn subsample(vertex_count: usize, stride: usize, max_particles: usize) -> AllocVec<Option<usize>> {
    let mut map = vec![None; vertex_count];
    let mut kept = 0;
    for v in (0..vertex_count).step_by(stride) {
        if max_particles > 0 && kept >= max_particles {
            break;
        }
        map[v] = Some(kept);
        kept += 1;
    }
    map
}

impl<F: Float> NetworkBuilder<F> for MeshAdjacencyBuilder<F> {
    fn build(&self, config: &BuildConfig<F>) -> Result<Network<F>, PhysicsError> {
        let mesh = self
            .mesh
            .as_ref()
            .ok_or(PhysicsError::MissingGeometry("source mesh"))?;
        config.validate()?;
        self.transform.validate()?;

        let index_map = subsample(mesh.vertex_count(), config.vertex_stride, config.max_particle_count);

        let mut particles = AllocVec::new();
        let mut surface = AllocVec::new();
        for (vertex, slot) in index_map.iter().enumerate() {
            if let Some(particle) = *slot {
                let world = self.transform.transform_point(mesh.vertices()[vertex]);
                particles.push(Particle::new(world, config.mass));
                surface.push(SurfaceBinding { particle, vertex });
            }
        }

        let limit = config.max_spring_length;
        let mut seen = BTreeSet::new();
        let mut springs = AllocVec::new();
        for &[v0, v1, v2] in mesh.triangles() {
            for (u, v) in [(v0, v1), (v1, v2), (v2, v0)] {
                let (Some(a), Some(b)) = (index_map[u], index_map[v]) else {
                    continue;
                };
                if a == b {
                    continue;
                }
                let key = if a < b { (a, b) } else { (b, a) };
                if seen.contains(&key) {
                    continue;
                }
                let spring = Spring::between(a, b, &particles, config.stiffness);
                if limit > F::zero() && spring.rest_length > limit {
                    log::trace!(
                        "mesh adjacency: skipping spring {}-{} of length {} (max {})",
                        a, b, spring.rest_length, limit
                    );
                    continue;
                }
                seen.insert(key);
                springs.push(spring);
            }
        }

        let network = Network::new(particles, springs, surface)?;
        log_built("mesh adjacency", &network);
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsample_respects_stride_and_cap() {
        let map = subsample(10, 3, 0);
        assert_eq!(map[0], Some(0));
        assert_eq!(map[3], Some(1));
        assert_eq!(map[9], Some(3));
        assert_eq!(map[1], None);

        let capped = subsample(10, 1, 4);
        assert_eq!(capped.iter().flatten().count(), 4);
        assert_eq!(capped[4], None);
    }

    #[test]
    fn missing_mesh_fails_fast() {
        let builder = MeshAdjacencyBuilder::<f32> { mesh: None, transform: Transform::identity() };
        assert_eq!(
            builder.build(&BuildConfig::new()).unwrap_err(),
            PhysicsError::MissingGeometry("source mesh")
        );
    }
}
