//! Copying simulated surface positions back into a render mesh.

use crate::float::Float;
use crate::vec::Vec3;
use crate::network::{Network, SurfaceBinding};
use crate::transform::Transform;
use crate::error::PhysicsError;
use alloc::vec::Vec as AllocVec;

/// Receiver of synced vertex data, typically a renderer's mesh.
pub trait MeshSink<F: Float> {
    /// Replace the vertex buffer. Called once per tick with the full buffer.
    fn write_vertices(&mut self, vertices: &[Vec3<F>]);

    /// Recompute normals after the vertices changed.
    fn recompute_normals(&mut self);
}

/// Owns a local-space copy of the source mesh's vertices and refreshes the
/// bound slots from the network.
///
/// Vertices no particle is bound to keep their original position.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshSync<F: Float> {
    transform: Transform<F>,
    rest: AllocVec<Vec3<F>>,
    vertices: AllocVec<Vec3<F>>,
    bindings: AllocVec<SurfaceBinding>,
}

impl<F: Float> MeshSync<F> {
    /// `source_vertices` are the local-space vertices the network was built from.
    pub fn new(
        source_vertices: &[Vec3<F>],
        transform: Transform<F>,
        network: &Network<F>,
    ) -> Result<Self, PhysicsError> {
        transform.validate()?;
        check_bindings(network.surface(), source_vertices.len())?;
        Ok(MeshSync {
            transform,
            rest: source_vertices.to_vec(),
            vertices: source_vertices.to_vec(),
            bindings: network.surface().to_vec(),
        })
    }

    /// Adopt the bindings of a rebuilt network and restore every vertex to its
    /// source position.
    pub fn rebind(&mut self, network: &Network<F>) -> Result<(), PhysicsError> {
        check_bindings(network.surface(), self.rest.len())?;
        self.bindings = network.surface().to_vec();
        self.vertices.copy_from_slice(&self.rest);
        Ok(())
    }

    /// Current local-space vertex buffer.
    pub fn vertices(&self) -> &[Vec3<F>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Refresh the buffer from `network`, hand it to `sink` in one write, then
    /// request normals once.
    pub fn sync<S: MeshSink<F> + ?Sized>(&mut self, network: &Network<F>, sink: &mut S) {
        let particles = network.particles();
        for b in &self.bindings {
            self.vertices[b.vertex] = self.transform.inverse_transform_point(particles[b.particle].pos);
        }
        sink.write_vertices(&self.vertices);
        sink.recompute_normals();
    }
}

fn check_bindings(bindings: &[SurfaceBinding], count: usize) -> Result<(), PhysicsError> {
    for b in bindings {
        if b.vertex >= count {
            return Err(PhysicsError::VertexOutOfBounds { index: b.vertex, count });
        }
    }
    Ok(())
}
