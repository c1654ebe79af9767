//! Indexed triangle meshes: source geometry for the builders and a ready-made
//! target for mesh sync.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::error::PhysicsError;
use crate::sync::MeshSink;
use alloc::vec::Vec as AllocVec;

/// Vertices in local space plus triangles indexing into them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleMesh<F: Float> {
    vertices: AllocVec<Vec3<F>>,
    normals: AllocVec<Vec3<F>>,
    triangles: AllocVec<[usize; 3]>,
}

impl<F: Float> TriangleMesh<F> {
    /// Build a mesh from a flat index list `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub fn from_indices(vertices: AllocVec<Vec3<F>>, indices: &[u32]) -> Result<Self, PhysicsError> {
        if indices.len() % 3 != 0 {
            return Err(PhysicsError::MalformedIndexBuffer { len: indices.len() });
        }
        let triangles = indices
            .chunks_exact(3)
            .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
            .collect();
        Self::new(vertices, triangles)
    }

    pub fn new(vertices: AllocVec<Vec3<F>>, triangles: AllocVec<[usize; 3]>) -> Result<Self, PhysicsError> {
        let count = vertices.len();
        for tri in &triangles {
            for &index in tri {
                if index >= count {
                    return Err(PhysicsError::VertexOutOfBounds { index, count });
                }
            }
        }
        let mut mesh = TriangleMesh {
            normals: alloc::vec![Vec3::zero(); count],
            vertices,
            triangles,
        };
        mesh.recompute_normals();
        Ok(mesh)
    }

    pub fn vertices(&self) -> &[Vec3<F>] { &self.vertices }
    pub fn normals(&self) -> &[Vec3<F>] { &self.normals }
    pub fn triangles(&self) -> &[[usize; 3]] { &self.triangles }
    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn triangle_count(&self) -> usize { self.triangles.len() }
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    pub fn triangle(&self, t: usize) -> [usize; 3] {
        self.triangles[t]
    }

    /// Area-weighted vertex normals. Vertices touched by no triangle, or only
    /// by degenerate ones, get a zero normal.
    pub fn recompute_normals(&mut self) {
        for n in self.normals.iter_mut() {
            *n = Vec3::zero();
        }
        for &[a, b, c] in &self.triangles {
            let e1 = self.vertices[b] - self.vertices[a];
            let e2 = self.vertices[c] - self.vertices[a];
            // Magnitude is twice the triangle area.
            let face = e1.cross(e2);
            self.normals[a] = self.normals[a] + face;
            self.normals[b] = self.normals[b] + face;
            self.normals[c] = self.normals[c] + face;
        }
        for n in self.normals.iter_mut() {
            *n = n.normalize();
        }
    }
}

impl<F: Float> MeshSink<F> for TriangleMesh<F> {
    fn write_vertices(&mut self, vertices: &[Vec3<F>]) {
        let n = self.vertices.len().min(vertices.len());
        self.vertices[..n].copy_from_slice(&vertices[..n]);
    }

    fn recompute_normals(&mut self) {
        TriangleMesh::recompute_normals(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn quad() -> TriangleMesh<f32> {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        TriangleMesh::from_indices(vertices, &[0, 2, 1, 0, 3, 2]).unwrap()
    }

    #[test]
    fn flat_quad_normals_point_up() {
        let mesh = quad();
        for n in mesh.normals() {
            assert!((n.y - 1.0).abs() < 1e-6, "normal = {:?}", n);
        }
    }

    #[test]
    fn flat_indices_grouped_into_triangles() {
        let mesh = quad();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(0), [0, 2, 1]);
        assert_eq!(mesh.triangle(1), [0, 3, 2]);
        assert_eq!(mesh.triangles().len(), mesh.triangle_count());
    }

    #[test]
    fn rejects_ragged_index_buffer() {
        let err = TriangleMesh::<f32>::from_indices(vec![Vec3::zero(); 3], &[0, 1]).unwrap_err();
        assert_eq!(err, PhysicsError::MalformedIndexBuffer { len: 2 });
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let err = TriangleMesh::<f32>::from_indices(vec![Vec3::zero(); 3], &[0, 1, 3]).unwrap_err();
        assert_eq!(err, PhysicsError::VertexOutOfBounds { index: 3, count: 3 });
    }

    #[test]
    fn sink_writes_and_refreshes_normals() {
        let mut mesh = quad();
        let flipped: AllocVec<_> = mesh.vertices().iter().map(|v| Vec3::new(v.x, v.z, 0.0)).collect();
        MeshSink::write_vertices(&mut mesh, &flipped);
        MeshSink::recompute_normals(&mut mesh);
        assert_eq!(mesh.vertices()[2], Vec3::new(1.0, 1.0, 0.0));
        assert!((mesh.normals()[0].z.abs() - 1.0).abs() < 1e-6);
    }
}
