//! Mass-spring soft bodies.
//!
//! `softmass` simulates deformable bodies as point masses joined by springs.
//! A builder turns a shape or a mesh into a particle/spring [`Network`]; a
//! [`SoftBody`] then advances that network one tick at a time with one of two
//! integrators, and can push the deformed surface back into a render mesh.
//!
//! # Features
//!
//! - **Builders**: explicit cube topology, volumetric sampling of a sphere,
//!   and reduction of a triangle mesh to its (subsampled) edge graph
//! - **Semi-implicit Euler**: Hooke springs, velocity damping, bouncing ground
//! - **Verlet**: implicit velocity with Gauss-Seidel spring relaxation
//! - **Mesh sync**: surface particles written back to a vertex buffer once per tick
//! - **Deterministic**: fixed iteration order, no randomness
//! - **Observable**: monitor ticks via the `StepObserver` trait, builds via `log`
//! - **`no_std` compatible**: needs only `alloc`

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod vec;
pub mod transform;
pub mod particle;
pub mod spring;
pub mod network;
pub mod mesh;
pub mod config;
pub mod builder;
pub mod cube;
pub mod volume;
pub mod adjacency;
pub mod ground;
pub mod integrator;
pub mod euler;
pub mod verlet;
pub mod sync;
pub mod softbody;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec3};
pub use transform::{Quat, Transform};
pub use particle::Particle;
pub use spring::Spring;
pub use network::{Network, SurfaceBinding};
pub use mesh::TriangleMesh;
pub use config::{BuildConfig, SimulationConfig};
pub use builder::NetworkBuilder;
pub use cube::CubeBuilder;
pub use volume::VolumetricSampler;
pub use adjacency::MeshAdjacencyBuilder;
pub use ground::GroundPlane;
pub use integrator::{Integrator, IntegratorKind};
pub use euler::EulerIntegrator;
pub use verlet::VerletIntegrator;
pub use sync::{MeshSink, MeshSync};
pub use softbody::SoftBody;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
