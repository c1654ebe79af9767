//! Error types for network construction and simulation setup.

use core::fmt;

/// Errors that can occur while building or configuring a mass-spring body.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Spring stiffness must be positive and finite.
    InvalidStiffness,
    /// Interior point spacing must be positive and finite.
    InvalidSpacing,
    /// Neighbour tolerance factor must be positive and finite.
    InvalidTolerance,
    /// Vertex stride must be at least 1.
    InvalidStride,
    /// Damping outside its admissible range.
    InvalidDamping,
    /// Verlet solver needs at least one relaxation iteration.
    InvalidIterations,
    /// Restitution must be finite and non-negative.
    InvalidRestitution,
    /// Gravity and ground height must be finite.
    NonFiniteParameter(&'static str),
    /// Shape dimensions (side length, radius) must be positive and finite.
    InvalidDimension(&'static str),
    /// Transform scale components must be non-zero and finite.
    InvalidTransform,
    /// A builder was asked to run without its source geometry.
    MissingGeometry(&'static str),
    /// Triangle index list length is not a multiple of three.
    MalformedIndexBuffer { len: usize },
    /// A triangle references a vertex that does not exist.
    VertexOutOfBounds { index: usize, count: usize },
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A spring connects a particle to itself.
    SelfSpring { index: usize },
    /// Two springs share the same unordered endpoint pair.
    DuplicateSpring { a: usize, b: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be positive and finite"),
            PhysicsError::InvalidSpacing => write!(f, "internal point spacing must be positive and finite"),
            PhysicsError::InvalidTolerance => write!(f, "tolerance factor must be positive and finite"),
            PhysicsError::InvalidStride => write!(f, "vertex stride must be at least 1"),
            PhysicsError::InvalidDamping => write!(f, "damping out of range"),
            PhysicsError::InvalidIterations => write!(f, "solver iterations must be at least 1"),
            PhysicsError::InvalidRestitution => write!(f, "restitution must be finite and non-negative"),
            PhysicsError::NonFiniteParameter(name) => write!(f, "{} must be finite", name),
            PhysicsError::InvalidDimension(name) => write!(f, "{} must be positive and finite", name),
            PhysicsError::InvalidTransform => write!(f, "transform scale must be non-zero and finite"),
            PhysicsError::MissingGeometry(what) => write!(f, "missing source geometry: {}", what),
            PhysicsError::MalformedIndexBuffer { len } => {
                write!(f, "triangle index buffer length {} is not a multiple of 3", len)
            }
            PhysicsError::VertexOutOfBounds { index, count } => {
                write!(f, "vertex index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SelfSpring { index } => {
                write!(f, "spring connects particle {} to itself", index)
            }
            PhysicsError::DuplicateSpring { a, b } => {
                write!(f, "duplicate spring between particles {} and {}", a, b)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhysicsError {}
