//! Configuration for network construction and simulation.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::error::PhysicsError;

/// Parameters shared by the network builders.
///
/// # Builder Pattern
/// ```
/// use softmass::config::BuildConfig;
///
/// let config: BuildConfig<f32> = BuildConfig::new()
///     .with_stiffness(3000.0)
///     .with_spacing(0.1)
///     .with_tolerance_factor(1.1)
///     .with_vertex_stride(2)
///     .with_max_particle_count(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildConfig<F: Float> {
    /// Hooke constant assigned to every generated spring. Default: 500.
    pub stiffness: F,
    /// Mass of every generated particle. Default: 1.
    pub mass: F,
    /// Interior lattice spacing for volumetric sampling. Default: 0.2.
    pub internal_point_spacing: F,
    /// Neighbour radius is `spacing * tolerance_factor`. Default: 1.05.
    pub tolerance_factor: F,
    /// Keep every Nth source vertex. Default: 1.
    pub vertex_stride: usize,
    /// Cap on generated particles, 0 = unlimited.
    pub max_particle_count: usize,
    /// Drop springs longer than this, 0 = unlimited.
    pub max_spring_length: F,
}

impl<F: Float> BuildConfig<F> {
    pub fn new() -> Self {
        BuildConfig {
            stiffness: F::from_f32(500.0),
            mass: F::one(),
            internal_point_spacing: F::from_f32(0.2),
            tolerance_factor: F::from_f32(1.05),
            vertex_stride: 1,
            max_particle_count: 0,
            max_spring_length: F::zero(),
        }
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.internal_point_spacing = spacing;
        self
    }

    pub fn with_tolerance_factor(mut self, factor: F) -> Self {
        self.tolerance_factor = factor;
        self
    }

    pub fn with_vertex_stride(mut self, stride: usize) -> Self {
        self.vertex_stride = stride;
        self
    }

    pub fn with_max_particle_count(mut self, max: usize) -> Self {
        self.max_particle_count = max;
        self
    }

    pub fn with_max_spring_length(mut self, max: F) -> Self {
        self.max_spring_length = max;
        self
    }

    /// Reject values that would produce a degenerate or empty network.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.mass.is_positive_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        if !self.stiffness.is_positive_finite() {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !self.internal_point_spacing.is_positive_finite() {
            return Err(PhysicsError::InvalidSpacing);
        }
        if !self.tolerance_factor.is_positive_finite() {
            return Err(PhysicsError::InvalidTolerance);
        }
        if self.vertex_stride == 0 {
            return Err(PhysicsError::InvalidStride);
        }
        if !self.max_spring_length.is_finite() || self.max_spring_length < F::zero() {
            return Err(PhysicsError::InvalidDimension("max spring length"));
        }
        Ok(())
    }

    /// Neighbour search radius for volumetric sampling.
    pub fn neighbor_radius(&self) -> F {
        self.internal_point_spacing * self.tolerance_factor
    }
}

impl<F: Float> Default for BuildConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-body simulation parameters.
///
/// # Builder Pattern
/// ```
/// use softmass::config::SimulationConfig;
/// use softmass::vec::Vec3;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_solver_iterations(8)
///     .with_ground_height(-1.0)
///     .with_restitution(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig<F: Float> {
    /// Gravity acceleration. Default: (0, -9.81, 0).
    pub gravity: Vec3<F>,
    /// Euler velocity multiplier per tick, in (0, 1]. 1.0 = no damping. Default: 0.98.
    pub damping_factor: F,
    /// Verlet implicit-velocity blend, in [0, 1]. Default: 0.99.
    pub damping: F,
    /// Verlet relaxation passes per tick. Default: 5.
    pub solver_iterations: usize,
    /// Height of the ground plane. Default: 0.
    pub ground_height: F,
    /// Fraction of vertical speed kept (and inverted) on ground contact. Default: 0.5.
    pub restitution: F,
}

impl<F: Float> SimulationConfig<F> {
    pub fn new() -> Self {
        SimulationConfig {
            gravity: Vec3::new(F::zero(), F::from_f32(-9.81), F::zero()),
            damping_factor: F::from_f32(0.98),
            damping: F::from_f32(0.99),
            solver_iterations: 5,
            ground_height: F::zero(),
            restitution: F::half(),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping_factor(mut self, damping_factor: F) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_solver_iterations(mut self, iterations: usize) -> Self {
        self.solver_iterations = iterations;
        self
    }

    pub fn with_ground_height(mut self, height: F) -> Self {
        self.ground_height = height;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::NonFiniteParameter("gravity"));
        }
        if !self.ground_height.is_finite() {
            return Err(PhysicsError::NonFiniteParameter("ground height"));
        }
        if !self.damping_factor.is_positive_finite() || self.damping_factor > F::one() {
            return Err(PhysicsError::InvalidDamping);
        }
        if !self.damping.is_finite() || self.damping < F::zero() || self.damping > F::one() {
            return Err(PhysicsError::InvalidDamping);
        }
        if self.solver_iterations == 0 {
            return Err(PhysicsError::InvalidIterations);
        }
        if !self.restitution.is_finite() || self.restitution < F::zero() {
            return Err(PhysicsError::InvalidRestitution);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
