//! Rigid placement of a body: translation, rotation and per-axis scale.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use crate::error::PhysicsError;

/// Unit quaternion rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quat<F> {
    pub fn identity() -> Self {
        Quat { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() }
    }

    /// Rotation of `angle` radians around `axis`. A zero axis gives the identity.
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let axis = axis.normalize();
        if axis == Vec3::zero() {
            return Self::identity();
        }
        let half = angle * F::half();
        let s = half.sin();
        Quat { x: axis.x * s, y: axis.y * s, z: axis.z * s, w: half.cos() }
    }

    pub fn conjugate(self) -> Self {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    /// Rotate a vector: `v + 2w(q × v) + 2 q × (q × v)`.
    pub fn rotate(self, v: Vec3<F>) -> Vec3<F> {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = q.cross(v).scale(F::two());
        v + t.scale(self.w) + q.cross(t)
    }
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Maps points between a body's local space and world space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform<F: Float> {
    pub translation: Vec3<F>,
    pub rotation: Quat<F>,
    pub scale: Vec3<F>,
}

impl<F: Float> Transform<F> {
    pub fn identity() -> Self {
        Transform {
            translation: Vec3::zero(),
            rotation: Quat::identity(),
            scale: Vec3::splat(F::one()),
        }
    }

    pub fn from_translation(translation: Vec3<F>) -> Self {
        Transform { translation, ..Self::identity() }
    }

    pub fn with_rotation(mut self, rotation: Quat<F>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3<F>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_uniform_scale(self, scale: F) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    /// A transform is invertible when no scale component is zero.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let s = self.scale;
        if !s.is_finite() || s.x == F::zero() || s.y == F::zero() || s.z == F::zero() {
            return Err(PhysicsError::InvalidTransform);
        }
        if !self.translation.is_finite() {
            return Err(PhysicsError::NonFiniteParameter("translation"));
        }
        Ok(())
    }

    /// Local space to world space: scale, then rotate, then translate.
    pub fn transform_point(&self, local: Vec3<F>) -> Vec3<F> {
        self.rotation.rotate(local.component_mul(self.scale)) + self.translation
    }

    /// World space to local space.
    pub fn inverse_transform_point(&self, world: Vec3<F>) -> Vec3<F> {
        let unrotated = self.rotation.conjugate().rotate(world - self.translation);
        let inv_scale = Vec3::new(
            F::one() / self.scale.x,
            F::one() / self.scale.y,
            F::one() / self.scale.z,
        );
        unrotated.component_mul(inv_scale)
    }
}

impl<F: Float> Default for Transform<F> {
    fn default() -> Self {
        Self::identity()
    }
}
