//! Points and displacements in 3D.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Vector math used by particles, springs and transforms.
///
/// Only the handful of operations the integrators need. Anything returning
/// a direction degrades to the zero vector instead of producing NaN.
pub trait Vec:
    Copy + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> + PartialEq + Default + core::fmt::Debug
{
    type Scalar: Float;

    fn zero() -> Self;
    fn splat(value: Self::Scalar) -> Self;
    fn dot(self, other: Self) -> Self::Scalar;
    fn scale(self, s: Self::Scalar) -> Self;
    fn component_mul(self, other: Self) -> Self;
    fn is_finite(self) -> bool;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction, or zero for a (near) zero vector.
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            return Self::zero();
        }
        self.scale(Self::Scalar::one() / len)
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (other - self).length()
    }

    /// Cheaper than [`distance`](Vec::distance) for radius tests.
    fn distance_sq(self, other: Self) -> Self::Scalar {
        (other - self).length_sq()
    }
}

/// Position, velocity or force. `y` points up, away from the ground plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub const fn new(x: F, y: F, z: F) -> Self {
        Vec3 { x, y, z }
    }

    pub fn up() -> Self {
        Vec3::new(F::zero(), F::one(), F::zero())
    }

    /// Right-handed cross product.
    pub fn cross(self, o: Self) -> Self {
        Vec3::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    /// Same horizontal position at a different height.
    pub fn with_height(self, height: F) -> Self {
        Vec3 { y: height, ..self }
    }

    fn zip(self, o: Self, f: impl Fn(F, F) -> F) -> Self {
        Vec3::new(f(self.x, o.x), f(self.y, o.y), f(self.z, o.z))
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;

    fn zero() -> Self {
        Self::splat(F::zero())
    }

    fn splat(value: F) -> Self {
        Vec3::new(value, value, value)
    }

    fn dot(self, o: Self) -> F {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    fn scale(self, s: F) -> Self {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    fn component_mul(self, o: Self) -> Self {
        self.zip(o, |a, b| a * b)
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
