//! Scalar type abstraction so bodies can run in `f32` or `f64`.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point scalar. Transcendentals go through `libm`, so no `std` is needed.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn is_finite(self) -> bool;
    /// Lossy conversion used for literal constants.
    fn from_f32(v: f32) -> Self;
    /// Lattice index to coordinate.
    fn from_usize(v: usize) -> Self;
    /// Truncating conversion to a lattice count. Negative and NaN map to 0.
    fn to_usize(self) -> usize;

    fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// Finite and strictly greater than zero.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

macro_rules! impl_float {
    ($t:ty, $sqrt:ident, $sin:ident, $cos:ident, $abs:ident, $floor:ident) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn half() -> Self { 0.5 }
            fn two() -> Self { 2.0 }
            fn sqrt(self) -> Self { libm::$sqrt(self) }
            fn sin(self) -> Self { libm::$sin(self) }
            fn cos(self) -> Self { libm::$cos(self) }
            fn abs(self) -> Self { libm::$abs(self) }
            fn floor(self) -> Self { libm::$floor(self) }
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
            fn from_f32(v: f32) -> Self { v as $t }
            fn from_usize(v: usize) -> Self { v as $t }
            // `as` saturates and maps NaN to 0.
            fn to_usize(self) -> usize { self as usize }
        }
    };
}

impl_float!(f32, sqrtf, sinf, cosf, fabsf, floorf);
impl_float!(f64, sqrt, sin, cos, fabs, floor);
