//! Scalar trait shared by the vector, particle and easing math.

use core::cmp::PartialOrd;
use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

/// The scalar operations particles and easing curves need.
///
/// Implemented for `f32` and `f64`. Transcendentals go through `libm`, so
/// nothing here needs `std`.
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
    + Debug
    + Display
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    fn pi() -> Self;

    /// Lossless for `f32`; rounds to nearest for narrower types.
    fn from_f32(v: f32) -> Self;
    /// Curve constants pass through here so `f64` math keeps every digit.
    fn from_f64(v: f64) -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn asin(self) -> Self;
    fn abs(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Quadrant-aware arctangent of `y / x`.
    fn atan2(y: Self, x: Self) -> Self;
    /// Euclidean norm of `(x, y)` without intermediate overflow.
    fn hypot(x: Self, y: Self) -> Self;
    fn powf(self, exp: Self) -> Self;
    /// `2^self`.
    fn exp2(self) -> Self;
    /// Nearest integer, halves away from zero.
    fn round(self) -> Self;
    fn is_finite(self) -> bool;

    /// `|self| < epsilon`
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn from_f32(v: f32) -> Self { v }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn asin(self) -> Self { libm::asinf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { libm::fminf(self, other) }
    fn max(self, other: Self) -> Self { libm::fmaxf(self, other) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
    fn hypot(x: Self, y: Self) -> Self { libm::hypotf(x, y) }
    fn powf(self, exp: Self) -> Self { libm::powf(self, exp) }
    fn exp2(self) -> Self { libm::exp2f(self) }
    fn round(self) -> Self { libm::roundf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_f64(v: f64) -> Self { v }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn asin(self) -> Self { libm::asin(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { libm::fmin(self, other) }
    fn max(self, other: Self) -> Self { libm::fmax(self, other) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
    fn hypot(x: Self, y: Self) -> Self { libm::hypot(x, y) }
    fn powf(self, exp: Self) -> Self { libm::pow(self, exp) }
    fn exp2(self) -> Self { libm::exp2(self) }
    fn round(self) -> Self { libm::round(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
