//! 2D vector type and the positional seam shared by points and particles.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector for planar motion.
///
/// The arithmetic operators return new vectors; the `*Assign` operators and
/// the `add_to`/`subtract_from`/`multiply_by`/`divide_by` methods mutate in
/// place. Division by zero follows IEEE-754 and is not guarded.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vector2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vector2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vector2 { x: F::zero(), y: F::zero() } }

    /// Vector with the given direction (radians) and length.
    pub fn from_polar(angle: F, length: F) -> Self {
        Vector2 { x: angle.cos() * length, y: angle.sin() * length }
    }

    /// Direction of the vector, `atan2(y, x)`.
    pub fn angle(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// Rotate to `angle` while keeping the current length.
    pub fn set_angle(&mut self, angle: F) {
        let length = self.length();
        self.x = angle.cos() * length;
        self.y = angle.sin() * length;
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Rescale to `length` while keeping the current direction.
    ///
    /// A zero vector has angle 0, so it is stretched along +x.
    pub fn set_length(&mut self, length: F) {
        let angle = self.angle();
        self.x = angle.cos() * length;
        self.y = angle.sin() * length;
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (other - self).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (other - self).length_sq()
    }

    /// Direction from `self` toward `other`.
    pub fn angle_to(self, other: Self) -> F {
        (other - self).angle()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self / len
        }
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    pub fn add(self, other: Self) -> Self { self + other }
    pub fn subtract(self, other: Self) -> Self { self - other }
    pub fn multiply(self, value: F) -> Self { self * value }
    pub fn divide(self, value: F) -> Self { self / value }

    pub fn add_to(&mut self, other: Self) { *self += other; }
    pub fn subtract_from(&mut self, other: Self) { *self -= other; }
    pub fn multiply_by(&mut self, value: F) { *self *= value; }
    pub fn divide_by(&mut self, value: F) { *self /= value; }
}

impl<F: Float> Add for Vector2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vector2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vector2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vector2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Mul<F> for Vector2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vector2 { x: self.x * s, y: self.y * s } }
}

impl<F: Float> Div<F> for Vector2<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vector2 { x: self.x / s, y: self.y / s } }
}

impl<F: Float> Neg for Vector2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vector2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vector2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<F: Float> SubAssign for Vector2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

impl<F: Float> MulAssign<F> for Vector2<F> {
    fn mul_assign(&mut self, s: F) {
        self.x = self.x * s;
        self.y = self.y * s;
    }
}

impl<F: Float> DivAssign<F> for Vector2<F> {
    fn div_assign(&mut self, s: F) {
        self.x = self.x / s;
        self.y = self.y / s;
    }
}

/// Anything with a writable 2D position: plain points, particles.
///
/// Tween drivers write through this trait.
pub trait Positioned<F: Float> {
    fn position(&self) -> Vector2<F>;
    fn set_position(&mut self, position: Vector2<F>);
}

impl<F: Float> Positioned<F> for Vector2<F> {
    fn position(&self) -> Vector2<F> { *self }
    fn set_position(&mut self, position: Vector2<F>) { *self = position; }
}
