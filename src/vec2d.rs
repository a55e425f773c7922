use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::simd::{self, Float2};

/// A 2D point or direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2D {
    pub x: f32,
    pub y: f32,
}

impl Vec2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. A zero vector has no direction and
    /// yields NaN lanes.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        simd::dot(Float2::from(self), Float2::from(rhs))
    }

    /// `self.x * rhs.y - self.y * rhs.x`.
    #[inline]
    pub fn cross(self, rhs: Self) -> f32 {
        simd::cross(Float2::from(self), Float2::from(rhs))
    }
}

impl From<Float2> for Vec2D {
    #[inline]
    fn from(v: Float2) -> Self {
        Self::new(v.x(), v.y())
    }
}

impl From<Vec2D> for Float2 {
    #[inline]
    fn from(v: Vec2D) -> Self {
        Float2::new(v.x, v.y)
    }
}

macro_rules! impl_vec_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl $op for Vec2D {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Float2::from(self).$method(Float2::from(rhs)).into()
            }
        }

        impl $assign for Vec2D {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_vec_op!(Add, add, AddAssign, add_assign);
impl_vec_op!(Sub, sub, SubAssign, sub_assign);

impl Mul<f32> for Vec2D {
    type Output = Self;

    #[inline]
    fn mul(self, s: f32) -> Self {
        (Float2::from(self) * Float2::splat(s)).into()
    }
}

impl MulAssign<f32> for Vec2D {
    #[inline]
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl Div<f32> for Vec2D {
    type Output = Self;

    #[inline]
    fn div(self, s: f32) -> Self {
        (Float2::from(self) / Float2::splat(s)).into()
    }
}

impl Neg for Vec2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
