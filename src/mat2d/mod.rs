//! 2x3 affine matrices.
//!
//! A [`Mat2D`] stores `[a, b, c, d, tx, ty]` and maps a point `(x, y)` to
//!
//! ```text
//! x' = a·x + c·y + tx
//! y' = b·x + d·y + ty
//! ```
//!
//! Scale analysis of the linear part lives in [`scale`].

use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::vec2d::Vec2D;

pub mod scale;

pub use scale::{MaxScale, ScaleQuery};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2D([f32; 6]);

impl Mat2D {
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self([a, b, c, d, tx, ty])
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Counter-clockwise rotation by `radians`.
    #[inline]
    pub fn from_rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    #[inline]
    pub const fn values(&self) -> &[f32; 6] {
        &self.0
    }

    #[inline]
    pub fn xx(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn xy(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn yx(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn yy(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn tx(&self) -> f32 {
        self.0[4]
    }

    #[inline]
    pub fn ty(&self) -> f32 {
        self.0[5]
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d, _, _] = self.0;
        a * d - b * c
    }

    /// Inverse transform, or `None` when the matrix is singular or the
    /// inverse does not fit in `f32`.
    pub fn invert(&self) -> Option<Self> {
        let [a, b, c, d, tx, ty] = self.0;
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let inv = 1.0 / det;
        let result = Self::new(
            d * inv,
            -b * inv,
            -c * inv,
            a * inv,
            (c * ty - d * tx) * inv,
            (b * tx - a * ty) * inv,
        );

        result.0.iter().all(|v| v.is_finite()).then_some(result)
    }

    #[inline]
    pub fn map_point(&self, p: Vec2D) -> Vec2D {
        self.map_vector(p) + Vec2D::new(self.tx(), self.ty())
    }

    /// Applies the linear part only.
    #[inline]
    pub fn map_vector(&self, v: Vec2D) -> Vec2D {
        let [a, b, c, d, _, _] = self.0;
        Vec2D::new(a * v.x + c * v.y, b * v.x + d * v.y)
    }
}

impl Default for Mat2D {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 6]> for Mat2D {
    #[inline]
    fn from(values: [f32; 6]) -> Self {
        Self(values)
    }
}

impl Index<usize> for Mat2D {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Mat2D {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.0[index]
    }
}

/// `A * B` maps through `B` first, then `A`.
impl Mul for Mat2D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.0;
        let [b0, b1, b2, b3, b4, b5] = rhs.0;
        Self::new(
            a0 * b0 + a2 * b1,
            a1 * b0 + a3 * b1,
            a0 * b2 + a2 * b3,
            a1 * b2 + a3 * b3,
            a0 * b4 + a2 * b5 + a4,
            a1 * b4 + a3 * b5 + a5,
        )
    }
}

impl MulAssign for Mat2D {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec2D> for Mat2D {
    type Output = Vec2D;

    #[inline]
    fn mul(self, p: Vec2D) -> Vec2D {
        self.map_point(p)
    }
}
