use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::simd::fallback;

/// Scalar element type of a [`GVec`](crate::simd::GVec).
///
/// Arithmetic on integer lanes wraps, matching the behavior of hardware vector
/// registers rather than Rust's debug-mode overflow checks.
pub trait Lane:
    num::Num + num::Bounded + Copy + Default + PartialOrd + Debug + Send + Sync + 'static
{
    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;

    /// Integer division by zero yields zero instead of trapping.
    fn lane_div(self, rhs: Self) -> Self;
    fn lane_neg(self) -> Self;

    /// Absolute value. Floats clear the sign bit; `i32::MIN` maps to itself.
    fn lane_abs(self) -> Self;

    /// Integers are never NaN.
    #[inline(always)]
    fn lane_is_nan(self) -> bool {
        false
    }

    /// NaN-aware elementwise minimum. Lane types with an accelerated backend
    /// override this to route widths the backend supports.
    #[inline(always)]
    fn min_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        fallback::min_lanes(a, b)
    }

    /// NaN-aware elementwise maximum.
    #[inline(always)]
    fn max_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        fallback::max_lanes(a, b)
    }
}

/// Lanes that support bitwise logic. Boolean masks are vectors of `i32`.
pub trait IntLane:
    Lane + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self> + Not<Output = Self>
{
}

/// One implementation of the accelerated `f32` lane kernels.
///
/// Every backend must produce results that are bit-for-bit identical to
/// [`Fallback`](crate::simd::fallback::Fallback), including for NaN, signed
/// zero and infinity lanes. The backend used by the crate is chosen at build
/// time and exported as [`Active`](crate::simd::Active).
pub trait Backend {
    /// Name reported by [`active_backend`](crate::simd::active_backend).
    const NAME: &'static str;

    fn sqrt4(x: [f32; 4]) -> [f32; 4];

    #[inline(always)]
    fn sqrt2(x: [f32; 2]) -> [f32; 2] {
        let r = Self::sqrt4([x[0], x[1], 0.0, 0.0]);
        [r[0], r[1]]
    }

    /// `b` where `b < a` or `a` is NaN, otherwise `a`.
    fn min4(a: [f32; 4], b: [f32; 4]) -> [f32; 4];

    /// `b` where `a < b` or `a` is NaN, otherwise `a`.
    fn max4(a: [f32; 4], b: [f32; 4]) -> [f32; 4];

    #[inline(always)]
    fn min2(a: [f32; 2], b: [f32; 2]) -> [f32; 2] {
        let r = Self::min4([a[0], a[1], 0.0, 0.0], [b[0], b[1], 0.0, 0.0]);
        [r[0], r[1]]
    }

    #[inline(always)]
    fn max2(a: [f32; 2], b: [f32; 2]) -> [f32; 2] {
        let r = Self::max4([a[0], a[1], 0.0, 0.0], [b[0], b[1], 0.0, 0.0]);
        [r[0], r[1]]
    }
}

/// Batch square root over `f32` slices.
pub trait SimdSqrt<Rhs = Self> {
    type Output;

    fn simd_sqrt(self) -> Self::Output;
    fn par_simd_sqrt(self) -> Self::Output;
    fn scalar_sqrt(self) -> Self::Output;
}

/// Batch absolute value over `f32` slices.
pub trait SimdAbs<Rhs = Self> {
    type Output;

    fn simd_abs(self) -> Self::Output;
    fn par_simd_abs(self) -> Self::Output;
    fn scalar_abs(self) -> Self::Output;
}

/// Batch [`fast_acos`](crate::simd::fast_acos) over `f32` slices.
pub trait SimdFastAcos<Rhs = Self> {
    type Output;

    fn simd_fast_acos(self) -> Self::Output;
    fn par_simd_fast_acos(self) -> Self::Output;
    fn scalar_fast_acos(self) -> Self::Output;
}

/// Batch NaN-aware [`clamp`](crate::simd::clamp) over `f32` slices.
pub trait SimdClamp<Rhs = Self> {
    type Output;

    fn simd_clamp(self, lo: f32, hi: f32) -> Self::Output;
    fn par_simd_clamp(self, lo: f32, hi: f32) -> Self::Output;
    fn scalar_clamp(self, lo: f32, hi: f32) -> Self::Output;
}
