//! Lanewise math over [`GVec`].
//!
//! All functions are total: every input, including NaN and infinity lanes,
//! produces a defined result. `f32` vectors of width 2 and 4 route `sqrt`,
//! `min`, `max` (and therefore `clamp`) through the build-selected
//! [`Backend`](crate::simd::traits::Backend); everything else uses the
//! reference lane loops.

use crate::simd::{
    fallback,
    gvec::{GVec, Mask, FALSE, TRUE},
    lanes::cast_width,
    traits::{Backend, Lane},
    Active,
};

////// Boolean logic //////

/// Returns true if any lane of `x` is non-zero.
#[inline(always)]
pub fn any<const N: usize>(x: Mask<N>) -> bool {
    x.0.iter().any(|&lane| lane != FALSE)
}

/// Returns true if every lane of `x` is all bits set.
///
/// Computed as `!any(!x)`, so a lane holding a non-canonical truthy value such
/// as `1` counts as false.
#[inline(always)]
pub fn all<const N: usize>(x: Mask<N>) -> bool {
    !any(!x)
}

/// Lanewise NaN test (`x != x`). Always false for integer lanes.
#[inline(always)]
pub fn isnan<T: Lane, const N: usize>(x: GVec<T, N>) -> Mask<N> {
    GVec(x.0.map(|lane| if lane.lane_is_nan() { TRUE } else { FALSE }))
}

////// Math //////

/// Elementwise ternary expression: `cond ? then : otherwise` for each lane.
///
/// Only the selected lane is read, so a NaN in the other operand never leaks.
#[inline(always)]
pub fn if_then_else<T: Lane, const N: usize>(
    cond: Mask<N>,
    then: GVec<T, N>,
    otherwise: GVec<T, N>,
) -> GVec<T, N> {
    GVec(std::array::from_fn(|i| {
        if cond.0[i] != FALSE {
            then.0[i]
        } else {
            otherwise.0[i]
        }
    }))
}

/// Similar to `f32::min`, with one noteworthy difference: if `a[i]` is NaN and
/// `b[i]` is not, returns `b[i]`; if `b[i]` is NaN and `a[i]` is not, returns
/// `a[i]`.
#[inline(always)]
pub fn min<T: Lane, const N: usize>(a: GVec<T, N>, b: GVec<T, N>) -> GVec<T, N> {
    GVec(T::min_lanes(a.0, b.0))
}

/// Similar to `f32::max`. If exactly one of `a[i]`, `b[i]` is NaN, returns the
/// other one.
#[inline(always)]
pub fn max<T: Lane, const N: usize>(a: GVec<T, N>, b: GVec<T, N>) -> GVec<T, N> {
    GVec(T::max_lanes(a.0, b.0))
}

/// Unlike `f32::clamp`, always returns a value between `lo` and `hi`:
///
///   Returns `lo` if `x` is NaN (`f32::clamp` returns NaN).
///   Returns `hi` if `hi <= lo`.
///   Ignores `hi` and/or `lo` if they are NaN.
#[inline(always)]
pub fn clamp<T: Lane, const N: usize>(
    x: GVec<T, N>,
    lo: GVec<T, N>,
    hi: GVec<T, N>,
) -> GVec<T, N> {
    min(max(lo, x), hi)
}

/// Absolute value of each lane.
///
/// Float lanes clear the sign bit, so `abs(-0.0) == +0.0`. An `i32` lane equal
/// to `i32::MIN` is returned unchanged.
#[inline(always)]
pub fn abs<T: Lane, const N: usize>(x: GVec<T, N>) -> GVec<T, N> {
    x.map(T::lane_abs)
}

////// Floating point functions //////

#[inline(always)]
pub fn floor<const N: usize>(x: GVec<f32, N>) -> GVec<f32, N> {
    x.map(f32::floor)
}

#[inline(always)]
pub fn ceil<const N: usize>(x: GVec<f32, N>) -> GVec<f32, N> {
    x.map(f32::ceil)
}

/// IEEE compliant square root.
#[inline(always)]
pub fn sqrt<const N: usize>(x: GVec<f32, N>) -> GVec<f32, N> {
    GVec(match N {
        4 => cast_width(Active::sqrt4(cast_width(x.0))),
        2 => cast_width(Active::sqrt2(cast_width(x.0))),
        _ => fallback::sqrt_lanes(x.0),
    })
}

/// Nominal maximum error of [`fast_acos`] over `[-1, 1]`, in radians (0.96
/// degrees). The measured peak near `|x| = 0.9993` is about 0.1% higher.
pub const FAST_ACOS_MAX_ERROR: f32 = 0.0167552;

/// Approximates `acos(x)` within [`FAST_ACOS_MAX_ERROR`] using the rational
/// polynomial
///
/// ```text
/// acos(x) ~= (b·x³ + a·x) / (d·x⁴ + c·x² + 1) + π/2
/// ```
///
/// Accuracy is undefined outside `[-1, 1]`; clamp first.
#[inline(always)]
#[allow(clippy::excessive_precision)]
pub fn fast_acos<const N: usize>(x: GVec<f32, N>) -> GVec<f32, N> {
    const A: f32 = -0.939115566365855;
    const B: f32 = 0.9217841528914573;
    const C: f32 = -1.2845906244690837;
    const D: f32 = 0.295624144969963174;
    const PI_OVER_2: f32 = std::f32::consts::FRAC_PI_2;

    let xx = x * x;
    let numer = GVec::splat(B) * xx + GVec::splat(A);
    let denom = xx * (GVec::splat(D) * xx + GVec::splat(C)) + GVec::splat(1.0);
    x * (numer / denom) + GVec::splat(PI_OVER_2)
}

////// Basic linear algebra //////

/// Sum of lane products, accumulated from lane 0 upwards.
#[inline(always)]
pub fn dot<T: Lane, const N: usize>(a: GVec<T, N>, b: GVec<T, N>) -> T {
    let d = a * b;
    d.0[1..].iter().fold(d.0[0], |sum, &lane| sum.lane_add(lane))
}

/// Scalar cross product `a.x * b.y - a.y * b.x`.
#[inline(always)]
pub fn cross(a: GVec<f32, 2>, b: GVec<f32, 2>) -> f32 {
    let c = a * b.yx();
    c.x() - c.y()
}

/// Linearly interpolates between `a` and `b`.
///
/// NOTE: `mix(a, b, 1.0)` is not guaranteed to equal `b`.
///
/// `(b - a) * t + a` loses the exact endpoint at `t == 1`, but holds up better
/// than `a * (1 - t) + b * t` for things like chopping cubics on exact cusp
/// points. Callers that need the endpoint should special-case it.
#[inline(always)]
pub fn mix<const N: usize>(a: GVec<f32, N>, b: GVec<f32, N>, t: f32) -> GVec<f32, N> {
    debug_assert!((0.0..=1.0).contains(&t), "mix: t = {t} outside [0, 1]");
    (b - a) * GVec::splat(t) + a
}

/// [`mix`] with a separate `t` per lane.
#[inline(always)]
pub fn mix_lanes<const N: usize>(
    a: GVec<f32, N>,
    b: GVec<f32, N>,
    t: GVec<f32, N>,
) -> GVec<f32, N> {
    debug_assert!(
        t.0.iter().all(|t| (0.0..=1.0).contains(t)),
        "mix_lanes: t = {t:?} outside [0, 1]"
    );
    (b - a) * t + a
}
