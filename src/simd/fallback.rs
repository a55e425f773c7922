//! Portable reference backend.
//!
//! These lane loops define the observable behavior of every vector operation.
//! Accelerated backends are validated against them bit for bit.

use crate::simd::traits::{Backend, Lane};

/// `b[i]` where `b[i] < a[i]` or `a[i]` is NaN, otherwise `a[i]`.
#[inline(always)]
pub(crate) fn min_lanes<T: Lane, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| {
        if b[i] < a[i] || a[i].lane_is_nan() {
            b[i]
        } else {
            a[i]
        }
    })
}

/// `b[i]` where `a[i] < b[i]` or `a[i]` is NaN, otherwise `a[i]`.
#[inline(always)]
pub(crate) fn max_lanes<T: Lane, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    std::array::from_fn(|i| {
        if a[i] < b[i] || a[i].lane_is_nan() {
            b[i]
        } else {
            a[i]
        }
    })
}

#[inline(always)]
pub(crate) fn sqrt_lanes<const N: usize>(x: [f32; N]) -> [f32; N] {
    x.map(f32::sqrt)
}

/// Scalar loops with no intrinsics. Always compiled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallback;

impl Backend for Fallback {
    const NAME: &'static str = "fallback";

    #[inline(always)]
    fn sqrt4(x: [f32; 4]) -> [f32; 4] {
        sqrt_lanes(x)
    }

    #[inline(always)]
    fn sqrt2(x: [f32; 2]) -> [f32; 2] {
        sqrt_lanes(x)
    }

    #[inline(always)]
    fn min4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        min_lanes(a, b)
    }

    #[inline(always)]
    fn max4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        max_lanes(a, b)
    }

    #[inline(always)]
    fn min2(a: [f32; 2], b: [f32; 2]) -> [f32; 2] {
        min_lanes(a, b)
    }

    #[inline(always)]
    fn max2(a: [f32; 2], b: [f32; 2]) -> [f32; 2] {
        max_lanes(a, b)
    }
}
