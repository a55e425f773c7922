//! SIMD128 lane kernels.
//!
//! `f32x4_min`/`f32x4_max` propagate NaN and `f32x4_pmin`/`f32x4_pmax` keep the
//! first operand when the second is NaN only, so the NaN-aware kernels select
//! with `v128_bitselect` the same way the reference lane loop does.

#[cfg(target_arch = "wasm32")]
use std::arch::wasm32::*;

/// NaN-aware minimum: `b` where `b < a` or `a` is NaN, otherwise `a`.
#[inline(always)]
#[allow(unused_unsafe)]
pub fn f32x4_min_nan(a: v128, b: v128) -> v128 {
    // SAFETY: simd128 is enabled for this target.
    unsafe {
        let take_b = v128_or(f32x4_lt(b, a), f32x4_ne(a, a));
        v128_bitselect(b, a, take_b)
    }
}

/// NaN-aware maximum: `b` where `a < b` or `a` is NaN, otherwise `a`.
#[inline(always)]
#[allow(unused_unsafe)]
pub fn f32x4_max_nan(a: v128, b: v128) -> v128 {
    // SAFETY: simd128 is enabled for this target.
    unsafe {
        let take_b = v128_or(f32x4_lt(a, b), f32x4_ne(a, a));
        v128_bitselect(b, a, take_b)
    }
}
