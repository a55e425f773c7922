//! SSE lane kernels for 128-bit `__m128` registers.
//!
//! Each kernel reproduces the reference lane loop exactly. The hardware
//! `_mm_min_ps`/`_mm_max_ps` instructions are not used because they return the
//! second operand whenever either lane is NaN, which disagrees with the
//! NaN-aware contract.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Lanewise `isnan(a)`, as an all-bits mask.
#[inline(always)]
unsafe fn _mm_isnan_ps(a: __m128) -> __m128 {
    _mm_cmpunord_ps(a, a)
}

/// Lanewise `mask ? then : else`.
#[inline(always)]
unsafe fn _mm_select_ps(mask: __m128, then: __m128, otherwise: __m128) -> __m128 {
    _mm_or_ps(_mm_and_ps(mask, then), _mm_andnot_ps(mask, otherwise))
}

/// NaN-aware minimum: `b` where `b < a` or `a` is NaN, otherwise `a`.
///
/// # Special Values
///
/// | a     | b     | Output |
/// |-------|-------|--------|
/// | NaN   | 5     | 5      |
/// | 5     | NaN   | 5      |
/// | -0.0  | +0.0  | -0.0   |
/// | +0.0  | -0.0  | +0.0   |
///
/// # Safety
///
/// Requires SSE, which the build script only selects when the target enables it.
#[inline(always)]
pub unsafe fn _mm_min_nan_ps(a: __m128, b: __m128) -> __m128 {
    let take_b = _mm_or_ps(_mm_cmplt_ps(b, a), _mm_isnan_ps(a));
    _mm_select_ps(take_b, b, a)
}

/// NaN-aware maximum: `b` where `a < b` or `a` is NaN, otherwise `a`.
///
/// # Safety
///
/// Requires SSE.
#[inline(always)]
pub unsafe fn _mm_max_nan_ps(a: __m128, b: __m128) -> __m128 {
    let take_b = _mm_or_ps(_mm_cmplt_ps(a, b), _mm_isnan_ps(a));
    _mm_select_ps(take_b, b, a)
}
