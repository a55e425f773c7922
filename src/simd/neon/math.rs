//! ARM NEON lane kernels for 128-bit `float32x4_t` registers.
//!
//! `vminq_f32`/`vmaxq_f32` propagate NaN and `vminnmq_f32` orders `-0.0`
//! below `+0.0`, so neither matches the reference lane loop. The kernels below
//! build the selection mask from comparisons instead.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Lanewise `isnan(a)`, as an all-bits mask.
#[inline(always)]
unsafe fn visnanq_f32(a: float32x4_t) -> uint32x4_t {
    vmvnq_u32(vceqq_f32(a, a))
}

/// NaN-aware minimum: `b` where `b < a` or `a` is NaN, otherwise `a`.
///
/// # Safety
///
/// Requires NEON, which the build script only selects when the target enables it.
#[inline(always)]
pub unsafe fn vminq_nan_f32(a: float32x4_t, b: float32x4_t) -> float32x4_t {
    let take_b = vorrq_u32(vcltq_f32(b, a), visnanq_f32(a));
    vbslq_f32(take_b, b, a)
}

/// NaN-aware maximum: `b` where `a < b` or `a` is NaN, otherwise `a`.
///
/// # Safety
///
/// Requires NEON.
#[inline(always)]
pub unsafe fn vmaxq_nan_f32(a: float32x4_t, b: float32x4_t) -> float32x4_t {
    let take_b = vorrq_u32(vcltq_f32(a, b), visnanq_f32(a));
    vbslq_f32(take_b, b, a)
}
