//! ARM NEON backend for AArch64.
//!
//! NEON is mandatory on AArch64 (Apple Silicon, AWS Graviton, modern Android
//! and iOS devices), so this backend is selected for every AArch64 build that
//! does not force the fallback. 2-lane kernels use the 64-bit `float32x2_t`
//! forms directly where one exists.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::traits::Backend;

pub mod math;

use math::{vmaxq_nan_f32, vminq_nan_f32};

/// 128-bit NEON kernels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neon;

#[inline(always)]
fn load(x: [f32; 4]) -> float32x4_t {
    // SAFETY: `x` holds four f32 values; `vld1q_f32` needs only f32 alignment.
    unsafe { vld1q_f32(x.as_ptr()) }
}

#[inline(always)]
fn store(v: float32x4_t) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    // SAFETY: `out` has room for four f32 values.
    unsafe { vst1q_f32(out.as_mut_ptr(), v) };
    out
}

impl Backend for Neon {
    const NAME: &'static str = "neon";

    #[inline(always)]
    fn sqrt4(x: [f32; 4]) -> [f32; 4] {
        store(unsafe { vsqrtq_f32(load(x)) })
    }

    #[inline(always)]
    fn sqrt2(x: [f32; 2]) -> [f32; 2] {
        let mut out = [0.0f32; 2];
        // SAFETY: both buffers hold two f32 values.
        unsafe { vst1_f32(out.as_mut_ptr(), vsqrt_f32(vld1_f32(x.as_ptr()))) };
        out
    }

    #[inline(always)]
    fn min4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        store(unsafe { vminq_nan_f32(load(a), load(b)) })
    }

    #[inline(always)]
    fn max4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        store(unsafe { vmaxq_nan_f32(load(a), load(b)) })
    }
}
