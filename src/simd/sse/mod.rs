//! SSE backend for x86 and x86_64.
//!
//! SSE is part of the x86_64 baseline, so this backend is selected on almost
//! every x86 build. It accelerates the 2- and 4-lane `f32` kernels using
//! 128-bit `__m128` registers; 2-lane inputs are zero-padded to 4 lanes.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::Backend;

pub mod math;

use math::{_mm_max_nan_ps, _mm_min_nan_ps};

/// 128-bit SSE kernels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sse;

#[inline(always)]
fn load(x: [f32; 4]) -> __m128 {
    // SAFETY: `x` holds four f32 values and `_mm_loadu_ps` has no alignment
    // requirement. SSE is enabled for this target.
    unsafe { _mm_loadu_ps(x.as_ptr()) }
}

#[inline(always)]
fn store(v: __m128) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    // SAFETY: `out` has room for four f32 values.
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), v) };
    out
}

impl Backend for Sse {
    const NAME: &'static str = "sse";

    #[inline(always)]
    fn sqrt4(x: [f32; 4]) -> [f32; 4] {
        store(unsafe { _mm_sqrt_ps(load(x)) })
    }

    #[inline(always)]
    fn min4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        store(unsafe { _mm_min_nan_ps(load(a), load(b)) })
    }

    #[inline(always)]
    fn max4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        store(unsafe { _mm_max_nan_ps(load(a), load(b)) })
    }
}
