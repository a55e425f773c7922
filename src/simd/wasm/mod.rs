//! WebAssembly SIMD128 backend.
//!
//! Only compiled for `wasm32` targets built with `-C target-feature=+simd128`.

#[cfg(target_arch = "wasm32")]
use std::arch::wasm32::*;

use crate::simd::traits::Backend;

pub mod math;

use math::{f32x4_max_nan, f32x4_min_nan};

/// 128-bit `v128` kernels.
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmSimd;

#[inline(always)]
fn load(x: [f32; 4]) -> v128 {
    f32x4(x[0], x[1], x[2], x[3])
}

#[inline(always)]
#[allow(unused_unsafe)]
fn store(v: v128) -> [f32; 4] {
    // SAFETY: simd128 is enabled for this target.
    unsafe {
        [
            f32x4_extract_lane::<0>(v),
            f32x4_extract_lane::<1>(v),
            f32x4_extract_lane::<2>(v),
            f32x4_extract_lane::<3>(v),
        ]
    }
}

impl Backend for WasmSimd {
    const NAME: &'static str = "wasm_simd";

    #[inline(always)]
    #[allow(unused_unsafe)]
    fn sqrt4(x: [f32; 4]) -> [f32; 4] {
        store(unsafe { f32x4_sqrt(load(x)) })
    }

    #[inline(always)]
    #[allow(unused_unsafe)]
    fn min4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        store(unsafe { f32x4_min_nan(load(a), load(b)) })
    }

    #[inline(always)]
    #[allow(unused_unsafe)]
    fn max4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        store(unsafe { f32x4_max_nan(load(a), load(b)) })
    }
}
