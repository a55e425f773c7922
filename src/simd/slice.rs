//! Batch lane kernels over `f32` slices.
//!
//! Each operation comes in three flavors, matching what callers pick by input
//! size:
//!
//! - `scalar_*`: a plain iterator over the reference lane function
//! - `simd_*`: 4-lane [`Float4`] blocks with a zero-padded partial tail
//! - `par_simd_*`: the SIMD loop split across rayon workers in large chunks
//!
//! All three return bit-identical results for the same input.
//!
//! ```rust
//! use vgmath::simd::{SimdClamp, SimdSqrt};
//!
//! let data = vec![4.0f32, 9.0, f32::NAN, -1.0, 16.0];
//! let roots = data.as_slice().simd_sqrt();
//! assert_eq!(roots[1], 3.0);
//!
//! let clamped = data.as_slice().simd_clamp(0.0, 10.0);
//! assert_eq!(clamped, vec![4.0, 9.0, 0.0, 0.0, 10.0]);
//! ```

use rayon::prelude::*;

use crate::error::{length_error, Result};
use crate::simd::{
    gvec::{Float4, GVec},
    math::{abs, clamp, fast_acos, sqrt},
    memory::{load, load_partial, store},
    traits::{Backend, SimdAbs, SimdClamp, SimdFastAcos, SimdSqrt},
    Active,
};

/// Lanes per SIMD block.
pub const LANE_COUNT: usize = 4;

/// Inputs at or below this length skip rayon entirely.
pub const PARALLEL_SIMD_THRESHOLD: usize = 16_384;

/// Elements handed to each rayon task. A multiple of [`LANE_COUNT`].
pub const PARALLEL_CHUNK_SIZE: usize = LANE_COUNT * 4_096;

/// Runs `f` over `a` in 4-lane blocks, writing into `c`.
#[inline(always)]
fn simd_map_into(a: &[f32], c: &mut [f32], f: impl Fn(Float4) -> Float4) {
    debug_assert_eq!(a.len(), c.len(), "Vectors must be the same length");

    let mut src = a.chunks_exact(LANE_COUNT);
    let mut dst = c.chunks_exact_mut(LANE_COUNT);

    for (a_block, c_block) in (&mut src).zip(&mut dst) {
        store(c_block, f(load(a_block)));
    }

    // Remaining lanes are zero-padded; the padded results are discarded.
    let a_tail = src.remainder();
    if !a_tail.is_empty() {
        let c_tail = dst.into_remainder();
        let out: Float4 = f(load_partial(a_tail));
        c_tail.copy_from_slice(&out.0[..c_tail.len()]);
    }
}

#[inline(always)]
fn simd_map(a: &[f32], f: impl Fn(Float4) -> Float4) -> Vec<f32> {
    let mut c = vec![0.0f32; a.len()];
    simd_map_into(a, &mut c, f);
    c
}

#[tracing::instrument(level = "trace", skip_all, fields(len = a.len(), backend = Active::NAME))]
fn par_simd_map(a: &[f32], f: impl Fn(Float4) -> Float4 + Sync + Send) -> Vec<f32> {
    // For small arrays, threading overhead dominates
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        return simd_map(a, f);
    }

    let mut c = vec![0.0f32; a.len()];

    c.par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(c_chunk, a_chunk)| simd_map_into(a_chunk, c_chunk, &f));

    c
}

/// Clamps `a` into `out` using the NaN-aware [`clamp`] contract.
///
/// Returns a length error if `out` and `a` differ in length.
pub fn clamp_into(a: &[f32], out: &mut [f32], lo: f32, hi: f32) -> Result<()> {
    if a.len() != out.len() {
        return Err(length_error(
            a.len(),
            out.len(),
            "output buffer must match input length",
        ));
    }

    let (lo, hi) = (GVec::splat(lo), GVec::splat(hi));
    simd_map_into(a, out, |x| clamp(x, lo, hi));
    Ok(())
}

#[inline(always)]
fn scalar_lane(x: f32, f: impl Fn(GVec<f32, 1>) -> GVec<f32, 1>) -> f32 {
    f(GVec([x])).0[0]
}

impl SimdSqrt<&[f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_sqrt(self) -> Self::Output {
        simd_map(self, sqrt)
    }

    #[inline(always)]
    fn par_simd_sqrt(self) -> Self::Output {
        par_simd_map(self, sqrt)
    }

    #[inline(always)]
    fn scalar_sqrt(self) -> Self::Output {
        self.iter().map(|x| x.sqrt()).collect()
    }
}

impl SimdAbs<&[f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_abs(self) -> Self::Output {
        simd_map(self, abs)
    }

    #[inline(always)]
    fn par_simd_abs(self) -> Self::Output {
        par_simd_map(self, abs)
    }

    #[inline(always)]
    fn scalar_abs(self) -> Self::Output {
        self.iter().map(|&x| scalar_lane(x, abs)).collect()
    }
}

impl SimdFastAcos<&[f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_fast_acos(self) -> Self::Output {
        simd_map(self, fast_acos)
    }

    #[inline(always)]
    fn par_simd_fast_acos(self) -> Self::Output {
        par_simd_map(self, fast_acos)
    }

    #[inline(always)]
    fn scalar_fast_acos(self) -> Self::Output {
        self.iter().map(|&x| scalar_lane(x, fast_acos)).collect()
    }
}

impl SimdClamp<&[f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_clamp(self, lo: f32, hi: f32) -> Self::Output {
        let (lo, hi) = (GVec::splat(lo), GVec::splat(hi));
        simd_map(self, |x| clamp(x, lo, hi))
    }

    #[inline(always)]
    fn par_simd_clamp(self, lo: f32, hi: f32) -> Self::Output {
        let (lo, hi) = (GVec::splat(lo), GVec::splat(hi));
        par_simd_map(self, move |x| clamp(x, lo, hi))
    }

    #[inline(always)]
    fn scalar_clamp(self, lo: f32, hi: f32) -> Self::Output {
        let (lo, hi) = (GVec::splat(lo), GVec::splat(hi));
        self.iter()
            .map(|&x| scalar_lane(x, |x| clamp(x, lo, hi)))
            .collect()
    }
}
