//! Loading and storing vectors from contiguous buffers.
//!
//! Slices only need the natural alignment of their scalar type; nothing here
//! assumes an over-aligned buffer.

use crate::error::{length_error, validation_error, Result};
use crate::simd::{gvec::GVec, traits::Lane};

/// Loads the first `N` elements of `src`.
///
/// # Panics
///
/// Panics if `src` holds fewer than `N` elements. See [`try_load`].
#[inline(always)]
pub fn load<T: Lane, const N: usize>(src: &[T]) -> GVec<T, N> {
    assert!(
        src.len() >= N,
        "Slice too short for load (expected at least {N} elements, got {})",
        src.len()
    );

    GVec(std::array::from_fn(|i| src[i]))
}

/// Loads the first `N` elements of `src`, or reports a length error.
#[inline(always)]
pub fn try_load<T: Lane, const N: usize>(src: &[T]) -> Result<GVec<T, N>> {
    if src.len() < N {
        return Err(length_error(N, src.len(), "slice too short for load"));
    }

    Ok(load(src))
}

/// Loads fewer than `N` elements, filling the remaining lanes with zero.
///
/// # Panics
///
/// Panics if `src` is empty or holds `N` or more elements.
#[inline(always)]
pub fn load_partial<T: Lane, const N: usize>(src: &[T]) -> GVec<T, N> {
    assert!(!src.is_empty(), "Size can't be empty (size zero)");
    assert!(src.len() < N, "Size must be < {N}");

    GVec(std::array::from_fn(|i| src.get(i).copied().unwrap_or_else(T::zero)))
}

#[inline(always)]
pub fn load2f(src: &[f32]) -> GVec<f32, 2> {
    load(src)
}

#[inline(always)]
pub fn load4f(src: &[f32]) -> GVec<f32, 4> {
    load(src)
}

#[inline(always)]
pub fn load2i(src: &[i32]) -> GVec<i32, 2> {
    load(src)
}

#[inline(always)]
pub fn load4i(src: &[i32]) -> GVec<i32, 4> {
    load(src)
}

#[inline(always)]
pub fn load2ui(src: &[u32]) -> GVec<u32, 2> {
    load(src)
}

#[inline(always)]
pub fn load4ui(src: &[u32]) -> GVec<u32, 4> {
    load(src)
}

/// Writes all `N` lanes to the front of `dst`.
///
/// # Panics
///
/// Panics if `dst` holds fewer than `N` elements. See [`try_store`].
#[inline(always)]
pub fn store<T: Lane, const N: usize>(dst: &mut [T], vec: GVec<T, N>) {
    assert!(
        dst.len() >= N,
        "Slice too short for store (expected at least {N} elements, got {})",
        dst.len()
    );

    dst[..N].copy_from_slice(&vec.0);
}

/// Writes all `N` lanes to the front of `dst`, or reports a length error.
#[inline(always)]
pub fn try_store<T: Lane, const N: usize>(dst: &mut [T], vec: GVec<T, N>) -> Result<()> {
    if dst.len() < N {
        return Err(length_error(N, dst.len(), "slice too short for store"));
    }

    store(dst, vec);
    Ok(())
}

/// Writes the first `dst.len()` lanes of `vec`.
///
/// Returns a validation error if `dst` is empty or holds `N` or more elements.
#[inline(always)]
pub fn store_partial<T: Lane, const N: usize>(dst: &mut [T], vec: GVec<T, N>) -> Result<()> {
    if dst.is_empty() || dst.len() >= N {
        return Err(validation_error(format!(
            "partial store needs between 1 and {} elements, got {}",
            N.saturating_sub(1),
            dst.len()
        )));
    }

    let len = dst.len();
    dst.copy_from_slice(&vec.0[..len]);
    Ok(())
}

/// Concatenates `a` and `b`. `K` must equal `M + N`; a mismatch fails to
/// compile.
#[inline(always)]
pub fn join<T: Lane, const M: usize, const N: usize, const K: usize>(
    a: GVec<T, M>,
    b: GVec<T, N>,
) -> GVec<T, K> {
    const { assert!(M + N == K, "join: output width must equal M + N") };

    GVec(std::array::from_fn(|i| if i < M { a.0[i] } else { b.0[i - M] }))
}
