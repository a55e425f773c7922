//! Portable fixed-width SIMD lanes.
//!
//! [`GVec<T, N>`](GVec) is the vector type; free functions in [`math`] and
//! [`memory`] operate on it. The `f32` kernels that benefit from hardware
//! support (square root, NaN-aware min and max) dispatch through [`Active`],
//! a [`Backend`] picked once at build time:
//!
//! | target                          | backend      |
//! |---------------------------------|--------------|
//! | x86 / x86_64 with SSE           | [`sse::Sse`] |
//! | aarch64 with NEON               | `neon::Neon` |
//! | wasm32 with `+simd128`          | `wasm::WasmSimd` |
//! | anything else, or forced        | [`Fallback`] |
//!
//! Building with the `force-fallback` feature or with `VGMATH_BACKEND=fallback`
//! in the environment pins the portable backend on every target.
//!
//! All backends agree bit for bit, so the choice only affects speed.

pub mod fallback;
pub mod gvec;
mod lanes;
pub mod math;
pub mod memory;
pub mod slice;
pub mod traits;

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"))]
pub mod sse;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub mod wasm;

pub use fallback::Fallback;
pub use gvec::{Float2, Float4, GVec, Int2, Int4, Mask, UInt2, UInt4, FALSE, TRUE};
pub use math::{
    abs, all, any, ceil, clamp, cross, dot, fast_acos, floor, if_then_else, isnan, max, min, mix,
    mix_lanes, sqrt, FAST_ACOS_MAX_ERROR,
};
pub use memory::{
    join, load, load2f, load2i, load2ui, load4f, load4i, load4ui, load_partial, store,
    store_partial, try_load, try_store,
};
pub use slice::clamp_into;
pub use traits::{Backend, IntLane, Lane, SimdAbs, SimdClamp, SimdFastAcos, SimdSqrt};

/// Backend selected for this build.
#[cfg(sse)]
pub type Active = sse::Sse;

#[cfg(neon)]
pub type Active = neon::Neon;

#[cfg(wasm_simd)]
pub type Active = wasm::WasmSimd;

#[cfg(fallback)]
pub type Active = Fallback;

/// Name of the backend selected for this build: `"sse"`, `"neon"`,
/// `"wasm_simd"` or `"fallback"`.
#[inline]
pub fn active_backend() -> &'static str {
    Active::NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_backend_name() {
        let name = active_backend();
        assert!(
            ["sse", "neon", "wasm_simd", "fallback"].contains(&name),
            "unexpected backend name {name}"
        );

        #[cfg(feature = "force-fallback")]
        assert_eq!(name, "fallback");
    }
}
