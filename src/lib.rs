//! Scale analysis for 2D affine transforms, built on a small portable SIMD
//! lane library.
//!
//! - [`Mat2D`] / [`Vec2D`]: affine matrix and vector types, with
//!   [`Mat2D::find_max_scale`] and friends.
//! - [`simd`]: fixed-width [`GVec`](simd::GVec) lanes with NaN-aware
//!   min/max/clamp, `fast_acos`, memory helpers and batch slice kernels.
//! - [`math`]: scalar constants and tolerance helpers.
//! - [`error`]: errors returned by the fallible marshaling helpers.

pub mod error;
pub mod mat2d;
pub mod math;
pub mod simd;
pub mod vec2d;

pub use error::{Result, VgmathError};
pub use mat2d::{Mat2D, MaxScale, ScaleQuery};
pub use vec2d::Vec2D;
