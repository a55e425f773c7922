//! Singular values of the linear part of a [`Mat2D`].
//!
//! The scale factors of `M = [[a, c], [b, d]]` are the square roots of the
//! eigenvalues of the symmetric matrix
//!
//! ```text
//! S = MᵀM = | a² + b²    ac + bd |
//!           | ac + bd    c² + d² |
//! ```
//!
//! solved in closed form. Translation never affects the result.
//!
//! ```rust
//! use vgmath::Mat2D;
//!
//! let m = Mat2D::from_scale(2.0, 4.0);
//! assert_eq!(m.find_max_scale(), 4.0);
//! assert_eq!(m.find_min_scale(), 2.0);
//! assert_eq!(m.min_max_scales(), Some([2.0, 4.0]));
//! ```

use rayon::prelude::*;

use crate::math::EPSILON;
use crate::mat2d::Mat2D;
use crate::simd::{dot, load2f};

/// Which singular values to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleQuery {
    Min,
    Max,
    Both,
}

/// Eigenvalues of `MᵀM` as `[min, max]`. Lanes not requested by `query` are
/// left at zero.
#[inline]
fn scale_eigenvalues(m: &Mat2D, query: ScaleQuery) -> [f32; 2] {
    let v = m.values();
    let col0 = load2f(&v[0..2]);
    let col1 = load2f(&v[2..4]);

    let s00 = dot(col0, col0);
    let s01 = dot(col0, col1);
    let s11 = dot(col1, col1);

    if s01 * s01 <= EPSILON * EPSILON {
        // Columns are orthogonal.
        let (lo, hi) = if s00 < s11 { (s00, s11) } else { (s11, s00) };
        return match query {
            ScaleQuery::Min => [lo, 0.0],
            ScaleQuery::Max => [0.0, hi],
            ScaleQuery::Both => [lo, hi],
        };
    }

    let half_trace = (s00 + s11) * 0.5;
    let diff = s00 - s11;
    let x = (diff * diff + 4.0 * s01 * s01).sqrt() * 0.5;

    match query {
        ScaleQuery::Min => [half_trace - x, 0.0],
        ScaleQuery::Max => [0.0, half_trace + x],
        ScaleQuery::Both => [half_trace - x, half_trace + x],
    }
}

/// `sqrt(max(eigenvalue, 0))`. Rounding can push the eigenvalue of a
/// near-singular matrix slightly negative.
#[inline]
fn eigenvalue_to_scale(eigenvalue: f32) -> f32 {
    eigenvalue.max(0.0).sqrt()
}

impl Mat2D {
    /// Largest factor by which this matrix stretches any unit vector.
    ///
    /// Returns `0` if the computation overflows or meets NaN.
    pub fn find_max_scale(&self) -> f32 {
        let [_, max] = scale_eigenvalues(self, ScaleQuery::Max);
        if !max.is_finite() {
            tracing::trace!(matrix = ?self.values(), "max scale is not finite");
            return 0.0;
        }
        eigenvalue_to_scale(max)
    }

    /// Smallest factor by which this matrix stretches any unit vector.
    ///
    /// Returns `0` for singular matrices and when the computation overflows.
    pub fn find_min_scale(&self) -> f32 {
        let [min, _] = scale_eigenvalues(self, ScaleQuery::Min);
        if !min.is_finite() {
            tracing::trace!(matrix = ?self.values(), "min scale is not finite");
            return 0.0;
        }
        eigenvalue_to_scale(min)
    }

    /// `[min, max]` scale factors, or `None` if either is not finite.
    pub fn min_max_scales(&self) -> Option<[f32; 2]> {
        let [min, max] = scale_eigenvalues(self, ScaleQuery::Both);
        if !(min.is_finite() && max.is_finite()) {
            tracing::trace!(matrix = ?self.values(), "scales are not finite");
            return None;
        }
        Some([eigenvalue_to_scale(min), eigenvalue_to_scale(max)])
    }
}

/// Batch [`Mat2D::find_max_scale`].
pub trait MaxScale {
    fn max_scales(self) -> Vec<f32>;
    fn par_max_scales(self) -> Vec<f32>;
}

impl MaxScale for &[Mat2D] {
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.len()))]
    fn max_scales(self) -> Vec<f32> {
        self.iter().map(Mat2D::find_max_scale).collect()
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = self.len()))]
    fn par_max_scales(self) -> Vec<f32> {
        self.par_iter().map(Mat2D::find_max_scale).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    #[test]
    fn test_identity() {
        let m = Mat2D::identity();
        assert_eq!(m.find_max_scale(), 1.0);
        assert_eq!(m.find_min_scale(), 1.0);
        assert_eq!(m.min_max_scales(), Some([1.0, 1.0]));
    }

    #[test]
    fn test_non_uniform_scale() {
        let m = Mat2D::from_scale(2.0, 4.0);
        assert_eq!(m.find_max_scale(), 4.0);
        assert_eq!(m.find_min_scale(), 2.0);
    }

    #[test]
    fn test_negative_scale_is_unsigned() {
        let m = Mat2D::from_scale(-3.0, 0.5);
        assert_eq!(m.min_max_scales(), Some([0.5, 3.0]));
    }

    #[test]
    fn test_translation_ignored() {
        let m = Mat2D::new(0.0, 3.0, 6.0, 0.0, f32::NAN, f32::INFINITY);
        assert_eq!(m.find_max_scale(), 6.0);
        assert_eq!(m.find_min_scale(), 3.0);
    }

    #[test]
    fn test_rotated_scale() {
        let m = Mat2D::from_scale(0.25, 0.5) * Mat2D::from_rotation(PI / 2.0);
        assert_eq!(m.find_max_scale(), 0.5);
        assert_eq!(m.find_min_scale(), 0.25);
    }

    #[test]
    fn test_sheared_matrix_uses_general_path() {
        // [[1, 1], [0, 1]] has singular values golden ratio and its inverse.
        let m = Mat2D::new(1.0, 0.0, 1.0, 1.0, 0.0, 0.0);
        let phi = (1.0 + 5.0f32.sqrt()) / 2.0;
        let [min, max] = m.min_max_scales().unwrap();
        assert!((max - phi).abs() < 1e-5, "max = {max}");
        assert!((min - 1.0 / phi).abs() < 1e-5, "min = {min}");
    }

    #[test]
    fn test_overflow_reports_zero() {
        let m = Mat2D::new(1e30, 1e30, 1e30, 1e30, 0.0, 0.0);
        assert_eq!(m.find_max_scale(), 0.0);
        assert_eq!(m.find_min_scale(), 0.0);
        assert_eq!(m.min_max_scales(), None);
    }

    #[test]
    fn test_singular_min_is_zero() {
        let m = Mat2D::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
        assert_eq!(m.find_min_scale(), 0.0);
        assert!((m.find_max_scale() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_batch_matches_single() {
        let mats = [
            Mat2D::identity(),
            Mat2D::from_scale(2.0, 4.0),
            Mat2D::new(1e30, 1e30, 1e30, 1e30, 0.0, 0.0),
            Mat2D::from_rotation(1.0),
        ];
        let expected: Vec<f32> = mats.iter().map(Mat2D::find_max_scale).collect();
        assert_eq!(mats.as_slice().max_scales(), expected);
        assert_eq!(mats.as_slice().par_max_scales(), expected);

        let empty: &[Mat2D] = &[];
        assert!(empty.max_scales().is_empty());
    }
}
