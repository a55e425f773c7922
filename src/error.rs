//! Error types for vgmath operations.
//!
//! The lane math and scale analysis are total and never fail. Errors only come
//! from the marshaling helpers that move data between slices and vectors, where
//! a caller can hand in a buffer of the wrong length.

use std::fmt;

/// Errors that can occur when moving data in and out of vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VgmathError {
    /// A slice was shorter (or longer) than the operation requires.
    LengthError {
        /// The number of elements the operation needed.
        expected: usize,
        /// The number of elements that were provided.
        actual: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for VgmathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VgmathError::LengthError {
                expected,
                actual,
                message,
            } => write!(
                f,
                "Invalid length: {} (expected {} elements, got {})",
                message, expected, actual
            ),
            VgmathError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for VgmathError {}

/// Result type alias for vgmath operations.
pub type Result<T> = std::result::Result<T, VgmathError>;

/// Creates a length error.
pub fn length_error(expected: usize, actual: usize, message: impl Into<String>) -> VgmathError {
    VgmathError::LengthError {
        expected,
        actual,
        message: message.into(),
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> VgmathError {
    VgmathError::ValidationError {
        message: message.into(),
    }
}
