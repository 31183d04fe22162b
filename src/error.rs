//! Error types for matrix operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matrix operations.
///
/// Provides detailed context about failures including invalid shapes,
/// dimension mismatches, non-square operands, singular matrices, and
/// out-of-range element access.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrixError;
///
/// let err = MatrixError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Requested shape cannot back a valid matrix (one dimension zero
    /// while the other is not).
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Operand shapes are incompatible for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Determinant, cofactor matrix, or inverse requested on a non-square
    /// matrix.
    NotSquare {
        /// Row count of the operand
        rows: usize,
        /// Column count of the operand
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value
        det: f64,
    },

    /// Element access beyond the current shape.
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Current row count
        rows: usize,
        /// Current column count
        cols: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => {
                write!(f, "Invalid matrix dimensions: {rows}x{cols}")
            }
            MatrixError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {rows}x{cols}")
            }
            MatrixError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of range for {rows}x{cols} matrix"
                )
            }
        }
    }
}

impl std::error::Error for MatrixError {}

impl MatrixError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = MatrixError::InvalidDimension { rows: 0, cols: 5 };
        let msg = err.to_string();
        assert!(msg.contains("Invalid matrix dimensions"));
        assert!(msg.contains("0x5"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrixError::DimensionMismatch {
            expected: "2x3".to_string(),
            actual: "3x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("2x3"));
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_not_square_display() {
        let err = MatrixError::NotSquare { rows: 2, cols: 4 };
        let msg = err.to_string();
        assert!(msg.contains("not square"));
        assert!(msg.contains("2x4"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = MatrixError::SingularMatrix { det: 0.0 };
        let msg = err.to_string();
        assert!(msg.contains("Singular matrix"));
        assert!(msg.contains("cannot invert"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = MatrixError::IndexOutOfRange {
            row: 3,
            col: 1,
            rows: 2,
            cols: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("(3, 1)"));
        assert!(msg.contains("2x2"));
    }

    #[test]
    fn test_shape_mismatch_helper() {
        let err = MatrixError::shape_mismatch((2, 3), (4, 5));
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                expected: "2x3".to_string(),
                actual: "4x5".to_string(),
            }
        );
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrixError::NotSquare { rows: 1, cols: 2 };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotSquare"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<MatrixError>();
        assert_sync::<MatrixError>();
    }
}
