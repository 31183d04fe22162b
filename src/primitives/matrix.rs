//! Matrix type for 2D numeric data.

use crate::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};

/// Absolute tolerance used by [`Matrix::eq_matrix`] and the `==` operator.
pub const EPSILON: f64 = 1e-7;

/// A dense matrix of `f64` values (row-major storage).
///
/// Storage invariant: `rows == 0 ⇔ cols == 0 ⇔ data.is_empty()`, and
/// `data.len() == rows * cols` at all times. Each matrix exclusively owns
/// its buffer; [`Clone`] deep-copies it.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.determinant().expect("2x2 is square"), 10.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form; deserialization funnels through
/// [`Matrix::from_vec`] so the storage invariant holds for decoded values
/// too.
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// Creates the empty 0x0 matrix without allocating.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a zero-initialized matrix of the given shape.
    ///
    /// `new(0, 0)` is the empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if exactly one of `rows`
    /// and `cols` is zero, since such a shape cannot back a valid buffer.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if (rows == 0) != (cols == 0) {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a new matrix from a vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] for mixed-zero shapes and
    /// [`MatrixError::DimensionMismatch`] if the data length doesn't equal
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if (rows == 0) != (cols == 0) {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("{}x{} = {} elements", rows, cols, rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an n x n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true for the 0x0 matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn linear_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is at or
    /// beyond the current shape.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.linear_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Gets a mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is at or
    /// beyond the current shape.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let idx = self.linear_index(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Sets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is at or
    /// beyond the current shape.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.linear_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Moves the contents out, leaving the empty 0x0 matrix behind.
    ///
    /// The source stays a valid matrix after the call; further operations
    /// observe it as empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Resizes to `rows` rows, keeping the column count.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if the resulting shape
    /// would have a zero dimension.
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        self.set_size(rows, self.cols)
    }

    /// Resizes to `cols` columns, keeping the row count.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if the resulting shape
    /// would have a zero dimension.
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        self.set_size(self.rows, cols)
    }

    /// Resizes to the given shape.
    ///
    /// The overlapping top-left region keeps its values; newly introduced
    /// cells are zero-filled. On error the matrix is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `rows` or `cols` is
    /// zero.
    pub fn set_size(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        let mut data = vec![0.0; rows * cols];
        for row in 0..rows.min(self.rows) {
            for col in 0..cols.min(self.cols) {
                data[row * cols + col] = self.data[row * self.cols + col];
            }
        }
        self.data = data;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Tolerance equality: true iff shapes match and no pair of
    /// corresponding cells differs by more than [`EPSILON`] in absolute
    /// value.
    ///
    /// A NaN difference never exceeds the tolerance, so a matrix
    /// containing NaN still equals itself and equality stays reflexive.
    #[must_use]
    pub fn eq_matrix(&self, other: &Self) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data.iter().zip(other.data.iter()).all(|(a, b)| {
            let diff = (a - b).abs();
            diff <= EPSILON || diff.is_nan()
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless the shapes are
    /// identical.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrixError::shape_mismatch(self.shape(), other.shape()));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless the shapes are
    /// identical.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrixError::shape_mismatch(self.shape(), other.shape()));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    ///
    /// Non-finite scalars propagate per IEEE 754; this never fails.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Multiplies each element by a scalar in place.
    pub fn scale(&mut self, scalar: f64) {
        for x in &mut self.data {
            *x *= scalar;
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `self.cols()`
    /// equals `other.rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("{} rows", self.cols),
                actual: format!("{} rows", other.rows),
            });
        }
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = sum;
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Transposes the matrix. The 0x0 matrix transposes to itself.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Submatrix with row `skip_row` and column `skip_col` deleted.
    ///
    /// Callers guarantee `rows >= 2 && cols >= 2`.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for row in 0..self.rows {
            if row == skip_row {
                continue;
            }
            for col in 0..self.cols {
                if col == skip_col {
                    continue;
                }
                data.push(self.data[row * self.cols + col]);
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Cofactor sign for a row/column index sum: +1 even, -1 odd.
    fn cofactor_sign(k: usize) -> f64 {
        if k % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Cofactor expansion along row 0. Shape is known square here.
    fn determinant_unchecked(&self) -> f64 {
        match self.rows {
            // 0x0: empty product, reachable only through the empty matrix.
            0 => 1.0,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => (0..self.cols)
                .map(|col| {
                    Self::cofactor_sign(col)
                        * self.data[col]
                        * self.minor(0, col).determinant_unchecked()
                })
                .sum(),
        }
    }

    /// Computes the determinant by recursive cofactor expansion.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] unless `rows == cols`.
    pub fn determinant(&self) -> Result<f64> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.determinant_unchecked())
    }

    /// Computes the matrix of cofactors:
    /// `result[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] unless the matrix is square with
    /// at least two rows. A 1x1 matrix is rejected; [`Matrix::inverse`]
    /// handles that case without going through the cofactor matrix.
    pub fn cofactor_matrix(&self) -> Result<Self> {
        if self.rows != self.cols || self.rows <= 1 {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        let mut data = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                data.push(
                    Self::cofactor_sign(row + col)
                        * self.minor(row, col).determinant_unchecked(),
                );
            }
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Computes the inverse via the adjugate: transpose of the cofactor
    /// matrix scaled by the reciprocal determinant. A 1x1 matrix inverts
    /// to the reciprocal of its sole entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] unless the matrix is square, and
    /// [`MatrixError::SingularMatrix`] if the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::SingularMatrix { det });
        }
        if self.rows == 1 {
            return Self::from_vec(1, 1, vec![1.0 / self.data[0]]);
        }
        let mut result = self.cofactor_matrix()?.transpose();
        result.scale(1.0 / det);
        Ok(result)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.eq_matrix(other)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if either index is at or beyond the current shape. Use
    /// [`Matrix::get`] for a non-panicking variant.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.linear_index(row, col) {
            Ok(idx) => &self.data[idx],
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    /// # Panics
    ///
    /// Panics if either index is at or beyond the current shape. Use
    /// [`Matrix::get_mut`] for a non-panicking variant.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.linear_index(row, col) {
            Ok(idx) => &mut self.data[idx],
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Add for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics on shape mismatch; [`Matrix::add`] is the non-panicking
    /// variant.
    fn add(self, rhs: &Matrix) -> Matrix {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        &self + &rhs
    }
}

impl std::ops::Sub for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics on shape mismatch; [`Matrix::sub`] is the non-panicking
    /// variant.
    fn sub(self, rhs: &Matrix) -> Matrix {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Matrix {
        &self - &rhs
    }
}

impl std::ops::Mul for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics on incompatible shapes; [`Matrix::matmul`] is the
    /// non-panicking variant.
    fn mul(self, rhs: &Matrix) -> Matrix {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

impl std::ops::Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.mul_scalar(scalar)
    }
}

impl std::ops::Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.mul_scalar(scalar)
    }
}

impl std::ops::AddAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics on shape mismatch. Validation happens before any cell is
    /// written, so a panicking call leaves `self` unchanged.
    fn add_assign(&mut self, rhs: &Matrix) {
        *self = Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl std::ops::SubAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics on shape mismatch. Validation happens before any cell is
    /// written, so a panicking call leaves `self` unchanged.
    fn sub_assign(&mut self, rhs: &Matrix) {
        *self = Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl std::ops::MulAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics on incompatible shapes. The product is computed into a fresh
    /// buffer before replacing `self`, never accumulated in place.
    fn mul_assign(&mut self, rhs: &Matrix) {
        *self = self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl std::ops::MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale(scalar);
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_contract;
