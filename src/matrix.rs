//! # Dense real matrices with checked dimensions
//!
//! Minimal matrix type used as the linear-algebra substrate of the coordinate
//! converters. Storage and arithmetic are delegated to [`nalgebra::DMatrix`];
//! this wrapper adds the **hard dimension contract** the converters rely on:
//! row/column counts are fixed at construction and every binary operation
//! validates operand shapes, failing with [`MinsepError::MatrixDimension`]
//! instead of silently truncating or padding.
//!
//! A dimension error is a logic bug in the caller, never a retryable
//! condition.

use nalgebra::DMatrix;

use crate::minsep_errors::MinsepError;

/// Dense rows×cols matrix of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    inner: DMatrix<f64>,
}

impl Matrix {
    /// Create an all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            inner: DMatrix::zeros(rows, cols),
        }
    }

    /// Create a matrix from row-major values.
    ///
    /// Arguments
    /// -----------------
    /// * `rows`, `cols`: shape of the matrix, fixed for its whole lifetime.
    /// * `values`: row-major cell values; length must be exactly `rows * cols`.
    ///
    /// Return
    /// ----------
    /// * The matrix, or [`MinsepError::MatrixDimension`] if the value count
    ///   does not match the requested shape.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, MinsepError> {
        if values.len() != rows * cols {
            return Err(MinsepError::MatrixDimension(format!(
                "expected {} values for a {rows}x{cols} matrix, got {}",
                rows * cols,
                values.len()
            )));
        }
        Ok(Matrix {
            inner: DMatrix::from_row_slice(rows, cols, &values),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.inner.ncols()
    }

    /// Value at row `r`, column `c`.
    ///
    /// Panics on out-of-range indices, like any slice access.
    pub fn at(&self, r: usize, c: usize) -> f64 {
        self.inner[(r, c)]
    }

    /// New matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        Matrix {
            inner: self.inner.transpose(),
        }
    }

    /// Matrix product `self · other`.
    ///
    /// Fails with [`MinsepError::MatrixDimension`] unless
    /// `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MinsepError> {
        if self.cols() != other.rows() {
            return Err(MinsepError::MatrixDimension(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        Ok(Matrix {
            inner: &self.inner * &other.inner,
        })
    }

    /// Elementwise sum.
    ///
    /// Fails with [`MinsepError::MatrixDimension`] unless both shapes match exactly.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MinsepError> {
        self.check_same_shape(other, "add")?;
        Ok(Matrix {
            inner: &self.inner + &other.inner,
        })
    }

    /// Elementwise difference.
    ///
    /// Fails with [`MinsepError::MatrixDimension`] unless both shapes match exactly.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MinsepError> {
        self.check_same_shape(other, "subtract")?;
        Ok(Matrix {
            inner: &self.inner - &other.inner,
        })
    }

    fn check_same_shape(&self, other: &Matrix, op: &str) -> Result<(), MinsepError> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(MinsepError::MatrixDimension(format!(
                "cannot {op} {}x{} and {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        Ok(())
    }
}

/// Infallible 3×3 construction, used for the direction-cosine frames.
impl From<[[f64; 3]; 3]> for Matrix {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Matrix {
            inner: DMatrix::from_row_slice(3, 3, &flat),
        }
    }
}

/// Infallible 3×1 column construction, used for translation vectors and points.
impl From<[f64; 3]> for Matrix {
    fn from(column: [f64; 3]) -> Self {
        Matrix {
            inner: DMatrix::from_column_slice(3, 1, &column),
        }
    }
}
