//! Dense linear algebra backed by `nalgebra`.
//!
//! The rest of the crate works on `ndarray` arrays; matrices are copied into
//! `DMatrix` only for the operations ndarray does not provide (inverse,
//! determinant, singular values).

use crate::Matrix;
use crate::error::{LearnError, Result};
use nalgebra::DMatrix;

pub fn to_dmatrix(a: &Matrix) -> DMatrix<f64> {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[(i, j)])
}

pub fn from_dmatrix(m: &DMatrix<f64>) -> Matrix {
    Matrix::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

fn ensure_square(a: &Matrix) -> Result<usize> {
    if a.nrows() != a.ncols() {
        return Err(LearnError::InvalidDimension(format!(
            "expected a square matrix, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }
    if a.nrows() == 0 {
        return Err(LearnError::InvalidDimension(
            "expected a non-empty matrix".to_string(),
        ));
    }
    Ok(a.nrows())
}

/// Numerical rank test: the smallest singular value must exceed
/// `n * eps * sigma_max`.
fn ensure_full_rank(m: &DMatrix<f64>) -> Result<()> {
    let order = m.nrows();
    let singular_values = m.singular_values();
    let sigma_max = singular_values.iter().cloned().fold(0.0_f64, f64::max);
    let sigma_min = singular_values.iter().cloned().fold(f64::INFINITY, f64::min);
    let tolerance = order as f64 * f64::EPSILON * sigma_max;

    if !sigma_max.is_finite() || !(sigma_min > tolerance) {
        return Err(LearnError::SingularMatrix { order });
    }
    Ok(())
}

fn lu_inverse(m: DMatrix<f64>, order: usize) -> Result<Matrix> {
    let inv = m
        .try_inverse()
        .ok_or(LearnError::SingularMatrix { order })?;
    if inv.iter().any(|v| !v.is_finite()) {
        return Err(LearnError::SingularMatrix { order });
    }
    Ok(from_dmatrix(&inv))
}

pub fn inverse(a: &Matrix) -> Result<Matrix> {
    let order = ensure_square(a)?;
    let m = to_dmatrix(a);
    ensure_full_rank(&m)?;
    lu_inverse(m, order)
}

/// Inverse of a matrix known to be positive definite, such as `XᵀX + λI`
/// with `λ > 0`.
///
/// Skips the rank test: a small ridge term next to a large `‖XᵀX‖` would
/// fail it even though the matrix is invertible. Only an exactly zero pivot
/// or a non-finite result is reported as singular.
pub fn inverse_regularized(a: &Matrix) -> Result<Matrix> {
    let order = ensure_square(a)?;
    lu_inverse(to_dmatrix(a), order)
}

pub fn determinant(a: &Matrix) -> Result<f64> {
    ensure_square(a)?;
    Ok(to_dmatrix(a).determinant())
}

/// Inverse and determinant of a covariance matrix.
///
/// The determinant must be strictly positive for the Gaussian density
/// normalizer to exist.
pub fn inverse_and_determinant(a: &Matrix) -> Result<(Matrix, f64)> {
    let order = ensure_square(a)?;
    let det = determinant(a)?;
    if !(det > 0.0) || !det.is_finite() {
        return Err(LearnError::SingularMatrix { order });
    }
    Ok((inverse(a)?, det))
}
