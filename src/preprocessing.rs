use crate::error::{LearnError, Result};
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, Axis, s};

/// Prepends a column of ones so a linear model can learn an intercept.
pub fn add_intercept(x: &Matrix) -> Matrix {
    let mut augmented = Matrix::ones((x.nrows(), x.ncols() + 1));
    augmented.slice_mut(s![.., 1..]).assign(x);
    augmented
}

/// Expands a single feature column into the basis `x^0, x^1, ..., x^degree`.
///
/// Column 0 is the constant term, so the expanded matrix already carries an
/// intercept. Degree 0 gives a single column of ones.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialFeatures {
    degree: usize,
}

impl PolynomialFeatures {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn n_output_features(&self) -> usize {
        self.degree + 1
    }

    pub fn transform(&self, x: ArrayView1<f64>) -> Matrix {
        let mut xp = Matrix::ones((x.len(), self.n_output_features()));
        for j in 1..=self.degree {
            xp.column_mut(j).assign(&x.mapv(|v| v.powi(j as i32)));
        }
        xp
    }

    /// Expands column `column` of a feature matrix.
    pub fn transform_column(&self, x: &Matrix, column: usize) -> Result<Matrix> {
        if column >= x.ncols() {
            return Err(LearnError::InvalidDimension(format!(
                "column {} out of range for a matrix with {} columns",
                column,
                x.ncols()
            )));
        }
        Ok(self.transform(x.index_axis(Axis(1), column)))
    }
}

/// Convenience form of `PolynomialFeatures::new(degree).transform(x)`.
pub fn polynomial_features(x: &Vector, degree: usize) -> Matrix {
    PolynomialFeatures::new(degree).transform(x.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_add_intercept() {
        let x = array![[2.0], [3.0]];
        assert_eq!(add_intercept(&x), array![[1.0, 2.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_degree_zero_is_intercept_only() {
        let x = array![0.5, -2.0, 3.0, 0.0];
        let xp = polynomial_features(&x, 0);

        assert_eq!(xp.shape(), &[4, 1]);
        assert!(xp.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_columns_are_powers() {
        let x = array![-1.5, 0.0, 2.0, 3.0];
        let degree = 4;
        let xp = polynomial_features(&x, degree);

        assert_eq!(xp.shape(), &[4, degree + 1]);
        for j in 0..=degree {
            for i in 0..x.len() {
                let expected = x[i].powi(j as i32);
                assert!((xp[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_empty_column() {
        let x = Vector::zeros(0);
        let xp = polynomial_features(&x, 3);
        assert_eq!(xp.shape(), &[0, 4]);
    }

    #[test]
    fn test_transform_column() {
        let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let xp = PolynomialFeatures::new(2).transform_column(&x, 2).unwrap();

        assert_eq!(xp, array![[1.0, 3.0, 9.0], [1.0, 6.0, 36.0]]);
    }

    #[test]
    fn test_transform_column_out_of_range() {
        let x = array![[1.0, 2.0]];
        assert!(matches!(
            PolynomialFeatures::new(2).transform_column(&x, 2),
            Err(LearnError::InvalidDimension(_))
        ));
    }
}
