use crate::error::{LearnError, Result, ensure_len};
use crate::linalg::{inverse, inverse_regularized};
use crate::metrics::mean_squared_error;
use crate::{Matrix, Vector};
use log::debug;

/// Predictions on held-out data and their mean squared error.
#[derive(Clone, Debug, PartialEq)]
pub struct RegressionEvaluation {
    pub predictions: Vector,
    pub mse: f64,
}

pub(crate) fn validate_lambda(lambda: f64) -> Result<()> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(LearnError::InvalidRegularization(lambda));
    }
    Ok(())
}

fn validate_training_data(x: &Matrix, y: &Vector) -> Result<()> {
    ensure_len("number of samples in X and y", x.nrows(), y.len())?;
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(LearnError::InvalidDimension(
            "X must have at least one sample and one feature".to_string(),
        ));
    }
    Ok(())
}

/// Solves `(XᵀX + λI) w = Xᵀy` through the explicit inverse.
///
/// With `λ = 0` the rank test rejects duplicate columns; with `λ > 0` the
/// system is positive definite and only a failed inversion is an error.
fn solve_normal_equation(x: &Matrix, y: &Vector, lambda: f64) -> Result<Vector> {
    let xt = x.t();
    let mut xtx = xt.dot(x);
    let xtx_inv = if lambda > 0.0 {
        xtx.diag_mut().mapv_inplace(|v| v + lambda);
        inverse_regularized(&xtx)?
    } else {
        inverse(&xtx)?
    };
    Ok(xtx_inv.dot(&xt.dot(y)))
}

/// `w = (XᵀX)⁻¹ Xᵀ y`.
pub fn ordinary_least_squares(x: &Matrix, y: &Vector) -> Result<Vector> {
    validate_training_data(x, y)?;
    debug!("OLS fit: {} samples, {} features", x.nrows(), x.ncols());
    solve_normal_equation(x, y, 0.0)
}

/// `w = (XᵀX + λI)⁻¹ Xᵀ y`. With `lambda == 0` this is exactly OLS.
pub fn ridge_regression(x: &Matrix, y: &Vector, lambda: f64) -> Result<Vector> {
    validate_lambda(lambda)?;
    validate_training_data(x, y)?;
    debug!(
        "ridge fit: {} samples, {} features, lambda {}",
        x.nrows(),
        x.ncols(),
        lambda
    );
    solve_normal_equation(x, y, lambda)
}

pub fn predict(w: &Vector, x: &Matrix) -> Result<Vector> {
    ensure_len("number of features in X and weights", x.ncols(), w.len())?;
    Ok(x.dot(w))
}

/// Predictions `Xw` and their mean squared error against `y`.
pub fn evaluate(w: &Vector, x: &Matrix, y: &Vector) -> Result<RegressionEvaluation> {
    ensure_len("number of samples in X and y", x.nrows(), y.len())?;
    let predictions = predict(w, x)?;
    let mse = mean_squared_error(&predictions, y)?;
    Ok(RegressionEvaluation { predictions, mse })
}

/// Fitted weight vector. The model has no separate intercept; add a column of
/// ones to the features to learn one.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearModel {
    pub weights: Vector,
}

impl LinearModel {
    pub fn new(weights: Vector) -> Self {
        Self { weights }
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        predict(&self.weights, x)
    }

    pub fn evaluate(&self, x: &Matrix, y: &Vector) -> Result<RegressionEvaluation> {
        evaluate(&self.weights, x, y)
    }

    pub fn mse(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        self.evaluate(x, y).map(|e| e.mse)
    }
}

/// Unregularized least squares.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearRegression;

impl LinearRegression {
    pub fn new() -> Self {
        Self
    }

    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<LinearModel> {
        ordinary_least_squares(x, y).map(LinearModel::new)
    }
}

/// L2-regularized least squares.
#[derive(Clone, Debug, PartialEq)]
pub struct Ridge {
    lambda: f64,
}

impl Ridge {
    pub fn new() -> Self {
        Self { lambda: 1.0 }
    }

    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<LinearModel> {
        ridge_regression(x, y, self.lambda).map(LinearModel::new)
    }
}

impl Default for Ridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::add_intercept;
    use ndarray::array;
    use ndarray_rand::RandomExt;
    use ndarray_rand::rand_distr::{StandardNormal, Uniform};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn noisy_linear_data(seed: u64, n: usize) -> (Matrix, Vector) {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = Matrix::random_using((n, 3), Uniform::new(-2.0, 2.0), &mut rng);
        let noise = Vector::random_using(n, StandardNormal, &mut rng) * 0.1;
        let y = x.dot(&array![1.5, -2.0, 0.5]) + 3.0 + noise;
        (add_intercept(&x), y)
    }

    #[test]
    fn test_ols_exact_fit() {
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
        let y = array![5.0, 7.0, 9.0, 11.0];

        let w = ordinary_least_squares(&x, &y).unwrap();
        assert!((w[0] - 3.0).abs() < 1e-10);
        assert!((w[1] - 2.0).abs() < 1e-10);

        let evaluation = evaluate(&w, &x, &y).unwrap();
        assert!(evaluation.mse < 1e-18);
    }

    #[test]
    fn test_ols_recovers_coefficients() {
        let (x, y) = noisy_linear_data(3, 200);
        let model = LinearRegression::new().fit(&x, &y).unwrap();

        let expected = array![3.0, 1.5, -2.0, 0.5];
        for (w, e) in model.weights.iter().zip(expected.iter()) {
            assert!((w - e).abs() < 0.05, "weight {} expected {}", w, e);
        }
    }

    #[test]
    fn test_ridge_zero_lambda_equals_ols() {
        let (x, y) = noisy_linear_data(5, 50);

        let w_ols = ordinary_least_squares(&x, &y).unwrap();
        let w_ridge = ridge_regression(&x, &y, 0.0).unwrap();

        for (a, b) in w_ols.iter().zip(w_ridge.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ridge_shrinks_weights() {
        let (x, y) = noisy_linear_data(9, 40);

        let norm = |w: &Vector| w.dot(w);
        let w_small = ridge_regression(&x, &y, 0.1).unwrap();
        let w_large = ridge_regression(&x, &y, 100.0).unwrap();

        assert!(norm(&w_large) < norm(&w_small));
    }

    #[test]
    fn test_collinear_columns() {
        let x = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        assert_eq!(
            ordinary_least_squares(&x, &y),
            Err(LearnError::SingularMatrix { order: 2 })
        );

        let model = Ridge::new().lambda(0.5).fit(&x, &y).unwrap();
        // Symmetric problem: the penalty splits the weight evenly
        assert!((model.weights[0] - model.weights[1]).abs() < 1e-10);
        assert!(model.mse(&x, &y).unwrap() < 0.01);
    }

    #[test]
    fn test_collinear_columns_small_lambda() {
        // Scaled duplicate columns: a tiny penalty still makes XᵀX + λI invertible
        let x = array![[100.0, 100.0], [200.0, 200.0], [300.0, 300.0], [400.0, 400.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        assert_eq!(
            ridge_regression(&x, &y, 0.0),
            Err(LearnError::SingularMatrix { order: 2 })
        );

        let weights = ridge_regression(&x, &y, 1e-10).unwrap();
        assert!(weights.iter().all(|w| w.is_finite()));
        assert!((weights[0] - weights[1]).abs() < 1e-12);
        assert!(weights.sum() > 0.0);
    }

    #[test]
    fn test_more_features_than_samples() {
        let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let y = array![1.0, 2.0];

        assert!(matches!(
            LinearRegression::new().fit(&x, &y),
            Err(LearnError::SingularMatrix { .. })
        ));
        assert!(Ridge::new().lambda(1e-3).fit(&x, &y).is_ok());
    }

    #[test]
    fn test_invalid_lambda() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0];

        assert_eq!(
            ridge_regression(&x, &y, -1.0),
            Err(LearnError::InvalidRegularization(-1.0))
        );
        assert!(ridge_regression(&x, &y, f64::NAN).is_err());
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];

        assert!(matches!(
            LinearRegression::new().fit(&x, &y),
            Err(LearnError::InvalidDimension(_))
        ));
        assert!(matches!(
            predict(&array![1.0, 2.0], &x),
            Err(LearnError::InvalidDimension(_))
        ));
        assert!(matches!(
            evaluate(&array![1.0], &x, &y),
            Err(LearnError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_evaluate_mse() {
        let w = array![2.0];
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![2.0, 5.0, 6.0];

        let evaluation = LinearModel::new(w).evaluate(&x, &y).unwrap();
        assert_eq!(evaluation.predictions, array![2.0, 4.0, 6.0]);
        assert!((evaluation.mse - 1.0 / 3.0).abs() < 1e-12);
    }
}
