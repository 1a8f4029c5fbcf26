//! Linear regression solvers.
//!
//! This module provides:
//! - `LinearRegression`: ordinary least squares, `w = (XᵀX)⁻¹ Xᵀy`
//! - `Ridge`: L2-regularized least squares, `w = (XᵀX + λI)⁻¹ Xᵀy`
//! - `RegularizedObjective`: the ridge loss and its gradient, for iterative minimizers
//!
//! Weights are fitted for the columns of `X` as given; prepend a column of ones
//! (`preprocessing::add_intercept`) to learn an intercept.
//!
//! # Examples
//!
//! ## Closed form
//! ```rust
//! use statlearn::{LinearRegression, Ridge};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let y = array![3.0, 5.0, 7.0];
//!
//! let ols = LinearRegression::new().fit(&x, &y).unwrap();
//! let ridge = Ridge::new().lambda(0.1).fit(&x, &y).unwrap();
//! let mse = ridge.evaluate(&x, &y).unwrap().mse;
//! assert!(ols.mse(&x, &y).unwrap() <= mse);
//! ```
//!
//! ## Gradient-based
//! ```rust
//! use statlearn::{LbfgsMinimizer, Vector};
//! use statlearn::linear_model::{fit_regularized, ridge_regression};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
//! let y = array![3.1, 4.9, 7.2, 8.8];
//!
//! let w = fit_regularized(&x, &y, 0.5, &LbfgsMinimizer::new(), Vector::ones(2)).unwrap();
//! let closed_form = ridge_regression(&x, &y, 0.5).unwrap();
//! assert!((&w - &closed_form).mapv(f64::abs).sum() < 1e-4);
//! ```

mod least_squares;
mod objective;

pub use least_squares::{
    LinearModel, LinearRegression, RegressionEvaluation, Ridge, evaluate, ordinary_least_squares,
    predict, ridge_regression,
};
pub use objective::{
    DifferentiableObjective, LbfgsMinimizer, Minimizer, RegularizedObjective, fit_regularized,
    gradient, objective,
};
