//! Gaussian discriminant classifiers and linear regression solvers.
//!
//! - `GaussianDiscriminant`: LDA (shared covariance) and QDA (per-class covariance)
//! - `LinearRegression` / `Ridge`: closed-form least squares, with and without an L2 penalty
//! - `RegularizedObjective`: loss and analytic gradient for gradient-based ridge fitting
//! - `PolynomialFeatures`: polynomial basis expansion of a single feature column
//! - `metrics`: accuracy and mean squared error
//!
//! Every entry point is a pure function of its arguments. Fitted parameters are
//! plain values owned by the caller.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod discriminant;
pub mod error;
pub mod linalg;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use dataset::Dataset;
pub use discriminant::{
    ClassStatistics, CovarianceKind, CovarianceModel, FittedDiscriminant, GaussianDiscriminant,
};
pub use error::{LearnError, Result};
pub use linear_model::{
    DifferentiableObjective, LbfgsMinimizer, LinearModel, LinearRegression, Minimizer,
    RegressionEvaluation, RegularizedObjective, Ridge,
};
pub use preprocessing::PolynomialFeatures;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
/// Class labels, 1-based.
pub type Labels = Array1<usize>;
