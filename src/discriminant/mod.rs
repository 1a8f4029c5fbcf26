//! Gaussian discriminant classifiers.
//!
//! This module provides:
//! - LDA: one covariance matrix shared by every class, computed over all training rows
//! - QDA: one covariance matrix per class, computed from that class's rows only
//!
//! Both variants score a test row against every class with the same Gaussian
//! density and predict the class with the highest score. Labels are 1-based:
//! class `k` is the `k`-th row of the fitted means.
//!
//! # Examples
//!
//! ```rust
//! use statlearn::GaussianDiscriminant;
//! use ndarray::array;
//!
//! let x = array![
//!     [0.0, 0.3],
//!     [0.4, -0.2],
//!     [-0.3, 0.1],
//!     [10.1, 9.8],
//!     [9.7, 10.4],
//!     [10.2, 10.1]
//! ];
//! let y = array![1usize, 1, 1, 2, 2, 2];
//!
//! let fitted = GaussianDiscriminant::qda().fit(&x, &y).unwrap();
//! let (labels, accuracy) = fitted.evaluate(&x, &y).unwrap();
//! assert_eq!(labels, y);
//! assert_eq!(accuracy, 1.0);
//! ```

mod gaussian;
mod statistics;

pub use gaussian::{
    CovarianceKind, CovarianceModel, FittedDiscriminant, GaussianDiscriminant, class_densities,
    fit_lda, fit_qda, predict,
};
pub use statistics::{ClassStatistics, covariance};
