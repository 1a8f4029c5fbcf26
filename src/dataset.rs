use crate::error::{Result, ensure_len};
use crate::preprocessing::add_intercept;
use crate::{Matrix, Vector};
use ndarray::Array1;

/// Feature rows paired with index-aligned targets.
///
/// `T` is `f64` for regression targets and `usize` for 1-based class labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset<T = f64> {
    pub features: Matrix,
    pub targets: Array1<T>,
}

impl<T> Dataset<T> {
    pub fn new(features: Matrix, targets: Array1<T>) -> Result<Self> {
        ensure_len(
            "number of samples in features and targets",
            features.nrows(),
            targets.len(),
        )?;

        Ok(Self { features, targets })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

impl<T: Clone> Dataset<T> {
    /// Copy of the dataset with a leading column of ones.
    pub fn with_intercept(&self) -> Self {
        Self {
            features: add_intercept(&self.features),
            targets: self.targets.clone(),
        }
    }
}

/// Row-major grid over the plane spanned by `xs` and `ys`.
///
/// Row `i * xs.len() + j` holds `(xs[j], ys[i])`, which matches flattening a
/// pair of meshgrid coordinate arrays. Useful for evaluating a classifier's
/// decision regions.
pub fn grid(xs: &Vector, ys: &Vector) -> Matrix {
    let nx = xs.len();
    Matrix::from_shape_fn((nx * ys.len(), 2), |(row, col)| {
        if col == 0 { xs[row % nx] } else { ys[row / nx] }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LearnError;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let targets = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, targets).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_labeled_dataset() {
        let features = array![[1.0], [2.0]];
        let labels = array![1usize, 2];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.targets[1], 2);
    }

    #[test]
    fn test_dataset_dimension_mismatch() {
        let features = array![[1.0, 2.0], [3.0, 4.0]];
        let targets = array![1.0];

        assert!(matches!(
            Dataset::new(features, targets),
            Err(LearnError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_with_intercept() {
        let dataset = Dataset::new(array![[2.0, 3.0], [4.0, 5.0]], array![1.0, 2.0]).unwrap();
        let augmented = dataset.with_intercept();

        assert_eq!(augmented.features, array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
        assert_eq!(augmented.targets, dataset.targets);
    }

    #[test]
    fn test_grid() {
        let points = grid(&array![0.0, 1.0, 2.0], &array![10.0, 20.0]);

        assert_eq!(points.shape(), &[6, 2]);
        assert_eq!(points.row(0).to_vec(), vec![0.0, 10.0]);
        assert_eq!(points.row(2).to_vec(), vec![2.0, 10.0]);
        assert_eq!(points.row(4).to_vec(), vec![1.0, 20.0]);
    }
}
