use crate::error::{LearnError, Result, ensure_len};
use crate::{Labels, Matrix, Vector};
use ndarray::Axis;

/// Per-class mean vectors.
///
/// Classes are `1..=n_classes`; class `k` owns row `k - 1` of `means`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassStatistics {
    pub means: Matrix,
}

impl ClassStatistics {
    pub fn n_classes(&self) -> usize {
        self.means.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.means.ncols()
    }

    pub fn mean(&self, label: usize) -> Option<Vector> {
        if label == 0 || label > self.n_classes() {
            return None;
        }
        Some(self.means.row(label - 1).to_owned())
    }
}

/// Row indices of each class, in class order.
///
/// Every label in `1..=max(labels)` must own at least one row.
pub(crate) fn partition_by_class(labels: &Labels) -> Result<Vec<Vec<usize>>> {
    let n_classes = labels.iter().copied().max().unwrap_or(0);
    let mut rows = vec![Vec::new(); n_classes];

    for (i, &label) in labels.iter().enumerate() {
        if label == 0 {
            return Err(LearnError::InvalidLabel(label));
        }
        rows[label - 1].push(i);
    }

    if let Some(empty) = rows.iter().position(|r| r.is_empty()) {
        return Err(LearnError::EmptyClass { label: empty + 1 });
    }
    Ok(rows)
}

pub(crate) fn validate_training_data(x: &Matrix, labels: &Labels) -> Result<()> {
    ensure_len("number of samples in X and y", x.nrows(), labels.len())?;
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(LearnError::InvalidDimension(
            "input matrix must have at least one sample and one feature".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn class_means(x: &Matrix, rows: &[Vec<usize>]) -> Result<ClassStatistics> {
    let mut means = Matrix::zeros((rows.len(), x.ncols()));
    for (k, class_rows) in rows.iter().enumerate() {
        let mean = x
            .select(Axis(0), class_rows)
            .mean_axis(Axis(0))
            .ok_or(LearnError::EmptyClass { label: k + 1 })?;
        means.row_mut(k).assign(&mean);
    }
    Ok(ClassStatistics { means })
}

/// Sample covariance of the rows of `x`, with the unbiased `n - 1` denominator.
///
/// A single row has no spread and yields the zero matrix.
pub fn covariance(x: &Matrix) -> Matrix {
    let n = x.nrows();
    let d = x.ncols();
    let mean = match x.mean_axis(Axis(0)) {
        Some(mean) => mean,
        None => return Matrix::zeros((d, d)),
    };

    let centered = x - &mean;
    let denominator = n.saturating_sub(1).max(1) as f64;
    centered.t().dot(&centered) / denominator
}
