use super::statistics::{
    ClassStatistics, class_means, covariance, partition_by_class, validate_training_data,
};
use crate::error::{LearnError, Result, ensure_len};
use crate::linalg::inverse_and_determinant;
use crate::metrics::accuracy;
use crate::{Labels, Matrix, Vector};
use log::{debug, trace};
use ndarray::Axis;
use std::f64::consts::PI;

/// Which covariance structure a discriminant model fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CovarianceKind {
    /// One covariance over all training rows (LDA).
    Shared,
    /// One covariance per class (QDA).
    PerClass,
}

/// Fitted covariance, shared across classes or one per class.
#[derive(Clone, Debug, PartialEq)]
pub enum CovarianceModel {
    Shared(Matrix),
    PerClass(Vec<Matrix>),
}

impl CovarianceModel {
    pub fn kind(&self) -> CovarianceKind {
        match self {
            CovarianceModel::Shared(_) => CovarianceKind::Shared,
            CovarianceModel::PerClass(_) => CovarianceKind::PerClass,
        }
    }

    /// Covariance used for class `label` (1-based).
    pub fn for_class(&self, label: usize) -> Option<&Matrix> {
        match self {
            CovarianceModel::Shared(sigma) => Some(sigma),
            CovarianceModel::PerClass(sigmas) => label.checked_sub(1).and_then(|k| sigmas.get(k)),
        }
    }
}

/// Precision matrix and density normalizer for one class.
struct DensityFactor {
    precision: Matrix,
    normalizer: f64,
}

impl DensityFactor {
    fn new(sigma: &Matrix) -> Result<Self> {
        let (precision, det) = inverse_and_determinant(sigma)?;
        let d = sigma.nrows() as f64;
        let normalizer = ((2.0 * PI).powf(d) * det).sqrt();
        Ok(Self {
            precision,
            normalizer,
        })
    }

    fn density(&self, x: &Matrix, mean: &Vector) -> Vector {
        let centered = x - mean;
        let mahalanobis = (centered.dot(&self.precision) * &centered).sum_axis(Axis(1));
        mahalanobis.mapv(|m| (-0.5 * m).exp() / self.normalizer)
    }
}

/// Gaussian class densities for every row of `x` and every class, as an N×K matrix.
///
/// Column `k - 1` holds `exp(-½ (x−μ_k)ᵀ Σ_k⁻¹ (x−μ_k)) / sqrt((2π)^D · det(Σ_k))`.
pub fn class_densities(
    statistics: &ClassStatistics,
    covariance: &CovarianceModel,
    x: &Matrix,
) -> Result<Matrix> {
    let n_classes = statistics.n_classes();
    let n_features = statistics.n_features();
    if n_classes == 0 {
        return Err(LearnError::InvalidDimension(
            "class statistics must hold at least one class".to_string(),
        ));
    }
    ensure_len("number of features in X and class means", x.ncols(), n_features)?;

    let shared;
    let per_class;
    let factors: Vec<&DensityFactor> = match covariance {
        CovarianceModel::Shared(sigma) => {
            ensure_len("covariance order and number of features", sigma.nrows(), n_features)?;
            shared = DensityFactor::new(sigma)?;
            vec![&shared; n_classes]
        }
        CovarianceModel::PerClass(sigmas) => {
            ensure_len("number of covariances and classes", sigmas.len(), n_classes)?;
            per_class = sigmas
                .iter()
                .enumerate()
                .map(|(k, sigma)| {
                    ensure_len("covariance order and number of features", sigma.nrows(), n_features)?;
                    DensityFactor::new(sigma).inspect_err(|err| {
                        debug!("covariance of class {} rejected: {}", k + 1, err)
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            per_class.iter().collect()
        }
    };

    let mut densities = Matrix::zeros((x.nrows(), n_classes));
    for (k, factor) in factors.iter().enumerate() {
        let mean = statistics.means.row(k).to_owned();
        densities.column_mut(k).assign(&factor.density(x, &mean));
    }
    Ok(densities)
}

/// Label (1-based) of the first maximum in each row.
fn first_max_labels(densities: &Matrix) -> Labels {
    densities
        .axis_iter(Axis(0))
        .map(|row| {
            let mut best = 0;
            for (k, &value) in row.iter().enumerate() {
                if value > row[best] {
                    best = k;
                }
            }
            best + 1
        })
        .collect()
}

/// Predicts labels for `x_test` and scores them against `y_test`.
pub fn predict(
    statistics: &ClassStatistics,
    covariance: &CovarianceModel,
    x_test: &Matrix,
    y_test: &Labels,
) -> Result<(Labels, f64)> {
    ensure_len("number of samples in X and y", x_test.nrows(), y_test.len())?;
    let densities = class_densities(statistics, covariance, x_test)?;
    let labels = first_max_labels(&densities);
    let acc = accuracy(&labels, y_test)?;
    Ok((labels, acc))
}

/// Gaussian discriminant classifier configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianDiscriminant {
    kind: CovarianceKind,
}

impl GaussianDiscriminant {
    pub fn new(kind: CovarianceKind) -> Self {
        Self { kind }
    }

    pub fn lda() -> Self {
        Self::new(CovarianceKind::Shared)
    }

    pub fn qda() -> Self {
        Self::new(CovarianceKind::PerClass)
    }

    pub fn kind(&self) -> CovarianceKind {
        self.kind
    }

    pub fn fit(&self, x: &Matrix, y: &Labels) -> Result<FittedDiscriminant> {
        validate_training_data(x, y)?;
        let rows = partition_by_class(y)?;
        let statistics = class_means(x, &rows)?;

        let covariance_model = match self.kind {
            CovarianceKind::Shared => CovarianceModel::Shared(covariance(x)),
            CovarianceKind::PerClass => CovarianceModel::PerClass(
                rows.iter()
                    .map(|class_rows| covariance(&x.select(Axis(0), class_rows)))
                    .collect(),
            ),
        };

        debug!(
            "fitted {:?} discriminant: {} samples, {} features, {} classes",
            self.kind,
            x.nrows(),
            x.ncols(),
            rows.len()
        );
        for (k, class_rows) in rows.iter().enumerate() {
            trace!("class {}: {} samples", k + 1, class_rows.len());
        }

        Ok(FittedDiscriminant {
            statistics,
            covariance: covariance_model,
        })
    }
}

impl Default for GaussianDiscriminant {
    fn default() -> Self {
        Self::lda()
    }
}

/// Class means and covariances produced by `GaussianDiscriminant::fit`.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedDiscriminant {
    pub statistics: ClassStatistics,
    pub covariance: CovarianceModel,
}

impl FittedDiscriminant {
    pub fn n_classes(&self) -> usize {
        self.statistics.n_classes()
    }

    pub fn densities(&self, x: &Matrix) -> Result<Matrix> {
        class_densities(&self.statistics, &self.covariance, x)
    }

    pub fn predict(&self, x: &Matrix) -> Result<Labels> {
        Ok(first_max_labels(&self.densities(x)?))
    }

    /// Predicted labels and accuracy against `y`.
    pub fn evaluate(&self, x: &Matrix, y: &Labels) -> Result<(Labels, f64)> {
        predict(&self.statistics, &self.covariance, x, y)
    }

    pub fn score(&self, x: &Matrix, y: &Labels) -> Result<f64> {
        self.evaluate(x, y).map(|(_, acc)| acc)
    }
}

pub fn fit_lda(x: &Matrix, y: &Labels) -> Result<(ClassStatistics, CovarianceModel)> {
    let fitted = GaussianDiscriminant::lda().fit(x, y)?;
    Ok((fitted.statistics, fitted.covariance))
}

pub fn fit_qda(x: &Matrix, y: &Labels) -> Result<(ClassStatistics, CovarianceModel)> {
    let fitted = GaussianDiscriminant::qda().fit(x, y)?;
    Ok((fitted.statistics, fitted.covariance))
}
