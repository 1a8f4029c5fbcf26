use thiserror::Error;

/// Errors raised by the fitting, prediction and scoring entry points.
///
/// None of these are transient: every operation is a pure function of its
/// inputs, so calling again with the same arguments reproduces the error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LearnError {
    #[error("matrix of order {order} is singular or nearly singular")]
    SingularMatrix { order: usize },

    #[error("class {label} has no training samples")]
    EmptyClass { label: usize },

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("class labels must be positive integers starting at 1, found {0}")]
    InvalidLabel(usize),

    #[error("regularization strength must be finite and non-negative, got {0}")]
    InvalidRegularization(f64),

    #[error("optimizer failed: {0}")]
    Optimizer(String),
}

pub type Result<T> = std::result::Result<T, LearnError>;

/// Fails with `InvalidDimension` unless `left == right`.
pub(crate) fn ensure_len(what: &str, left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(LearnError::InvalidDimension(format!(
            "{what}: {left} != {right}"
        )));
    }
    Ok(())
}
