use crate::Vector;
use crate::error::{LearnError, Result, ensure_len};
use ndarray::Array1;

fn ensure_non_empty(len: usize) -> Result<()> {
    if len == 0 {
        return Err(LearnError::InvalidDimension(
            "cannot score empty vectors".to_string(),
        ));
    }
    Ok(())
}

/// Fraction of positions where `predicted` equals `actual`, in `[0, 1]`.
pub fn accuracy<T: PartialEq>(predicted: &Array1<T>, actual: &Array1<T>) -> Result<f64> {
    ensure_len("predicted and actual lengths", predicted.len(), actual.len())?;
    ensure_non_empty(actual.len())?;

    let correct = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(pred, act)| pred == act)
        .count();
    Ok(correct as f64 / actual.len() as f64)
}

/// Mean of the squared residuals.
///
/// Any mismatch scores strictly above zero: when the squares underflow the
/// result is the smallest positive `f64` rather than `0.0`.
pub fn mean_squared_error(predicted: &Vector, actual: &Vector) -> Result<f64> {
    ensure_len("predicted and actual lengths", predicted.len(), actual.len())?;
    ensure_non_empty(actual.len())?;

    let diff = actual - predicted;
    let mse = diff.mapv(|x| x * x).sum() / actual.len() as f64;
    if mse == 0.0 && diff.iter().any(|&d| d != 0.0) {
        return Ok(f64::from_bits(1));
    }
    Ok(mse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_accuracy() {
        let predicted = array![1usize, 2, 2, 1];
        let actual = array![1usize, 2, 1, 1];

        let acc = accuracy(&predicted, &actual).unwrap();
        assert!((acc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_permutation_invariant() {
        let predicted = array![1usize, 2, 3, 1, 2];
        let actual = array![1usize, 3, 3, 2, 2];
        let order = [4, 2, 0, 3, 1];

        let permuted_pred: Array1<usize> = order.iter().map(|&i| predicted[i]).collect();
        let permuted_act: Array1<usize> = order.iter().map(|&i| actual[i]).collect();

        assert_eq!(
            accuracy(&predicted, &actual).unwrap(),
            accuracy(&permuted_pred, &permuted_act).unwrap()
        );
    }

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let mse = mean_squared_error(&y_pred, &y_true).unwrap();
        assert_eq!(mse, 0.0);

        let y_pred = array![1.0, 2.0, 5.0];
        let mse = mean_squared_error(&y_pred, &y_true).unwrap();
        assert!((mse - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_squared_error_positive_for_any_mismatch() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0 + 1e-6];

        assert!(mean_squared_error(&y_pred, &y_true).unwrap() > 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            mean_squared_error(&array![1.0, 2.0], &array![1.0]),
            Err(LearnError::InvalidDimension(_))
        ));
        assert!(matches!(
            accuracy(&array![1usize], &array![1usize, 2]),
            Err(LearnError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_empty_vectors() {
        let empty = Vector::zeros(0);
        assert!(mean_squared_error(&empty, &empty).is_err());

        let no_labels = Array1::<usize>::zeros(0);
        assert!(matches!(
            accuracy(&no_labels, &no_labels),
            Err(LearnError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_mean_squared_error_tiny_mismatch() {
        let mse = mean_squared_error(&array![0.0], &array![1e-200]).unwrap();
        assert!(mse > 0.0);
        assert_eq!(mean_squared_error(&array![1e-200], &array![1e-200]), Ok(0.0));
    }
}
