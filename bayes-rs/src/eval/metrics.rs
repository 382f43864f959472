//! Final metrics derived from a confusion matrix

use crate::eval::types::ConfusionMatrix;
use serde::Serialize;

/// Precision, recall and F1 for one track.
///
/// Each value is `None` when its denominator is zero, surfacing
/// "undefined" explicitly instead of propagating NaN.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metrics {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

impl Metrics {
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Self {
        let precision = ratio(
            matrix.true_positives,
            matrix.true_positives + matrix.false_positives,
        );
        let recall = ratio(
            matrix.true_positives,
            matrix.true_positives + matrix.false_negatives,
        );
        let f1 = match (precision, recall) {
            (Some(p), Some(r)) if p + r > 0.0 => Some(2.0 * p * r / (p + r)),
            _ => None,
        };
        Metrics {
            precision,
            recall,
            f1,
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let matrix = ConfusionMatrix {
            true_positives: 8,
            true_negatives: 10,
            false_positives: 2,
            false_negatives: 4,
        };
        let metrics = Metrics::from_matrix(&matrix);
        assert!((metrics.precision.unwrap() - 0.8).abs() < 1e-12);
        assert!((metrics.recall.unwrap() - 8.0 / 12.0).abs() < 1e-12);

        let p = 0.8;
        let r = 8.0 / 12.0;
        assert!((metrics.f1.unwrap() - 2.0 * p * r / (p + r)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators_are_undefined() {
        // No spam predicted and no spam present: everything undefined.
        let matrix = ConfusionMatrix {
            true_negatives: 5,
            ..Default::default()
        };
        let metrics = Metrics::from_matrix(&matrix);
        assert!(metrics.precision.is_none());
        assert!(metrics.recall.is_none());
        assert!(metrics.f1.is_none());
    }

    #[test]
    fn test_zero_precision_and_recall_leave_f1_undefined() {
        let matrix = ConfusionMatrix {
            false_positives: 3,
            false_negatives: 2,
            ..Default::default()
        };
        let metrics = Metrics::from_matrix(&matrix);
        assert_eq!(metrics.precision, Some(0.0));
        assert_eq!(metrics.recall, Some(0.0));
        assert!(metrics.f1.is_none());
    }
}
