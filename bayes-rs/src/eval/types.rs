//! Evaluation types and data structures

use crate::corpus::Label;
use serde::Serialize;

/// The four counters summarizing classifier correctness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl ConfusionMatrix {
    /// Record one prediction against its ground truth. Spam is the
    /// positive class.
    pub fn record(&mut self, predicted: Label, actual: Label) {
        match (predicted, actual) {
            (Label::Spam, Label::Spam) => self.true_positives += 1,
            (Label::Spam, Label::Ham) => self.false_positives += 1,
            (Label::Ham, Label::Ham) => self.true_negatives += 1,
            (Label::Ham, Label::Spam) => self.false_negatives += 1,
        }
    }

    /// Total documents recorded
    pub fn total(&self) -> u64 {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    /// Correct predictions
    pub fn correct(&self) -> u64 {
        self.true_positives + self.true_negatives
    }

    /// Fraction of correct predictions; 0 before anything was recorded
    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.correct() as f64 / self.total() as f64
    }
}

/// One point on the accuracy trajectory of a phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracySample {
    /// Progress through the phase, in percent (10, 20, ... 100)
    pub progress_pct: u32,
    /// Cumulative accuracy at this checkpoint
    pub accuracy: f64,
}

/// Predicted label and winning score for one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    pub name: String,
    pub predicted: Label,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_covers_all_quadrants() {
        let mut matrix = ConfusionMatrix::default();
        matrix.record(Label::Spam, Label::Spam);
        matrix.record(Label::Spam, Label::Ham);
        matrix.record(Label::Ham, Label::Ham);
        matrix.record(Label::Ham, Label::Spam);

        assert_eq!(matrix.true_positives, 1);
        assert_eq!(matrix.false_positives, 1);
        assert_eq!(matrix.true_negatives, 1);
        assert_eq!(matrix.false_negatives, 1);
        assert_eq!(matrix.total(), 4);
        assert_eq!(matrix.correct(), 2);
        assert!((matrix.accuracy() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_matrix_accuracy() {
        assert_eq!(ConfusionMatrix::default().accuracy(), 0.0);
    }
}
