//! Two-track evaluation harness

use crate::classify::{classify, Classification};
use crate::config::Config;
use crate::corpus::{load_documents, Document, TokenMode};
use crate::error::Result;
use crate::eval::metrics::Metrics;
use crate::eval::types::{AccuracySample, ConfusionMatrix, DocumentResult};
use crate::model::{rank_terms, select_top_k, train, FeatureSet, TrainedModel};
use crate::report::{PhaseReport, RunReport, TrackSummary};
use tracing::info;

/// Phase-scoped counters and samples for one classifier track
#[derive(Debug, Default)]
struct TrackState {
    matrix: ConfusionMatrix,
    classified: usize,
    samples: Vec<AccuracySample>,
    results: Vec<DocumentResult>,
}

impl TrackState {
    /// Record one classification, appending an accuracy sample whenever
    /// the running document count crosses a 10% checkpoint of `total`.
    /// The final document always produces a checkpoint.
    fn record(&mut self, document: &Document, outcome: &Classification, total: usize) {
        self.matrix.record(outcome.label, document.label);
        self.results.push(DocumentResult {
            name: document.name.clone(),
            predicted: outcome.label,
            score: outcome.score,
        });

        let done = self.classified + 1;
        let next_checkpoint = (self.samples.len() + 1) * total / 10;
        if done == next_checkpoint || done == total {
            self.samples.push(AccuracySample {
                progress_pct: ((self.samples.len() + 1) * 10) as u32,
                accuracy: self.matrix.accuracy(),
            });
        }
        self.classified += 1;
    }

    fn summary(&self) -> TrackSummary {
        TrackSummary {
            matrix: self.matrix,
            right: self.matrix.correct(),
            wrong: self.matrix.total() - self.matrix.correct(),
            metrics: Metrics::from_matrix(&self.matrix),
            samples: self.samples.clone(),
            results: self.results.clone(),
        }
    }

    fn reset(&mut self) {
        *self = TrackState::default();
    }
}

/// Orchestrates training, feature selection and two-track evaluation.
///
/// The model is trained once and the feature subset selected once,
/// immediately after training. Each evaluation phase then classifies its
/// corpus on both tracks; phase-scoped counters are cleared between
/// phases while the trained model and feature set persist.
pub struct EvaluationHarness {
    model: TrainedModel,
    features: FeatureSet,
    full: TrackState,
    k_best: TrackState,
}

impl EvaluationHarness {
    /// Train on a corpus and select the k-best feature subset.
    pub fn train(documents: &[Document], k: f64) -> Result<Self> {
        let model = train(documents)?;
        let ranked = rank_terms(&model);
        let features = select_top_k(&ranked, k)?;
        Ok(Self {
            model,
            features,
            full: TrackState::default(),
            k_best: TrackState::default(),
        })
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn feature_set(&self) -> &FeatureSet {
        &self.features
    }

    /// Classify every document of a phase corpus on both tracks.
    ///
    /// Counters, matrices and accuracy samples from any previous phase are
    /// cleared first; the trained model is reused untouched.
    pub fn run_phase(&mut self, documents: &[Document]) -> PhaseReport {
        self.full.reset();
        self.k_best.reset();

        let total = documents.len();
        for document in documents {
            let outcome = classify(&document.tokens, &self.model, None);
            self.full.record(document, &outcome, total);

            let k_outcome = classify(&document.tokens, &self.model, Some(&self.features));
            self.k_best.record(document, &k_outcome, total);
        }

        PhaseReport {
            full: self.full.summary(),
            k_best: self.k_best.summary(),
        }
    }
}

/// Run the whole pipeline for one dataset configuration.
///
/// Trains on the train directory, self-evaluates over the training set
/// (re-read under classification tokenization rules), then evaluates the
/// held-out test set.
pub fn run_dataset(config: &Config) -> Result<RunReport> {
    config.validate()?;

    let train_documents = load_documents(&config.data.train_dir, TokenMode::Train)?;
    info!(
        "Training on {} ({} documents)",
        config.data.train_dir,
        train_documents.len()
    );
    let mut harness = EvaluationHarness::train(&train_documents, config.features.k_best_fraction)?;

    let train_eval_documents = load_documents(&config.data.train_dir, TokenMode::Test)?;
    let train_phase = harness.run_phase(&train_eval_documents);

    let test_documents = load_documents(&config.data.test_dir, TokenMode::Test)?;
    info!(
        "Evaluating on {} ({} documents)",
        config.data.test_dir,
        test_documents.len()
    );
    let test_phase = harness.run_phase(&test_documents);

    Ok(RunReport {
        dataset: config.data.dataset.clone(),
        vocabulary_size: harness.model().vocabulary.len(),
        selected_features: harness.feature_set().len(),
        train_phase,
        test_phase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Label;

    fn document(name: &str, tokens: &[&str]) -> Document {
        Document {
            name: name.to_string(),
            label: Label::from_file_name(name),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn training_corpus() -> Vec<Document> {
        vec![
            document("spam1.txt", &["viagra", "offer", "cash"]),
            document("spam2.txt", &["viagra", "cash"]),
            document("spam3.txt", &["offer", "cash", "now"]),
            document("msg1.txt", &["meeting", "agenda"]),
            document("msg2.txt", &["meeting", "notes"]),
            document("msg3.txt", &["agenda", "notes", "now"]),
        ]
    }

    /// Ten documents so every one of them lands on a checkpoint.
    fn ten_document_phase() -> Vec<Document> {
        let mut documents = Vec::new();
        for i in 0..5 {
            documents.push(document(&format!("spam-t{i}.txt"), &["viagra", "cash"]));
        }
        for i in 0..5 {
            documents.push(document(&format!("t{i}.txt"), &["meeting", "agenda"]));
        }
        documents
    }

    #[test]
    fn test_matrix_total_matches_documents_classified() {
        let mut harness = EvaluationHarness::train(&training_corpus(), 1.0).unwrap();
        let phase = harness.run_phase(&ten_document_phase());

        assert_eq!(phase.full.matrix.total(), 10);
        assert_eq!(phase.k_best.matrix.total(), 10);
        assert_eq!(phase.full.results.len(), 10);
    }

    #[test]
    fn test_ten_document_phase_yields_ten_samples() {
        let mut harness = EvaluationHarness::train(&training_corpus(), 1.0).unwrap();
        let phase = harness.run_phase(&ten_document_phase());

        assert_eq!(phase.full.samples.len(), 10);
        for (i, sample) in phase.full.samples.iter().enumerate() {
            assert_eq!(sample.progress_pct, (i as u32 + 1) * 10);
        }
        assert_eq!(phase.k_best.samples.len(), 10);
    }

    #[test]
    fn test_small_phase_still_samples_final_document() {
        let mut harness = EvaluationHarness::train(&training_corpus(), 1.0).unwrap();
        let phase = harness.run_phase(&ten_document_phase()[..3]);

        assert_eq!(phase.full.samples.len(), 1);
        assert_eq!(phase.full.samples[0].progress_pct, 10);
    }

    #[test]
    fn test_phases_are_independent_but_model_persists() {
        let mut harness = EvaluationHarness::train(&training_corpus(), 1.0).unwrap();
        let vocabulary_size = harness.model().vocabulary.len();

        let first = harness.run_phase(&ten_document_phase());
        let second = harness.run_phase(&ten_document_phase()[..4]);

        assert_eq!(first.full.matrix.total(), 10);
        assert_eq!(second.full.matrix.total(), 4);
        assert_eq!(harness.model().vocabulary.len(), vocabulary_size);

        // Same corpus, same model: re-running reproduces the outcome.
        let third = harness.run_phase(&ten_document_phase());
        assert_eq!(first.full.matrix, third.full.matrix);
    }

    #[test]
    fn test_full_vocabulary_track_separates_clear_corpus() {
        let mut harness = EvaluationHarness::train(&training_corpus(), 1.0).unwrap();
        let phase = harness.run_phase(&ten_document_phase());

        assert_eq!(phase.full.matrix.true_positives, 5);
        assert_eq!(phase.full.matrix.true_negatives, 5);
        assert_eq!(phase.full.right, 10);
        assert_eq!(phase.full.metrics.precision, Some(1.0));
        assert_eq!(phase.full.metrics.recall, Some(1.0));
    }

    #[test]
    fn test_k_best_with_full_fraction_matches_simple_track() {
        let mut harness = EvaluationHarness::train(&training_corpus(), 1.0).unwrap();
        let phase = harness.run_phase(&ten_document_phase());
        assert_eq!(phase.full.matrix, phase.k_best.matrix);
    }
}
