//! Run reporting
//!
//! Assembles final metrics and accuracy trajectories into a serializable
//! report. External visualization tooling consumes the accuracy series as
//! `(progress %, accuracy)` points per track and phase; this crate only
//! produces the data, never renders it.

use crate::error::Result;
use crate::eval::metrics::Metrics;
use crate::eval::types::{AccuracySample, ConfusionMatrix, DocumentResult};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Final summary for one classifier track in one phase
#[derive(Debug, Clone, Serialize)]
pub struct TrackSummary {
    pub matrix: ConfusionMatrix,
    pub right: u64,
    pub wrong: u64,
    pub metrics: Metrics,
    /// Accuracy checkpoints at 10% progress steps
    pub samples: Vec<AccuracySample>,
    /// Per-document predictions in classification order
    pub results: Vec<DocumentResult>,
}

impl TrackSummary {
    /// Log the summary the way the run output presents it.
    pub fn log(&self, heading: &str) {
        let total = self.right + self.wrong;
        let pct = if total == 0 {
            0.0
        } else {
            self.right as f64 / total as f64 * 100.0
        };
        info!(
            "{}: right predictions: {} ({:.0}%), wrong predictions: {}",
            heading, self.right, pct, self.wrong
        );
        info!("  Precision: {}", format_metric(self.metrics.precision));
        info!("  Recall: {}", format_metric(self.metrics.recall));
        info!("  F1: {}", format_metric(self.metrics.f1));
    }
}

/// Both classifier tracks of one evaluation phase
#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub full: TrackSummary,
    pub k_best: TrackSummary,
}

impl PhaseReport {
    pub fn log(&self, phase: &str) {
        self.full.log(&format!("[{phase}] Simple Naive Bayes"));
        self.k_best
            .log(&format!("[{phase}] k-best feature selection"));
    }
}

/// Complete output of one evaluation run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub dataset: String,
    pub vocabulary_size: usize,
    pub selected_features: usize,
    pub train_phase: PhaseReport,
    pub test_phase: PhaseReport,
}

impl RunReport {
    /// Log the human-readable summary for both phases.
    pub fn log_summary(&self) {
        info!(
            "Dataset {}: vocabulary {} terms, {} selected",
            self.dataset, self.vocabulary_size, self.selected_features
        );
        self.train_phase.log("train");
        self.test_phase.log("test");
    }

    /// Write the full report as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "undefined".to_string(),
    }
}
