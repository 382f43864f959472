//! Evaluation harness
//!
//! Drives training, feature selection and two parallel classifier tracks
//! (full vocabulary and k-best subset) over the train and test corpora,
//! sampling accuracy at fixed progress checkpoints.

pub mod harness;
pub mod metrics;
pub mod types;

pub use harness::{run_dataset, EvaluationHarness};
pub use metrics::Metrics;
pub use types::{AccuracySample, ConfusionMatrix, DocumentResult};
