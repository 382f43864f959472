//! bayes-rs: Naive Bayes spam/ham mail classifier
//!
//! Classifies e-mail documents as spam or ham with a bag-of-words
//! multinomial Naive Bayes model using Laplace smoothing, then reduces
//! the vocabulary to its highest information-gain terms and evaluates
//! the full and the reduced classifier side by side.
//!
//! # Pipeline
//!
//! raw files → tokenizer → vocabulary (training) → priors and entropy →
//! information-gain ranking (k-best subset) → two classifier tracks →
//! evaluation report
//!
//! The pipeline is a finite, deterministic sequence of synchronous
//! passes: training completes before ranking, ranking before
//! classification. The trained model is read-only once training ends.
//!
//! # Example
//!
//! ```no_run
//! use bayes_rs::config::Config;
//! use bayes_rs::eval::run_dataset;
//!
//! fn main() -> bayes_rs::Result<()> {
//!     let config = Config::default();
//!     let report = run_dataset(&config)?;
//!     report.log_summary();
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`corpus`]: Tokenization, labels and document loading
//! - [`model`]: Vocabulary, training and information gain
//! - [`classify`]: Naive Bayes scoring
//! - [`eval`]: Two-track evaluation harness
//! - [`report`]: Run reports for external visualization

pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::{BayesError, Result};
