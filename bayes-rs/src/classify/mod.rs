//! Naive Bayes classification
//!
//! Scores tokenized documents against a trained model, optionally
//! restricted to a k-best feature subset.

pub mod classifier;

pub use classifier::{classify, Classification};
