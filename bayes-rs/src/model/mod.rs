//! Naive Bayes model
//!
//! Vocabulary construction, prior estimation with Laplace smoothing, and
//! information-gain ranking for k-best feature selection.

pub mod gain;
pub mod trainer;
pub mod types;

pub use gain::{rank_terms, select_top_k, FeatureSet, GainRecord};
pub use trainer::train;
pub use types::{CorpusStats, TermEntry, TrainedModel, Vocabulary};

/// One `-p * log2(p)` entropy term, with the `0 * log2(0) = 0` convention.
pub(crate) fn entropy_term(p: f64) -> f64 {
    if p <= 0.0 {
        0.0
    } else {
        -p * p.log2()
    }
}
