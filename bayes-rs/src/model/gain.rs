//! Information-gain ranking and k-best feature selection

use crate::error::{BayesError, Result};
use crate::model::entropy_term;
use crate::model::types::TrainedModel;
use std::collections::HashSet;
use tracing::info;

/// Entropy and information gain of one vocabulary term
#[derive(Debug, Clone)]
pub struct GainRecord {
    pub term: String,
    /// Base-2 entropy of the class-weighted conditional probabilities
    pub posterior_entropy: f64,
    /// Prior entropy reduced by the term's occurrence-weighted contribution
    pub gain: f64,
}

/// Terms retained by k-best selection
pub type FeatureSet = HashSet<String>;

/// Rank every vocabulary term by information gain, ascending.
///
/// For each term the spam- and ham-weighted contributions are the corpus
/// priors times the term's conditional probabilities. The gain is the
/// prior entropy minus both contributions weighted by the term's share of
/// all counted occurrences. The ordering is ascending so that selection
/// takes the tail of the list; the highest-gain terms are the survivors.
pub fn rank_terms(model: &TrainedModel) -> Vec<GainRecord> {
    let stats = &model.stats;
    let total_occurrences = model.vocabulary.total_occurrences() as f64;

    let mut records: Vec<GainRecord> = model
        .vocabulary
        .iter()
        .map(|(term, entry)| {
            let spam_weighted = stats.p_spam * entry.p_given_spam;
            let ham_weighted = stats.p_ham * entry.p_given_ham;
            let posterior_entropy = entropy_term(spam_weighted) + entropy_term(ham_weighted);
            let occurrence_weight = entry.total_count as f64 / total_occurrences;
            let gain = stats.prior_entropy
                - occurrence_weight * spam_weighted
                - occurrence_weight * ham_weighted;
            GainRecord {
                term: term.clone(),
                posterior_entropy,
                gain,
            }
        })
        .collect();

    records.sort_by(|a, b| a.gain.total_cmp(&b.gain));
    records
}

/// Keep the top `k` fraction of an ascending ranking as a feature set.
///
/// `k = 1.0` keeps the whole vocabulary; as `k` approaches zero the set
/// degenerates toward empty and classification falls back to the priors.
pub fn select_top_k(ranked: &[GainRecord], k: f64) -> Result<FeatureSet> {
    if !(k > 0.0 && k <= 1.0) {
        return Err(BayesError::Config(format!(
            "feature fraction must be in (0, 1], got {k}"
        )));
    }

    let start = ((1.0 - k) * ranked.len() as f64) as usize;
    let selected: FeatureSet = ranked[start..].iter().map(|r| r.term.clone()).collect();

    info!(
        "Dimensionality reduction: {} terms initially, {} remaining",
        ranked.len(),
        selected.len()
    );
    Ok(selected)
}
