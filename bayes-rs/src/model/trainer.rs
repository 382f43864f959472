//! Single-pass Naive Bayes training

use crate::corpus::{Document, Label};
use crate::error::{BayesError, Result};
use crate::model::entropy_term;
use crate::model::types::{CorpusStats, TrainedModel, Vocabulary};
use tracing::info;

/// Train a model over a labeled corpus in a single pass.
///
/// Every token of every document increments its term's total count, and
/// its spam count when the document is spam-labeled. Priors come from the
/// document label distribution, and conditional probabilities are
/// Laplace-smoothed once counting is done. Re-training means calling this
/// again on a fresh corpus; the returned model is never mutated.
///
/// An empty corpus is rejected up front: priors and entropy would be
/// undefined, and no partial vocabulary may escape a failed pass.
pub fn train(documents: &[Document]) -> Result<TrainedModel> {
    if documents.is_empty() {
        return Err(BayesError::EmptyTrainingSet);
    }

    let mut vocabulary = Vocabulary::default();
    let mut spam_docs = 0usize;

    for document in documents {
        let is_spam = document.label == Label::Spam;
        if is_spam {
            spam_docs += 1;
        }
        for token in &document.tokens {
            vocabulary.record(token, is_spam);
        }
    }

    let p_spam = spam_docs as f64 / documents.len() as f64;
    let p_ham = 1.0 - p_spam;
    let prior_entropy = entropy_term(p_spam) + entropy_term(p_ham);

    vocabulary.smooth();

    info!(
        "Trained on {} documents ({} spam), vocabulary size {}",
        documents.len(),
        spam_docs,
        vocabulary.len()
    );

    Ok(TrainedModel {
        vocabulary,
        stats: CorpusStats {
            num_train_docs: documents.len(),
            spam_docs,
            p_spam,
            p_ham,
            prior_entropy,
        },
    })
}
