//! Naive Bayes document scoring

use crate::corpus::Label;
use crate::model::{FeatureSet, TrainedModel};

/// Outcome of scoring one document
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: Label,
    /// Probability product of the winning category
    pub score: f64,
}

/// Score a tokenized document against a trained model.
///
/// Each recognized token multiplies the spam score by its P(term | spam)
/// and the ham score by its P(term | ham); the corpus priors are
/// multiplied in last. Tokens absent from the vocabulary contribute no
/// evidence, and when a feature set is supplied tokens outside it are
/// skipped the same way. A tie is decided as spam.
///
/// Scores are raw probability products, not log-probabilities; they
/// underflow toward zero on very long documents, but both sides shrink
/// together and the decision boundary is unaffected at the corpus sizes
/// this pipeline handles.
pub fn classify(
    tokens: &[String],
    model: &TrainedModel,
    features: Option<&FeatureSet>,
) -> Classification {
    let mut spam_score = 1.0f64;
    let mut ham_score = 1.0f64;

    for token in tokens {
        if let Some(set) = features {
            if !set.contains(token.as_str()) {
                continue;
            }
        }
        if let Some(entry) = model.vocabulary.get(token) {
            spam_score *= entry.p_given_spam;
            ham_score *= entry.p_given_ham;
        }
    }

    spam_score *= model.stats.p_spam;
    ham_score *= model.stats.p_ham;

    if spam_score < ham_score {
        Classification {
            label: Label::Ham,
            score: ham_score,
        }
    } else {
        Classification {
            label: Label::Spam,
            score: spam_score,
        }
    }
}
