//! Vocabulary types and corpus statistics

use std::collections::HashMap;

/// Per-term statistics accumulated during training
#[derive(Debug, Clone, Default)]
pub struct TermEntry {
    /// Occurrences across the whole training corpus
    pub total_count: u64,
    /// Occurrences inside spam-labeled documents; never exceeds `total_count`
    pub spam_count: u64,
    /// P(term | spam), Laplace-smoothed; populated after the counting pass
    pub p_given_spam: f64,
    /// P(term | ham), Laplace-smoothed; populated after the counting pass
    pub p_given_ham: f64,
}

/// Term-to-statistics mapping built once during training, read-only after
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: HashMap<String, TermEntry>,
    total_occurrences: u64,
}

impl Vocabulary {
    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of all counted token occurrences over the training corpus
    pub fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    pub fn get(&self, term: &str) -> Option<&TermEntry> {
        self.terms.get(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TermEntry)> {
        self.terms.iter()
    }

    /// Count one occurrence of `term`, attributing it to spam when the
    /// containing document is spam-labeled.
    pub(crate) fn record(&mut self, term: &str, is_spam: bool) {
        let entry = self
            .terms
            .entry(term.to_string())
            .or_insert_with(TermEntry::default);
        entry.total_count += 1;
        if is_spam {
            entry.spam_count += 1;
        }
        self.total_occurrences += 1;
    }

    /// Populate Laplace-smoothed conditional probabilities for every term.
    ///
    /// With add-one smoothing both probabilities land strictly inside
    /// (0, 1), so no later product can collapse to zero from a single term.
    pub(crate) fn smooth(&mut self) {
        for entry in self.terms.values_mut() {
            let total = entry.total_count as f64;
            let spam = entry.spam_count as f64;
            entry.p_given_spam = (spam + 1.0) / (total + 2.0);
            entry.p_given_ham = ((total - spam) + 1.0) / (total + 2.0);
        }
    }
}

/// Label distribution of the training corpus; computed once after training
#[derive(Debug, Clone)]
pub struct CorpusStats {
    pub num_train_docs: usize,
    pub spam_docs: usize,
    /// Prior probability of spam, `spam_docs / num_train_docs`
    pub p_spam: f64,
    /// Prior probability of ham, `1 - p_spam`
    pub p_ham: f64,
    /// Base-2 entropy of the prior distribution
    pub prior_entropy: f64,
}

/// A trained vocabulary with its corpus priors
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub vocabulary: Vocabulary,
    pub stats: CorpusStats,
}
