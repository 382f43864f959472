//! Corpus types and data structures

use serde::{Deserialize, Serialize};

/// Ground-truth category of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    /// Infer the label from a file name.
    ///
    /// A name containing `"spam"` or `"spm"` (case-sensitive) marks the
    /// document as spam; anything else is ham. The naming convention is
    /// the only ground-truth source for the corpora.
    pub fn from_file_name(name: &str) -> Self {
        if name.contains("spam") || name.contains("spm") {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

/// A tokenized document; immutable once constructed
#[derive(Debug, Clone)]
pub struct Document {
    /// File name the document was read from
    pub name: String,
    /// Ground-truth label inferred from the file name
    pub label: Label,
    /// Normalized tokens in document order
    pub tokens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_file_name() {
        assert_eq!(Label::from_file_name("3-1msg1.spam.txt"), Label::Spam);
        assert_eq!(Label::from_file_name("spmsga81.txt"), Label::Spam);
        assert_eq!(Label::from_file_name("5-1279msg3.txt"), Label::Ham);
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        assert_eq!(Label::from_file_name("SPAM-msg1.txt"), Label::Ham);
    }
}
