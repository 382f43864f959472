//! Corpus loading: directory listing and document construction

use crate::corpus::tokenizer::{tokenize_test, tokenize_train};
use crate::corpus::types::{Document, Label};
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Which tokenization rules apply when reading a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// Training rules: strip trailing non-alphabetic char, drop short tokens
    Train,
    /// Classification rules: strip a trailing period only
    Test,
}

/// List the regular files directly contained in a directory (non-recursive).
///
/// Names are sorted so that runs over the same corpus are deterministic.
pub fn list_files<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Load every readable document in a directory.
///
/// An unreadable file is logged and skipped; a missing or unlistable
/// directory is an error.
pub fn load_documents<P: AsRef<Path>>(dir: P, mode: TokenMode) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    let mut documents = Vec::new();

    for name in list_files(dir)? {
        let path = dir.join(&name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };

        let tokens = match mode {
            TokenMode::Train => tokenize_train(&text),
            TokenMode::Test => tokenize_test(&text),
        };

        documents.push(Document {
            label: Label::from_file_name(&name),
            name,
            tokens,
        });
    }

    debug!("Loaded {} documents from {}", documents.len(), dir.display());
    Ok(documents)
}
