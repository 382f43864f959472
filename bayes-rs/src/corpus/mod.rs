//! Corpus handling
//!
//! Tokenization, label inference and directory-based document loading.

pub mod loader;
pub mod tokenizer;
pub mod types;

pub use loader::{list_files, load_documents, TokenMode};
pub use tokenizer::{tokenize_test, tokenize_train};
pub use types::{Document, Label};
