//! Whitespace tokenization with trailing-punctuation stripping
//!
//! Two rule sets apply: the training rules strip one trailing
//! non-alphabetic character and drop short tokens, while the
//! classification rules only strip a trailing period. No case-folding
//! and no stemming take place in either mode.

/// Tokenize raw text for the training pass.
///
/// Runs of whitespace collapse into single separators; if a token's final
/// character is not alphabetic exactly that one character is stripped;
/// tokens of length <= 1 are discarded.
pub fn tokenize_train(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in text.lines() {
        for raw in line.split_whitespace() {
            let token = strip_trailing_non_alpha(raw);
            if token.chars().count() > 1 {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}

/// Tokenize raw text for classification.
///
/// Only a single trailing `'.'` is stripped; no length filter applies.
/// Tokens unknown to the trained vocabulary are skipped later, at
/// scoring time.
pub fn tokenize_test(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in text.lines() {
        for raw in line.split_whitespace() {
            let token = raw.strip_suffix('.').unwrap_or(raw);
            if !token.is_empty() {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}

fn strip_trailing_non_alpha(raw: &str) -> &str {
    match raw.chars().last() {
        Some(c) if !c.is_alphabetic() => &raw[..raw.len() - c.len_utf8()],
        _ => raw,
    }
}
