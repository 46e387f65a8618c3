//! String processing for indexing and querying.
//!
//! Indexed text and query text go through the same `normalize` so that a
//! query typed as "cafe" finds a page titled "Café". Splitting differs in one
//! way: indexed words also yield their camel-case parts, queries don't.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization for WASM builds without unicode-normalization.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Query text as the length gate sees it: trimmed and lowercased.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Raw words of `text`: maximal runs of alphanumerics (and the marks attached to them).
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && !is_combining_mark(c))
        .filter(|word| !word.is_empty())
}

/// Split a word at case transitions: `GtkWidget` → `Gtk`, `Widget`;
/// `HTMLParser` → `HTML`, `Parser`; `Gtk4Window` → `Gtk4`, `Window`.
fn camel_parts(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let (idx, cur) = chars[i];
        let next_is_lower = chars.get(i + 1).is_some_and(|&(_, c)| c.is_lowercase());
        let boundary = cur.is_uppercase()
            && (prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower));
        if boundary {
            parts.push(&word[start..idx]);
            start = idx;
        }
    }
    parts.push(&word[start..]);
    parts
}

fn push_unique(tokens: &mut Vec<String>, token: String) {
    if !token.is_empty() && !tokens.contains(&token) {
        tokens.push(token);
    }
}

/// Tokenize field text for the forward index.
///
/// Every word becomes a token; words with interior case transitions also
/// contribute their parts as sub-tokens, so "widget" is a prefix of a token
/// in "GtkWidget". Tokens are normalized and deduplicated, first occurrence wins.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in words(text) {
        push_unique(&mut tokens, normalize(word));
        let parts = camel_parts(word);
        if parts.len() > 1 {
            for part in parts {
                push_unique(&mut tokens, normalize(part));
            }
        }
    }
    tokens
}

/// Split a query into search terms. No camel splitting: the user typed the
/// prefix they want.
pub fn query_terms(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    for word in words(query) {
        push_unique(&mut terms, normalize(word));
    }
    terms
}
