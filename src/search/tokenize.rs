//! Text normalization for token-overlap scoring.

use ahash::AHashSet;

/// Stop words dropped during normalization.
///
/// High-frequency filler in emergency-help phrasings ("what should I do
/// if ...") that would otherwise dominate token overlap. Includes common
/// misspellings seen in panicked queries ("frnd", "im", "dont").
pub(crate) const STOP_WORDS: &[&str] = &[
    "what", "should", "i", "do", "if", "is", "am", "are", "the", "a", "an", "to", "for", "with",
    "my", "of", "in", "on", "at", "and", "or", "be", "can", "able", "someone", "somebody",
    "friend", "frnd", "they", "who", "dont", "don't", "know", "me", "im",
];

/// Normalize text into an ordered token sequence.
///
/// Every non-alphanumeric character is replaced by a space, the result is
/// lower-cased and split on whitespace, and stop words are dropped. Pure and
/// total: any input, including the empty string, yields a token list.
pub(crate) fn normalize(text: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .map(str::to_owned)
        .collect()
}

/// Normalized tokens as a set, for order-insensitive overlap signals.
pub(crate) fn token_set(text: &str) -> AHashSet<String> {
    normalize(text).into_iter().collect()
}
