//! Text to token segmentation: word bounds, punctuation kept as tokens.

use unicode_segmentation::UnicodeSegmentation;

/// Characters whose tokens the pipelines discard. Matching is substring
/// containment: `"?!"` is a hit, `"!?"` is not.
const DROPPED: &str = "?!,.";

/// Split text into tokens on Unicode word bounds, discarding whitespace.
/// Punctuation segments are kept so downstream filters see them.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|s| !s.chars().all(char::is_whitespace))
        .map(str::to_string)
        .collect()
}

/// Whether a token is discarded by the sentence pipelines.
pub fn is_dropped(token: &str) -> bool {
    DROPPED.contains(token)
}
