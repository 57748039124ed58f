//! # Reserved Marker Tokens
//!
//! Structural sentinels injected at word and sentence boundaries.
//! Word markers attach to the first / last content character of a token;
//! sentence markers and the unknown marker are emitted as standalone tokens.

/// Begin-of-word marker.
pub const BEGIN_OF_WORD: &str = "<w>";

/// End-of-word marker.
pub const END_OF_WORD: &str = "</w>";

/// Begin-of-sentence marker.
pub const BEGIN_OF_SENTENCE: &str = "<s>";

/// End-of-sentence marker.
pub const END_OF_SENTENCE: &str = "</s>";

/// Marker for a character no vocabulary token covers.
pub const UNKNOWN_TOKEN: &str = "<u>";

/// Split the word markers off a token.
///
/// ## Returns
/// `(begins_word, content, ends_word)`.
pub fn split_word_markers(token: &str) -> (bool, &str, bool) {
    let (begins, rest) = match token.strip_prefix(BEGIN_OF_WORD) {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (content, ends) = match rest.strip_suffix(END_OF_WORD) {
        Some(content) => (content, true),
        None => (rest, false),
    };
    (begins, content, ends)
}

/// The length of a token in content characters, net of word markers.
pub fn content_len(token: &str) -> usize {
    split_word_markers(token).1.chars().count()
}
