//! # Marker Decoder

use std::io::Write;

use crate::{
    errors::WSResult,
    vocab::markers::{BEGIN_OF_SENTENCE, BEGIN_OF_WORD, END_OF_SENTENCE, END_OF_WORD},
};

/// Reassembles text from marker-delimited tokens.
///
/// Sentence markers contribute nothing; a `<w>` prefix becomes a single
/// space; every other token is appended as-is. Unknown tokens pass through,
/// so decoding never fails on content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerDecoder {}

impl MarkerDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self {}
    }

    /// Decode a single token.
    ///
    /// ## Returns
    /// `(starts_word, text)`.
    pub fn decode_token<'a>(
        &self,
        token: &'a str,
    ) -> (bool, &'a str) {
        let token = token.strip_suffix(BEGIN_OF_SENTENCE).unwrap_or(token);
        let token = token.strip_suffix(END_OF_SENTENCE).unwrap_or(token);
        let token = token.strip_suffix(END_OF_WORD).unwrap_or(token);

        match token.strip_prefix(BEGIN_OF_WORD) {
            Some(rest) => (true, rest),
            None => (false, token),
        }
    }

    /// Decode a token sequence into text.
    ///
    /// The result has leading and trailing whitespace trimmed.
    pub fn decode<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> String {
        let mut buf = String::with_capacity(tokens.iter().map(|t| t.as_ref().len()).sum());
        for token in tokens {
            let (starts_word, text) = self.decode_token(token.as_ref());
            if starts_word {
                buf.push(' ');
            }
            buf.push_str(text);
        }

        let trimmed = buf.trim();
        if trimmed.len() == buf.len() {
            buf
        } else {
            trimmed.to_string()
        }
    }

    /// Decode a token sequence and write the text to `writer`.
    ///
    /// ## Returns
    /// The number of bytes written; the only failure is the sink's.
    pub fn decode_to_writer<S, W>(
        &self,
        tokens: &[S],
        writer: &mut W,
    ) -> WSResult<usize>
    where
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let text = self.decode(tokens);
        writer.write_all(text.as_bytes())?;
        Ok(text.len())
    }
}
