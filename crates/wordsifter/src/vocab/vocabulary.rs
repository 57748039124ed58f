//! # Vocabulary

use std::sync::Arc;

use crate::{
    decoders::MarkerDecoder,
    encoders::{EncoderOptions, GreedyMatchEncoder},
    types::{WSHashSet, hash_set_with_capacity},
    vocab::markers::content_len,
};

/// An immutable set of known tokens.
///
/// `max_token_length` is the longest token's length in content
/// characters (word markers excluded); `0` for an empty vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: WSHashSet<String>,
    max_token_length: usize,
}

impl Vocabulary {
    /// Build a vocabulary, deriving `max_token_length` from the tokens.
    ///
    /// ## Arguments
    /// * `tokens` - the token strings; duplicates collapse.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: WSHashSet<String> = tokens.into_iter().map(Into::into).collect();
        let max_token_length = max_content_len(tokens.iter());
        Self {
            tokens,
            max_token_length,
        }
    }

    /// Build a vocabulary with a caller-provided `max_token_length`.
    ///
    /// The length is trusted as-is; tokens longer than it are never matched.
    pub fn init(
        tokens: WSHashSet<String>,
        max_token_length: usize,
    ) -> Self {
        Self {
            tokens,
            max_token_length,
        }
    }

    /// An empty vocabulary.
    pub fn empty() -> Self {
        Self::init(hash_set_with_capacity(0), 0)
    }

    /// Is `token` in the vocabulary?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.tokens.contains(token)
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The longest token length, in content characters.
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// Iterate the tokens, in unspecified order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The tokens, sorted lexicographically.
    pub fn sorted_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.tokens().collect();
        tokens.sort_unstable();
        tokens
    }

    /// Build a [`GreedyMatchEncoder`] with default options.
    pub fn to_default_encoder(self: &Arc<Self>) -> GreedyMatchEncoder {
        GreedyMatchEncoder::new(self.clone(), EncoderOptions::default())
    }

    /// Build a [`MarkerDecoder`].
    pub fn to_default_decoder(&self) -> MarkerDecoder {
        MarkerDecoder::default()
    }
}

/// The max [`content_len`] over `tokens`; `0` when empty.
pub fn max_content_len<I, S>(tokens: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| content_len(t.as_ref()))
        .max()
        .unwrap_or(0)
}
