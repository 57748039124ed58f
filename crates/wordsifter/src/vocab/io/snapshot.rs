//! # Vocabulary Snapshots

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{
    errors::WSResult,
    vocab::{Vocabulary, vocabulary::max_content_len},
};

/// The persisted form of a [`Vocabulary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabSnapshot {
    /// The max token length, in content characters.
    ///
    /// `0` (or absent) means "recompute from `vocab`".
    #[serde(default)]
    pub max_token_length: usize,

    /// The tokens.
    #[serde(default)]
    pub vocab: Vec<String>,
}

impl VocabSnapshot {
    /// Snapshot a vocabulary; tokens are sorted for reproducible output.
    pub fn from_vocab(vocab: &Vocabulary) -> Self {
        Self {
            max_token_length: vocab.max_token_length(),
            vocab: vocab.sorted_tokens().into_iter().map(String::from).collect(),
        }
    }

    /// Restore the vocabulary.
    ///
    /// A zero `max_token_length` is recomputed from the tokens;
    /// any other value is trusted.
    pub fn into_vocab(self) -> Vocabulary {
        if self.max_token_length == 0 && !self.vocab.is_empty() {
            let max_token_length = max_content_len(&self.vocab);
            log::warn!(
                "vocab snapshot has no max_token_length; recomputed {max_token_length} from {} tokens",
                self.vocab.len()
            );
            return Vocabulary::init(self.vocab.into_iter().collect(), max_token_length);
        }
        Vocabulary::init(self.vocab.into_iter().collect(), self.max_token_length)
    }
}

impl From<&Vocabulary> for VocabSnapshot {
    fn from(vocab: &Vocabulary) -> Self {
        Self::from_vocab(vocab)
    }
}

impl From<VocabSnapshot> for Vocabulary {
    fn from(snapshot: VocabSnapshot) -> Self {
        snapshot.into_vocab()
    }
}

/// Serializes a [`VocabSnapshot`] to bytes.
pub trait SnapshotEncoder {
    /// Write `snapshot` to `writer`.
    fn encode_snapshot(
        &self,
        snapshot: &VocabSnapshot,
        writer: &mut dyn Write,
    ) -> WSResult<()>;
}

/// Deserializes a [`VocabSnapshot`] from bytes.
pub trait SnapshotDecoder {
    /// Read a snapshot from `reader`.
    fn decode_snapshot(
        &self,
        reader: &mut dyn Read,
    ) -> WSResult<VocabSnapshot>;
}
