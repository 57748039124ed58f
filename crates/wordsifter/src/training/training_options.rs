//! # Training Options

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WSResult, WordsifterError},
    segmentation::{DEFAULT_SCAN_BUFFER_SIZE, ScanMode},
    training::{CountType, VocabTrainer},
};

/// Default max number of tokens kept in a trained vocabulary.
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 50_000;

/// Default max candidate token length, in characters.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 32;

/// Options for [`VocabTrainer`].
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainOptions {
    /// Max number of tokens kept after ranking.
    pub max_vocab_size: usize,

    /// Max candidate token length, in characters (word markers excluded).
    pub max_token_length: usize,

    /// Max scan buffer size, in bytes; bounds the longest chunk.
    pub scan_buffer_size: usize,

    /// Skip words containing anything but letters and `-`.
    pub words_only_filter: bool,

    /// How the training source is chunked.
    pub scan_mode: ScanMode,

    /// Attach `<w>` / `</w>` to the first / last character of each word.
    pub word_markers: bool,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            max_vocab_size: DEFAULT_MAX_VOCAB_SIZE,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            scan_buffer_size: DEFAULT_SCAN_BUFFER_SIZE,
            words_only_filter: false,
            scan_mode: ScanMode::Words,
            word_markers: true,
        }
    }
}

impl TrainOptions {
    /// Sets the max vocab size.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            max_vocab_size,
            ..self
        }
    }

    /// Sets the max candidate token length.
    pub fn with_max_token_length(
        self,
        max_token_length: usize,
    ) -> Self {
        Self {
            max_token_length,
            ..self
        }
    }

    /// Sets the max scan buffer size, in bytes.
    pub fn with_scan_buffer_size(
        self,
        scan_buffer_size: usize,
    ) -> Self {
        Self {
            scan_buffer_size,
            ..self
        }
    }

    /// Sets the words-only filter.
    pub fn with_words_only_filter(
        self,
        words_only_filter: bool,
    ) -> Self {
        Self {
            words_only_filter,
            ..self
        }
    }

    /// Sets the scan mode.
    pub fn with_scan_mode(
        self,
        scan_mode: ScanMode,
    ) -> Self {
        Self { scan_mode, ..self }
    }

    /// Sets whether word markers are attached.
    pub fn with_word_markers(
        self,
        word_markers: bool,
    ) -> Self {
        Self {
            word_markers,
            ..self
        }
    }

    /// Check the options.
    ///
    /// ## Returns
    /// [`WordsifterError::InvalidConfig`] if any size is zero.
    pub fn validate(&self) -> WSResult<()> {
        for (name, value) in [
            ("max_vocab_size", self.max_vocab_size),
            ("max_token_length", self.max_token_length),
            ("scan_buffer_size", self.scan_buffer_size),
        ] {
            if value == 0 {
                return Err(WordsifterError::InvalidConfig(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    /// The per-word counting subset of the options.
    pub fn tokenize_options(&self) -> TokenizeOptions {
        TokenizeOptions {
            max_token_length: self.max_token_length,
            words_only_filter: self.words_only_filter,
            word_markers: self.word_markers,
        }
    }

    /// Initializes a [`VocabTrainer`] from these options.
    pub fn init<C: CountType>(self) -> WSResult<VocabTrainer<C>> {
        VocabTrainer::new(self)
    }
}

/// Options for [`crate::training::TokenFrequencyTable::tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Max candidate token length, in characters.
    pub max_token_length: usize,

    /// Skip words containing anything but letters and `-`.
    pub words_only_filter: bool,

    /// Attach `<w>` / `</w>` to the first / last character of each word.
    pub word_markers: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        TrainOptions::default().tokenize_options()
    }
}
