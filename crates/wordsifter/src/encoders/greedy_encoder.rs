//! # Greedy Longest-Match Encoder
//!
//! Each word is split left to right: at every position the longest
//! vocabulary token wins. Candidate windows are sized in content
//! characters; `<w>` / `</w>` are attached to candidates that touch the
//! start / end of the word before lookup.
//!
//! A position no token covers emits [`UNKNOWN_TOKEN`] and advances by one
//! character, so every word of `n` characters yields between `1` and `n`
//! tokens.

use std::{io::Read, sync::Arc};

use crate::{
    encoders::EncoderOptions,
    errors::WSResult,
    segmentation::{ChunkReader, ChunkScanner, ScanMode},
    vocab::{
        Vocabulary,
        markers::{BEGIN_OF_SENTENCE, BEGIN_OF_WORD, END_OF_SENTENCE, END_OF_WORD, UNKNOWN_TOKEN},
    },
};

/// Splits text into vocabulary tokens by greedy longest match.
///
/// The encoder holds a shared, immutable [`Vocabulary`] and is cheap to
/// clone; it is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct GreedyMatchEncoder {
    vocab: Arc<Vocabulary>,
    options: EncoderOptions,
}

impl GreedyMatchEncoder {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary to match against.
    /// * `options` - the encoder options.
    pub fn new(
        vocab: Arc<Vocabulary>,
        options: EncoderOptions,
    ) -> Self {
        Self { vocab, options }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    /// The encoder options.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode a byte stream.
    ///
    /// The stream is chunked into sentences under the configured scan
    /// buffer bound; each sentence is framed by `<s>` / `</s>`.
    ///
    /// ## Returns
    /// The tokens, or [`crate::WordsifterError::Scan`] /
    /// [`crate::WordsifterError::TokenTooLong`] from the scanner.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, reader)))]
    pub fn try_encode_reader<R: Read>(
        &self,
        reader: R,
    ) -> WSResult<Vec<String>> {
        self.options.validate()?;
        let chunks = ChunkReader::new(reader, ScanMode::Sentences, self.options.scan_buffer_size)?;

        let mut tokens = Vec::new();
        for sentence in chunks {
            self.encode_sentence(&sentence?, &mut tokens);
        }
        Ok(tokens)
    }

    /// Encode in-memory text.
    ///
    /// Same output as [`Self::try_encode_reader`], without the scan buffer
    /// bound; cannot fail.
    pub fn encode_text(
        &self,
        text: &str,
    ) -> Vec<String> {
        let scanner = ChunkScanner::new(ScanMode::Sentences);
        let data = text.as_bytes();

        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < data.len() {
            let step = scanner.scan(&data[pos..], true);
            pos += step.advance;
            match step.chunk {
                // Chunks are cut on character boundaries of valid UTF-8.
                Some(chunk) => {
                    self.encode_sentence(&String::from_utf8_lossy(chunk), &mut tokens)
                }
                None => break,
            }
        }
        tokens
    }

    /// Encode one sentence, appending to `tokens`.
    ///
    /// Emits `<s>`, the tokens of each whitespace-delimited word, then `</s>`.
    pub fn encode_sentence(
        &self,
        sentence: &str,
        tokens: &mut Vec<String>,
    ) {
        tokens.push(BEGIN_OF_SENTENCE.to_string());
        for word in sentence.split_whitespace() {
            self.encode_word_append(word, tokens);
        }
        tokens.push(END_OF_SENTENCE.to_string());
    }

    /// Encode one word, appending to `tokens`.
    ///
    /// ## Arguments
    /// * `word` - a single word; must not contain whitespace.
    /// * `tokens` - the target buffer.
    pub fn encode_word_append(
        &self,
        word: &str,
        tokens: &mut Vec<String>,
    ) {
        let offsets: Vec<usize> = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(word.len()))
            .collect();
        let n = offsets.len() - 1;
        let max_len = self.vocab.max_token_length();

        let mut candidate = String::with_capacity(word.len() + 8);
        let mut i = 0;
        while i < n {
            let window = max_len.min(n - i);

            let mut matched = None;
            for j in (i + 1..=i + window).rev() {
                self.build_candidate(word, &offsets, i, j, &mut candidate);
                if self.vocab.contains(&candidate) {
                    matched = Some(j);
                    break;
                }
            }

            match matched {
                Some(j) => {
                    tokens.push(candidate.clone());
                    i = j;
                }
                None => {
                    tokens.push(UNKNOWN_TOKEN.to_string());
                    i += 1;
                }
            }
        }
    }

    /// Write the candidate for chars `i..j` of `word`, with word markers.
    fn build_candidate(
        &self,
        word: &str,
        offsets: &[usize],
        i: usize,
        j: usize,
        candidate: &mut String,
    ) {
        let n = offsets.len() - 1;
        candidate.clear();
        if self.options.word_markers && i == 0 {
            candidate.push_str(BEGIN_OF_WORD);
        }
        candidate.push_str(&word[offsets[i]..offsets[j]]);
        if self.options.word_markers && j == n {
            candidate.push_str(END_OF_WORD);
        }
    }
}
