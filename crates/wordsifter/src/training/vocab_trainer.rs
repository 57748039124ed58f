//! # Vocab Trainer

use std::io::Read;

use crate::{
    errors::WSResult,
    segmentation::ChunkReader,
    training::{
        CountType,
        DEFAULT_MAX_VOCAB_SIZE,
        TokenFrequencyTable,
        TrainOptions,
        select_vocabulary,
    },
    vocab::Vocabulary,
};

/// Trains a [`Vocabulary`] from substring frequencies.
///
/// Counts accumulate across any number of sources; [`VocabTrainer::train`]
/// then ranks them once. There is no incremental update of a trained vocab.
///
/// # Parameters
/// * `C` - the type used to store counts.
#[derive(Debug, Clone)]
pub struct VocabTrainer<C: CountType = u64> {
    options: TrainOptions,
    table: TokenFrequencyTable<C>,
}

impl<C: CountType> VocabTrainer<C> {
    /// Initializes a [`VocabTrainer`].
    ///
    /// ## Arguments
    /// * `options` - the trainer options; validated.
    pub fn new(options: TrainOptions) -> WSResult<Self> {
        options.validate()?;
        Ok(Self {
            // Approximated size; the limit is only a hint.
            table: TokenFrequencyTable::with_capacity(
                options.max_vocab_size.min(DEFAULT_MAX_VOCAB_SIZE),
            ),
            options,
        })
    }

    /// The trainer options.
    pub fn options(&self) -> &TrainOptions {
        &self.options
    }

    /// The frequency table accumulated so far.
    pub fn table(&self) -> &TokenFrequencyTable<C> {
        &self.table
    }

    /// Count the candidate tokens of one chunk of text.
    pub fn update_from_text(
        &mut self,
        text: &str,
    ) {
        self.table.tokenize(text, &self.options.tokenize_options());
    }

    /// Count in-memory samples.
    ///
    /// Samples are split on whitespace directly; the scan buffer bound
    /// does not apply to text that is already in memory.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let options = self.options.tokenize_options();
        for sample in samples {
            self.table.tokenize(sample.as_ref(), &options);
        }
    }

    /// Count a byte stream, chunked by the configured scan mode.
    ///
    /// ## Returns
    /// [`crate::WordsifterError::Scan`] on read failure, or
    /// [`crate::WordsifterError::TokenTooLong`] if a chunk exceeds the scan buffer.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, reader)))]
    pub fn update_from_reader<R: Read>(
        &mut self,
        reader: R,
    ) -> WSResult<()> {
        let options = self.options.tokenize_options();
        let chunks = ChunkReader::new(
            reader,
            self.options.scan_mode,
            self.options.scan_buffer_size,
        )?;

        let mut count = 0usize;
        for chunk in chunks {
            self.table.tokenize(&chunk?, &options);
            count += 1;
        }

        log::info!(
            "Scanned {} {} chunks; {} candidate tokens",
            count,
            self.options.scan_mode,
            self.table.len()
        );
        Ok(())
    }

    /// Sum an externally built frequency table into this trainer.
    pub fn merge_table(
        &mut self,
        table: TokenFrequencyTable<C>,
    ) {
        self.table.merge(table);
    }

    /// Rank the counted tokens and build the [`Vocabulary`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train(self) -> Vocabulary {
        log::info!(
            "Selecting vocabulary: {} candidates, max size {}",
            self.table.len(),
            self.options.max_vocab_size
        );
        select_vocabulary(self.table, self.options.max_vocab_size)
    }
}

/// Train a [`Vocabulary`] from a single byte stream.
///
/// ## Arguments
/// * `reader` - the training source.
/// * `options` - the training options.
pub fn train_from_reader<R: Read>(
    reader: R,
    options: &TrainOptions,
) -> WSResult<Vocabulary> {
    let mut trainer: VocabTrainer<u64> = VocabTrainer::new(options.clone())?;
    trainer.update_from_reader(reader)?;
    Ok(trainer.train())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{errors::WordsifterError, segmentation::ScanMode};

    fn train_plain(
        input: &str,
        options: TrainOptions,
    ) -> WSResult<Vec<String>> {
        let options = options.with_word_markers(false);
        let vocab = train_from_reader(Cursor::new(input), &options)?;
        Ok(vocab.sorted_tokens().into_iter().map(String::from).collect())
    }

    fn sorted(tokens: &[&str]) -> Vec<String> {
        let mut tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        tokens.sort();
        tokens
    }

    #[test]
    fn test_train() {
        let defaults = TrainOptions::default;
        let cases: &[(&str, &str, TrainOptions, &[&str])] = &[
            (
                "word",
                "apple",
                defaults().with_max_token_length(3),
                &[
                    "a", "p", "l", "e", "ap", "app", "pp", "ppl", "pl", "ple", "le",
                ],
            ),
            (
                "words",
                "foo bar",
                defaults(),
                &["f", "fo", "foo", "o", "oo", "b", "ba", "bar", "a", "ar", "r"],
            ),
            ("not word", "[a]=1", defaults(), &["[", "a", "]", "=", "1"]),
            (
                "max token length",
                "aaaaaaaaa",
                defaults().with_max_token_length(5),
                &["a", "aa", "aaa", "aaaa", "aaaaa"],
            ),
            (
                "max tokens",
                "aaaaaaaaa",
                defaults().with_max_vocab_size(1),
                &["a"],
            ),
            ("empty", "", defaults(), &[]),
        ];

        for (name, input, options, tokens) in cases {
            assert_eq!(
                train_plain(input, options.clone()).unwrap(),
                sorted(tokens),
                "case: {name}"
            );
        }
    }

    #[test]
    fn test_train_token_too_long() {
        let err = train_plain("asdasdasd", TrainOptions::default().with_scan_buffer_size(1))
            .unwrap_err();
        assert!(err.is_token_too_long());
    }

    #[test]
    fn test_train_with_markers() {
        let vocab = train_from_reader(Cursor::new("Lorem Ipsum"), &TrainOptions::default()).unwrap();
        assert_eq!(vocab.len(), 29);
        assert_eq!(vocab.max_token_length(), 5);
        assert!(vocab.contains("<w>Lorem</w>"));
        assert!(vocab.contains("m</w>"));
        assert!(!vocab.contains("Lorem"));

        let vocab = train_from_reader(Cursor::new("x"), &TrainOptions::default()).unwrap();
        assert_eq!(vocab.sorted_tokens(), vec!["<w>x</w>"]);
        assert_eq!(vocab.max_token_length(), 1);
    }

    #[test]
    fn test_sentence_mode_counts_like_word_mode() {
        let text = "The cat sat. The dog ran!\nA bird flew by.";
        let words = train_from_reader(Cursor::new(text), &TrainOptions::default()).unwrap();
        let sentences = train_from_reader(
            Cursor::new(text),
            &TrainOptions::default().with_scan_mode(ScanMode::Sentences),
        )
        .unwrap();
        assert_eq!(words, sentences);
    }

    #[test]
    fn test_sentence_mode_buffer_bounds_sentences() {
        let options = TrainOptions::default()
            .with_scan_mode(ScanMode::Sentences)
            .with_scan_buffer_size(8);
        let err = train_from_reader(Cursor::new("one two three four"), &options).unwrap_err();
        assert!(matches!(err, WordsifterError::TokenTooLong { buffer_size: 8 }));
    }

    #[test]
    fn test_unbounded_limits() {
        let options = TrainOptions::default()
            .with_max_vocab_size(usize::MAX)
            .with_max_token_length(usize::MAX)
            .with_word_markers(false);
        assert_eq!(
            train_plain("ab", options).unwrap(),
            sorted(&["a", "b", "ab"])
        );
    }

    #[test]
    fn test_split_char_after_whitespace() {
        let options = TrainOptions::default().with_scan_buffer_size(4);
        let vocab = train_from_reader(Cursor::new("   é"), &options).unwrap();
        assert_eq!(vocab.sorted_tokens(), vec!["<w>é</w>"]);
    }

    #[test]
    fn test_incremental_updates() {
        let options = TrainOptions::default().with_word_markers(false);
        let mut trainer: VocabTrainer<u32> = options.clone().init().unwrap();
        trainer.update_from_samples(["ab", "b"]);
        trainer.update_from_text("ab");
        trainer.update_from_reader(Cursor::new("c")).unwrap();

        assert_eq!(trainer.table().get("b"), 3);
        assert_eq!(trainer.table().get("ab"), 2);
        assert_eq!(trainer.options(), &options);

        let vocab = trainer.train();
        assert_eq!(vocab.sorted_tokens(), vec!["a", "ab", "b", "c"]);
    }
}
