//! # Vocabulary Training
//!
//! Training is a single pass:
//! * a [`crate::segmentation::ChunkReader`] chunks the source into words or sentences,
//! * [`TokenFrequencyTable::tokenize`] counts every candidate substring of each word,
//! * [`select_vocabulary`] keeps the most frequent candidates.
//!
//! This is not merge-based BPE; the vocabulary is read directly off the
//! substring frequency table.
//!
//! ## Training Example
//!
//! ```rust,no_run
//! use std::{fs::File, sync::Arc};
//!
//! use wordsifter::{
//!     training::{TrainOptions, VocabTrainer},
//!     vocab::{Vocabulary, io::save_vocab_path},
//! };
//!
//! fn example(paths: &[&str]) -> wordsifter::WSResult<()> {
//!     let options = TrainOptions::default().with_max_vocab_size(20_000);
//!
//!     let mut trainer: VocabTrainer = options.init()?;
//!     for path in paths {
//!         trainer.update_from_reader(File::open(path)?)?;
//!     }
//!
//!     let vocab: Arc<Vocabulary> = trainer.train().into();
//!     save_vocab_path(&vocab, "vocab.json")?;
//!
//!     let encoder = vocab.to_default_encoder();
//!     let tokens = encoder.encode_text("Hello world.");
//!     println!("{tokens:?}");
//!     Ok(())
//! }
//! ```

mod frequency_table;
mod training_options;
mod training_types;
mod vocab_selector;
mod vocab_trainer;

#[doc(inline)]
pub use frequency_table::{TokenFrequencyTable, WeightedToken, is_word_char};
#[doc(inline)]
pub use training_options::{
    DEFAULT_MAX_TOKEN_LENGTH,
    DEFAULT_MAX_VOCAB_SIZE,
    TokenizeOptions,
    TrainOptions,
};
#[doc(inline)]
pub use training_types::CountType;
#[doc(inline)]
pub use vocab_selector::select_vocabulary;
#[doc(inline)]
pub use vocab_trainer::{VocabTrainer, train_from_reader};
