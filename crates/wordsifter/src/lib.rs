//! # `wordsifter` Subword Tokenizer
//!
//! `wordsifter` learns a subword vocabulary directly from substring
//! frequencies, then splits text with a greedy longest-match encoder.
//!
//! There is no iterative pair merging: every substring of every word, up to
//! a max token length, is counted; the most frequent substrings form the
//! vocabulary.
//!
//! See:
//! * [`segmentation`] to chunk raw byte streams into words or sentences.
//! * [`training`] to train a [`Vocabulary`].
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`vocab`] to manage vocabularies and vocab io.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordsifter::{TrainOptions, Vocabulary, training::VocabTrainer};
//!
//! let mut trainer: VocabTrainer = TrainOptions::default().init()?;
//! trainer.update_from_samples(["Lorem Ipsum"]);
//!
//! let vocab: Arc<Vocabulary> = trainer.train().into();
//! assert_eq!(vocab.len(), 29);
//!
//! let tokens = vocab.to_default_encoder().encode_text("Ipsum Lorem");
//! assert_eq!(tokens, vec!["<s>", "<w>Ipsum</w>", "<w>Lorem</w>", "</s>"]);
//!
//! let text = vocab.to_default_decoder().decode(&tokens);
//! assert_eq!(text, "Ipsum Lorem");
//! # Ok::<(), wordsifter::WordsifterError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::MarkerDecoder;
#[doc(inline)]
pub use encoders::{EncoderOptions, GreedyMatchEncoder};
#[doc(inline)]
pub use errors::{WSResult, WordsifterError};
#[doc(inline)]
pub use training::TrainOptions;
#[doc(inline)]
pub use vocab::Vocabulary;
