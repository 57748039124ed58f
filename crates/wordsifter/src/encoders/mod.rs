//! # Token Encoders
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordsifter::vocab::Vocabulary;
//!
//! let vocab = Arc::new(Vocabulary::new(["<w>Fo", "o</w>", "<w>fo", "o.</w>"]));
//! let encoder = vocab.to_default_encoder();
//!
//! assert_eq!(
//!     encoder.encode_text("Foo foo."),
//!     vec!["<s>", "<w>Fo", "o</w>", "<w>fo", "o.</w>", "</s>"],
//! );
//! ```

mod encoder_options;
mod greedy_encoder;

#[doc(inline)]
pub use encoder_options::EncoderOptions;
#[doc(inline)]
pub use greedy_encoder::GreedyMatchEncoder;
