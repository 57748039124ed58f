//! # Token Decoders
//!
//! ## Example
//!
//! ```rust
//! use wordsifter::decoders::MarkerDecoder;
//!
//! let decoder = MarkerDecoder::new();
//! let text = decoder.decode(&["<s>", "<w>Th", "is</w>", "<w>is</w>", "</s>"]);
//! assert_eq!(text, "This is");
//! ```

mod marker_decoder;

#[doc(inline)]
pub use marker_decoder::MarkerDecoder;
