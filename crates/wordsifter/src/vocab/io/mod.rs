//! # Vocabulary IO
//!
//! Vocabularies persist as a [`VocabSnapshot`] record:
//! ```json
//! {"max_token_length": 3, "vocab": ["<w>a", "b", "c</w>"]}
//! ```
//!
//! The byte format is pluggable through [`SnapshotEncoder`] / [`SnapshotDecoder`];
//! [`JsonVocabCodec`] is the default.
//!
//! ## Saving and Loading A Vocab
//!
//! ```rust,no_run
//! use wordsifter::vocab::{
//!     Vocabulary,
//!     io::{load_vocab_path, save_vocab_path},
//! };
//!
//! fn example(vocab: &Vocabulary) -> wordsifter::WSResult<Vocabulary> {
//!     save_vocab_path(vocab, "vocab.json")?;
//!     load_vocab_path("vocab.json")
//! }
//! ```

mod json_vocab;
mod snapshot;
mod vocab_io;

#[doc(inline)]
pub use json_vocab::JsonVocabCodec;
#[doc(inline)]
pub use snapshot::{SnapshotDecoder, SnapshotEncoder, VocabSnapshot};
#[doc(inline)]
pub use vocab_io::*;
