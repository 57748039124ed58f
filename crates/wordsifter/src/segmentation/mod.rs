//! # Text Segmentation
//!
//! This module exists to factor out chunk scanning of raw byte streams.
//!
//! [`ScanMode`] selects what a chunk is:
//! * `Words` - a maximal run of non-whitespace characters.
//! * `Sentences` - text up to a sentence terminator; see [`is_end_of_sentence`].
//!
//! [`ChunkScanner`] is the pure split function over `(bytes, at_eof)`;
//! [`ChunkReader`] drives it over an [`std::io::Read`] with a bounded buffer.

pub mod chunk_reader;
pub mod chunk_scanner;
pub mod scan_mode;
pub mod sentence_boundary;

#[doc(inline)]
pub use chunk_reader::{ChunkReader, DEFAULT_SCAN_BUFFER_SIZE};
#[doc(inline)]
pub use chunk_scanner::{ChunkScanner, ScanStep};
#[doc(inline)]
pub use scan_mode::ScanMode;
#[doc(inline)]
pub use sentence_boundary::{ABBREVIATION_WINDOW, is_end_of_sentence};
