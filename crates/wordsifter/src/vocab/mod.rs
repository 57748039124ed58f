//! # Token Vocabularies
//!
//! A [`Vocabulary`] is an immutable set of token strings plus the max
//! token length used to size the encoder's match window.
//!
//! Tokens may carry the reserved word [`markers`]; lengths are always
//! measured in content characters, net of those markers.
//!
//! See [`io`] for persisting and restoring vocabularies.

pub mod io;
pub mod markers;
pub mod vocabulary;

#[doc(inline)]
pub use vocabulary::Vocabulary;
