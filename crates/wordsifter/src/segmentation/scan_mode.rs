//! # Scan Mode

use serde::{Deserialize, Serialize};

/// How a [`crate::segmentation::ChunkScanner`] delimits chunks.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScanMode {
    /// Maximal runs of non-whitespace characters.
    #[default]
    Words,

    /// Sentences, closed by `\r`, `\n`, `!`, `?` or a sentence-ending `.`.
    Sentences,
}
