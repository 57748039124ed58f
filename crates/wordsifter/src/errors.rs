//! # Error Types

/// Errors from wordsifter operations.
#[derive(Debug, thiserror::Error)]
pub enum WordsifterError {
    /// Reading the training or encoding source failed.
    #[error("file scan: {0}")]
    Scan(#[source] std::io::Error),

    /// A single chunk did not fit into the scan buffer.
    ///
    /// Callers may retry with a larger buffer.
    #[error("token too long: chunk exceeds the {buffer_size} byte scan buffer")]
    TokenTooLong {
        /// The configured scan buffer size, in bytes.
        buffer_size: usize,
    },

    /// Persisted vocabulary data is malformed.
    #[error("vocab decode: {0}")]
    VocabDecode(String),

    /// A vocabulary snapshot could not be serialized.
    #[error("vocab encode: {0}")]
    VocabEncode(String),

    /// Options failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WordsifterError {
    /// Is this a scan-buffer exhaustion error?
    pub fn is_token_too_long(&self) -> bool {
        matches!(self, WordsifterError::TokenTooLong { .. })
    }
}

/// Result type for wordsifter operations.
pub type WSResult<T> = core::result::Result<T, WordsifterError>;
