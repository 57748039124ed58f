//! # Encoder Options

use crate::{
    errors::{WSResult, WordsifterError},
    segmentation::DEFAULT_SCAN_BUFFER_SIZE,
};

/// Options for [`crate::encoders::GreedyMatchEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Max scan buffer size, in bytes, for streamed input.
    pub scan_buffer_size: usize,

    /// Attach `<w>` / `</w>` to the first / last character of each word.
    ///
    /// Must match the setting the vocabulary was trained with.
    pub word_markers: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            scan_buffer_size: DEFAULT_SCAN_BUFFER_SIZE,
            word_markers: true,
        }
    }
}

impl EncoderOptions {
    /// Sets the max scan buffer size, in bytes.
    pub fn with_scan_buffer_size(
        self,
        scan_buffer_size: usize,
    ) -> Self {
        Self {
            scan_buffer_size,
            ..self
        }
    }

    /// Sets whether word markers are attached.
    pub fn with_word_markers(
        self,
        word_markers: bool,
    ) -> Self {
        Self {
            word_markers,
            ..self
        }
    }

    /// Check the options.
    pub fn validate(&self) -> WSResult<()> {
        if self.scan_buffer_size == 0 {
            return Err(WordsifterError::InvalidConfig(
                "scan_buffer_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_options() {
        let options = EncoderOptions::default();
        assert_eq!(options.scan_buffer_size, 65_536);
        assert!(options.word_markers);
        options.validate().unwrap();

        let options = options.with_scan_buffer_size(0).with_word_markers(false);
        assert!(!options.word_markers);
        assert!(matches!(
            options.validate(),
            Err(WordsifterError::InvalidConfig(_))
        ));
    }
}
