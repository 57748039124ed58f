//! # Parallel Encoder

use rayon::prelude::*;

use crate::encoders::GreedyMatchEncoder;

/// Batch-Level Parallel Encoder Wrapper.
///
/// All workers share the inner encoder's vocabulary.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder {
    /// Inner encoder.
    pub inner: GreedyMatchEncoder,
}

impl ParallelRayonEncoder {
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The encoder to wrap.
    pub fn new(inner: GreedyMatchEncoder) -> Self {
        Self { inner }
    }

    /// Encode a single text; see [`GreedyMatchEncoder::encode_text`].
    pub fn encode_text(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.inner.encode_text(text)
    }

    /// Encode a batch of texts in parallel.
    ///
    /// ## Returns
    /// One token sequence per text, in batch order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn encode_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        batch
            .par_iter()
            .map(|text| self.inner.encode_text(text.as_ref()))
            .collect()
    }
}
