//! # JSON Vocabulary Codec

use std::io::{Read, Write};

use crate::{
    errors::{WSResult, WordsifterError},
    vocab::io::{SnapshotDecoder, SnapshotEncoder, VocabSnapshot},
};

/// Reads and writes [`VocabSnapshot`]s as a single-line JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonVocabCodec {
    /// Pretty-print on write.
    pub pretty: bool,
}

impl JsonVocabCodec {
    /// Set pretty-printing.
    pub fn with_pretty(
        self,
        pretty: bool,
    ) -> Self {
        Self { pretty }
    }
}

impl SnapshotEncoder for JsonVocabCodec {
    fn encode_snapshot(
        &self,
        snapshot: &VocabSnapshot,
        writer: &mut dyn Write,
    ) -> WSResult<()> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, snapshot)
        } else {
            serde_json::to_writer(&mut *writer, snapshot)
        };
        result.map_err(|e| WordsifterError::VocabEncode(e.to_string()))?;
        writeln!(writer)?;
        Ok(())
    }
}

impl SnapshotDecoder for JsonVocabCodec {
    fn decode_snapshot(
        &self,
        reader: &mut dyn Read,
    ) -> WSResult<VocabSnapshot> {
        serde_json::from_reader(reader).map_err(|e| WordsifterError::VocabDecode(e.to_string()))
    }
}
