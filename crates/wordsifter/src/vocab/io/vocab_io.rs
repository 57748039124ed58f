//! # Vocabulary Import / Export

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    errors::WSResult,
    vocab::{
        Vocabulary,
        io::{JsonVocabCodec, SnapshotDecoder, SnapshotEncoder, VocabSnapshot},
    },
};

/// Write a [`Vocabulary`] as JSON.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn export_vocab<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> WSResult<()> {
    export_vocab_with(vocab, writer, &JsonVocabCodec::default())
}

/// Write a [`Vocabulary`] with a custom [`SnapshotEncoder`].
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
/// * `encoder` - the snapshot serializer.
pub fn export_vocab_with<W, E>(
    vocab: &Vocabulary,
    writer: &mut W,
    encoder: &E,
) -> WSResult<()>
where
    W: Write,
    E: SnapshotEncoder + ?Sized,
{
    let snapshot = VocabSnapshot::from_vocab(vocab);
    encoder.encode_snapshot(&snapshot, &mut *writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON [`Vocabulary`].
///
/// ## Arguments
/// * `reader` - the source.
pub fn import_vocab<R: Read>(reader: &mut R) -> WSResult<Vocabulary> {
    import_vocab_with(reader, &JsonVocabCodec::default())
}

/// Read a [`Vocabulary`] with a custom [`SnapshotDecoder`].
///
/// On error no partial vocabulary is returned.
///
/// ## Arguments
/// * `reader` - the source.
/// * `decoder` - the snapshot deserializer.
pub fn import_vocab_with<R, D>(
    reader: &mut R,
    decoder: &D,
) -> WSResult<Vocabulary>
where
    R: Read,
    D: SnapshotDecoder + ?Sized,
{
    Ok(decoder.decode_snapshot(&mut *reader)?.into_vocab())
}

/// Save a [`Vocabulary`] to a JSON file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<P: AsRef<Path>>(
    vocab: &Vocabulary,
    path: P,
) -> WSResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    export_vocab(vocab, &mut writer)
}

/// Load a [`Vocabulary`] from a JSON file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> WSResult<Vocabulary> {
    let mut reader = BufReader::new(File::open(path)?);
    import_vocab(&mut reader)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::errors::WordsifterError;

    struct FakeEncoder {
        data: &'static [u8],
        fail: bool,
    }

    impl SnapshotEncoder for FakeEncoder {
        fn encode_snapshot(
            &self,
            _snapshot: &VocabSnapshot,
            writer: &mut dyn Write,
        ) -> WSResult<()> {
            writer.write_all(self.data)?;
            if self.fail {
                return Err(WordsifterError::VocabEncode("Some error".into()));
            }
            Ok(())
        }
    }

    struct FakeDecoder {
        snapshot: Option<VocabSnapshot>,
    }

    impl SnapshotDecoder for FakeDecoder {
        fn decode_snapshot(
            &self,
            _reader: &mut dyn Read,
        ) -> WSResult<VocabSnapshot> {
            self.snapshot
                .clone()
                .ok_or_else(|| WordsifterError::VocabDecode("Some error".into()))
        }
    }

    #[test]
    fn test_export_default_codec() {
        let vocab = Vocabulary::new(["foo"]);
        let mut buf = Vec::new();
        export_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"max_token_length\":3,\"vocab\":[\"foo\"]}\n"
        );
    }

    #[test]
    fn test_export_with_fake_encoder() {
        let vocab = Vocabulary::empty();

        let mut buf = Vec::new();
        let encoder = FakeEncoder {
            data: b"123123",
            fail: false,
        };
        export_vocab_with(&vocab, &mut buf, &encoder).unwrap();
        assert_eq!(buf, b"123123");

        let mut buf = Vec::new();
        let encoder = FakeEncoder {
            data: b"",
            fail: true,
        };
        let err = export_vocab_with(&vocab, &mut buf, &encoder).unwrap_err();
        assert!(matches!(err, WordsifterError::VocabEncode(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_import_default_codec() {
        let vocab =
            import_vocab(&mut Cursor::new(r#"{"max_token_length":3,"vocab":["foo"]}"#)).unwrap();
        assert_eq!(vocab, Vocabulary::new(["foo"]));

        let vocab = import_vocab(&mut Cursor::new(r#"{"vocab":["token"]}"#)).unwrap();
        assert_eq!(vocab.sorted_tokens(), vec!["token"]);
        assert_eq!(vocab.max_token_length(), 5);

        let err = import_vocab(&mut Cursor::new(r#"{"max_token_length":"x"}"#)).unwrap_err();
        assert!(matches!(err, WordsifterError::VocabDecode(_)));
    }

    #[test]
    fn test_import_with_fake_decoder() {
        let decoder = FakeDecoder {
            snapshot: Some(VocabSnapshot {
                max_token_length: 3,
                vocab: vec!["foo".into(), "bar".into()],
            }),
        };
        let vocab = import_vocab_with(&mut Cursor::new(""), &decoder).unwrap();
        assert_eq!(vocab, Vocabulary::new(["foo", "bar"]));

        let decoder = FakeDecoder { snapshot: None };
        let err = import_vocab_with(&mut Cursor::new(""), &decoder).unwrap_err();
        assert!(matches!(err, WordsifterError::VocabDecode(_)));
    }

    #[test]
    fn test_save_load_path() {
        let vocab = Vocabulary::new(["<w>Lo", "rem</w>", "<w>Ipsum</w>", "-"]);

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.json");

                save_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded = load_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_path() {
        let err = load_vocab_path("/nonexistent/wordsifter/vocab.json").unwrap_err();
        assert!(matches!(err, WordsifterError::Io(_)));
    }
}
