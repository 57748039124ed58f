//! # Bounded-Buffer Chunk Reader

use std::io::{ErrorKind, Read};

use crate::{
    errors::{WSResult, WordsifterError},
    segmentation::{ChunkScanner, ScanMode},
};

/// Default max scan buffer size, in bytes.
pub const DEFAULT_SCAN_BUFFER_SIZE: usize = 64 * 1024;

/// Initial buffer allocation; the buffer doubles up to the max size.
const INITIAL_BUFFER_SIZE: usize = 4 * 1024;

/// Streams chunks from a [`Read`] source.
///
/// Memory is bounded by `max_buffer_size`; a chunk that does not fit
/// is reported as [`WordsifterError::TokenTooLong`].
pub struct ChunkReader<R: Read> {
    reader: R,
    scanner: ChunkScanner,
    max_buffer_size: usize,

    buf: Vec<u8>,
    start: usize,
    end: usize,

    at_eof: bool,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Create a new chunk reader.
    ///
    /// ## Arguments
    /// * `reader` - the byte source.
    /// * `mode` - the chunk scan mode.
    /// * `max_buffer_size` - the max buffer size, in bytes; must be > 0.
    pub fn new(
        reader: R,
        mode: ScanMode,
        max_buffer_size: usize,
    ) -> WSResult<Self> {
        if max_buffer_size == 0 {
            return Err(WordsifterError::InvalidConfig(
                "scan_buffer_size must be greater than zero".into(),
            ));
        }

        Ok(Self {
            reader,
            scanner: ChunkScanner::new(mode),
            max_buffer_size,
            buf: vec![0; INITIAL_BUFFER_SIZE.min(max_buffer_size)],
            start: 0,
            end: 0,
            at_eof: false,
            done: false,
        })
    }

    /// The scan mode.
    pub fn mode(&self) -> ScanMode {
        self.scanner.mode()
    }

    /// Read the next chunk.
    ///
    /// ## Returns
    /// `Ok(None)` once the source is exhausted.
    pub fn next_chunk(&mut self) -> WSResult<Option<String>> {
        loop {
            if self.done {
                return Ok(None);
            }

            if self.end > self.start || self.at_eof {
                let step = self
                    .scanner
                    .scan(&self.buf[self.start..self.end], self.at_eof);
                let chunk = step
                    .chunk
                    .map(|c| String::from_utf8_lossy(c).into_owned());
                self.start += step.advance;

                if chunk.is_some() {
                    return Ok(chunk);
                }
                if self.at_eof {
                    self.done = true;
                    return Ok(None);
                }
            }

            self.fill_buf()?;
        }
    }

    /// Compact the buffer, grow it if full, and read more bytes.
    fn fill_buf(&mut self) -> WSResult<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.buf.len() {
            if self.buf.len() >= self.max_buffer_size {
                self.done = true;
                return Err(WordsifterError::TokenTooLong {
                    buffer_size: self.max_buffer_size,
                });
            }
            let size = (self.buf.len() * 2).min(self.max_buffer_size);
            log::debug!("growing scan buffer: {} -> {} bytes", self.buf.len(), size);
            self.buf.resize(size, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => self.at_eof = true,
                Ok(n) => self.end += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.done = true;
                    return Err(WordsifterError::Scan(err));
                }
            }
            return Ok(());
        }
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = WSResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}
