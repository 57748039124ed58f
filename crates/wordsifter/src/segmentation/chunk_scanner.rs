//! # Chunk Scanner

use std::borrow::Cow;

use crate::segmentation::{
    ScanMode,
    sentence_boundary::{ends_sentence, is_decimal_digit},
};

/// Max bytes of preceding text handed to the sentence boundary heuristic.
///
/// Must cover [`crate::segmentation::ABBREVIATION_WINDOW`] characters
/// of up to 4 bytes each, plus a partial leading character.
const BOUNDARY_CONTEXT_BYTES: usize = 32;

/// The result of one [`ChunkScanner::scan`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep<'a> {
    /// Bytes consumed from the front of the scanned data.
    pub advance: usize,

    /// The recognized chunk, if any.
    ///
    /// `None` requests more data; `advance` may still be non-zero
    /// when leading whitespace was consumed.
    pub chunk: Option<&'a [u8]>,
}

impl<'a> ScanStep<'a> {
    fn more(advance: usize) -> Self {
        Self {
            advance,
            chunk: None,
        }
    }

    fn chunk(
        advance: usize,
        chunk: &'a [u8],
    ) -> Self {
        Self {
            advance,
            chunk: Some(chunk),
        }
    }
}

/// Incremental word / sentence split function.
///
/// The scanner holds no buffer; callers re-invoke it with the unconsumed
/// data, plus any newly read bytes, until it yields a chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkScanner {
    mode: ScanMode,
}

impl ChunkScanner {
    /// Create a new scanner.
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    /// The scan mode.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Scan the next chunk from `data`.
    ///
    /// ## Arguments
    /// * `data` - the unconsumed bytes.
    /// * `at_eof` - no more bytes will follow `data`.
    ///
    /// ## Returns
    /// A [`ScanStep`]; at end of stream any non-empty residue is the final chunk.
    pub fn scan<'a>(
        &self,
        data: &'a [u8],
        at_eof: bool,
    ) -> ScanStep<'a> {
        let (start, complete) = skip_whitespace(data, at_eof);
        if !complete {
            return ScanStep::more(start);
        }

        match self.mode {
            ScanMode::Words => scan_word(data, start, at_eof),
            ScanMode::Sentences => scan_sentence(data, start, at_eof),
        }
    }
}

/// Decode the leading character of `data`.
///
/// Invalid bytes decode as one `U+FFFD` each.
/// Returns `None` when `data` ends inside a character and more may follow.
fn decode_symbol(
    data: &[u8],
    at_eof: bool,
) -> Option<(char, usize)> {
    let head = &data[..data.len().min(4)];
    let valid = match core::str::from_utf8(head) {
        Ok(s) => s,
        Err(err) if err.valid_up_to() > 0 => {
            core::str::from_utf8(&head[..err.valid_up_to()]).unwrap_or_default()
        }
        Err(err) if err.error_len().is_none() && !at_eof => return None,
        Err(_) => return Some((char::REPLACEMENT_CHARACTER, 1)),
    };
    valid.chars().next().map(|c| (c, c.len_utf8()))
}

/// Skip leading whitespace.
///
/// ## Returns
/// `(offset, complete)`; `complete` is false when a split character at
/// `offset` needs more data to decide. The skipped whitespace is consumed
/// either way.
fn skip_whitespace(
    data: &[u8],
    at_eof: bool,
) -> (usize, bool) {
    let mut pos = 0;
    while pos < data.len() {
        let Some((c, width)) = decode_symbol(&data[pos..], at_eof) else {
            return (pos, false);
        };
        if !c.is_whitespace() {
            break;
        }
        pos += width;
    }
    (pos, true)
}

fn scan_word(
    data: &[u8],
    start: usize,
    at_eof: bool,
) -> ScanStep<'_> {
    let mut pos = start;
    while pos < data.len() {
        let Some((c, width)) = decode_symbol(&data[pos..], at_eof) else {
            return ScanStep::more(start);
        };
        if c.is_whitespace() {
            return ScanStep::chunk(pos + width, &data[start..pos]);
        }
        pos += width;
    }

    if at_eof && data.len() > start {
        return ScanStep::chunk(data.len(), &data[start..]);
    }
    ScanStep::more(start)
}

fn scan_sentence(
    data: &[u8],
    start: usize,
    at_eof: bool,
) -> ScanStep<'_> {
    let mut pos = start;
    while pos < data.len() {
        let Some((c, width)) = decode_symbol(&data[pos..], at_eof) else {
            return ScanStep::more(start);
        };
        let end = pos + width;

        if matches!(c, '\r' | '\n' | '!' | '?' | '.') {
            let prev = boundary_context(&data[start..pos]);

            // Only the float rule looks past the `.`.
            let next = if c == '.' && prev.chars().next_back().is_some_and(is_decimal_digit) {
                if end < data.len() {
                    match decode_symbol(&data[end..], at_eof) {
                        Some((n, _)) => Some(n),
                        None => return ScanStep::more(start),
                    }
                } else if !at_eof {
                    // The float lookahead must not depend on where the buffer ends.
                    return ScanStep::more(start);
                } else {
                    None
                }
            } else {
                None
            };

            if ends_sentence(prev.chars().rev(), c, next) {
                return ScanStep::chunk(end, &data[start..end]);
            }
        }
        pos = end;
    }

    if at_eof && data.len() > start {
        return ScanStep::chunk(data.len(), &data[start..]);
    }
    ScanStep::more(start)
}

/// The tail of the preceding sentence text, starting on a character boundary.
fn boundary_context(prev: &[u8]) -> Cow<'_, str> {
    let mut cut = prev.len().saturating_sub(BOUNDARY_CONTEXT_BYTES);
    while cut < prev.len() && (prev[cut] & 0xC0) == 0x80 {
        cut += 1;
    }
    String::from_utf8_lossy(&prev[cut..])
}
