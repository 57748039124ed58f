//! # Sentence Boundary Heuristic
//!
//! A best-effort end-of-sentence test. Known false positives are kept as-is;
//! e.g. a list marker like `"1. First"` closes a sentence.

/// How far back (in characters) a trailing `.` after a letter is inspected
/// for an abbreviation.
pub const ABBREVIATION_WINDOW: usize = 4;

const OPENING_SYMBOLS: [char; 5] = ['[', '(', '{', '"', '\''];

/// Does `symbol` close the sentence?
///
/// ## Arguments
/// * `prev` - the sentence text preceding `symbol`.
/// * `symbol` - the candidate terminator.
/// * `next` - the text following `symbol`; empty at end of stream.
pub fn is_end_of_sentence(
    prev: &str,
    symbol: char,
    next: &str,
) -> bool {
    ends_sentence(prev.chars().rev(), symbol, next.chars().next())
}

/// Is `c` a decimal digit for the float rule?
///
/// ASCII `0-9` only; other numeric characters (`½`, `Ⅻ`) take the
/// "any other character" path and close the sentence.
pub(crate) fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// [`is_end_of_sentence`] over a reversed view of the preceding text.
pub(crate) fn ends_sentence<I>(
    mut prev_rev: I,
    symbol: char,
    next: Option<char>,
) -> bool
where
    I: Iterator<Item = char>,
{
    match symbol {
        '\r' | '\n' => prev_rev.next().is_some(),
        '!' | '?' => true,
        '.' => match prev_rev.next() {
            Some(last) if last.is_alphabetic() => !is_abbreviation(last, prev_rev),
            Some(last) if is_decimal_digit(last) => !next.is_some_and(is_decimal_digit),
            _ => true,
        },
        _ => false,
    }
}

/// Is the word ending in `last` a short capitalised abbreviation (`Dr`, `Mrs`)
/// or a bracketed one (`(lat`)?
fn is_abbreviation<I>(
    last: char,
    mut prev_rev: I,
) -> bool
where
    I: Iterator<Item = char>,
{
    let mut word_start = last;
    for _ in 1..ABBREVIATION_WINDOW {
        let Some(c) = prev_rev.next() else {
            // Start of text bounds the word like whitespace does.
            return word_start.is_uppercase();
        };
        if c.is_whitespace() {
            return word_start.is_uppercase();
        }
        if OPENING_SYMBOLS.contains(&c) {
            return true;
        }
        if !c.is_alphabetic() {
            return false;
        }
        word_start = c;
    }
    false
}
