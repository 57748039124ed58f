//! # Token Frequency Table

use compact_str::CompactString;

use crate::{
    training::{CountType, TokenizeOptions},
    types::{WSHashMap, hash_map_with_capacity},
    vocab::markers::{BEGIN_OF_WORD, END_OF_WORD},
};

/// Can a multi-character candidate extend across `c`?
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '-'
}

/// A candidate token and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedToken<C: CountType> {
    /// The token string.
    pub token: CompactString,

    /// The occurrence count.
    pub weight: C,
}

/// Occurrence counts of candidate tokens.
///
/// # Parameters
/// * `C` - the type used to store counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFrequencyTable<C: CountType = u64> {
    counts: WSHashMap<CompactString, C>,
}

impl<C: CountType> TokenFrequencyTable<C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty table with room for `capacity` distinct tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: hash_map_with_capacity(capacity),
        }
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The count for `token`; zero if absent.
    pub fn get(
        &self,
        token: &str,
    ) -> C {
        self.counts.get(token).copied().unwrap_or_else(C::zero)
    }

    /// Iterate `(token, count)` pairs, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, C)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Add `count` occurrences of `token`.
    pub fn add(
        &mut self,
        token: &str,
        count: C,
    ) {
        match self.counts.get_mut(token) {
            Some(c) => *c += count,
            None => {
                self.counts.insert(CompactString::from(token), count);
            }
        }
    }

    /// Sum another table into this one.
    pub fn merge(
        &mut self,
        other: Self,
    ) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert_with(C::zero) += count;
        }
    }

    /// Count every candidate token of every whitespace-delimited word in `unit`.
    ///
    /// For each start position, candidates grow one character at a time up
    /// to `max_token_length`; every character counts as a single-character
    /// candidate, but longer candidates extend only across word characters
    /// (see [`is_word_char`]).
    ///
    /// ## Arguments
    /// * `unit` - a word, or a sentence to be split on whitespace.
    /// * `options` - the counting options.
    pub fn tokenize(
        &mut self,
        unit: &str,
        options: &TokenizeOptions,
    ) {
        let mut scratch = String::with_capacity(64);
        for word in unit.split_whitespace() {
            self.tokenize_word(word, options, &mut scratch);
        }
    }

    fn tokenize_word(
        &mut self,
        word: &str,
        options: &TokenizeOptions,
        scratch: &mut String,
    ) {
        if options.words_only_filter && !word.chars().all(is_word_char) {
            return;
        }

        let chars: Vec<char> = word.chars().collect();
        let offsets: Vec<usize> = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(word.len()))
            .collect();
        let n = chars.len();
        let one = C::one();

        for i in 0..n {
            let mut limit = i.saturating_add(options.max_token_length).min(n);
            if !is_word_char(chars[i]) {
                limit = limit.min(i + 1);
            }

            for j in (i + 1)..=limit {
                if j > i + 1 && !is_word_char(chars[j - 1]) {
                    break;
                }

                scratch.clear();
                if options.word_markers && i == 0 {
                    scratch.push_str(BEGIN_OF_WORD);
                }
                scratch.push_str(&word[offsets[i]..offsets[j]]);
                if options.word_markers && j == n {
                    scratch.push_str(END_OF_WORD);
                }
                self.add(scratch.as_str(), one);
            }
        }
    }

    /// Release the table as a list of weighted tokens, in unspecified order.
    pub fn into_weighted_tokens(self) -> Vec<WeightedToken<C>> {
        self.counts
            .into_iter()
            .map(|(token, weight)| WeightedToken { token, weight })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(max_token_length: usize) -> TokenizeOptions {
        TokenizeOptions {
            max_token_length,
            words_only_filter: false,
            word_markers: false,
        }
    }

    fn counts(
        word: &str,
        options: TokenizeOptions,
    ) -> Vec<(String, u32)> {
        let mut table: TokenFrequencyTable<u32> = TokenFrequencyTable::new();
        table.tokenize(word, &options);
        let mut counts: Vec<(String, u32)> =
            table.iter().map(|(k, v)| (k.to_string(), v)).collect();
        counts.sort();
        counts
    }

    fn expected(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
        let mut pairs: Vec<(String, u32)> =
            pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_tokenize() {
        let cases: &[(&str, usize, &[(&str, u32)])] = &[
            ("12314", 3, &[("1", 2), ("2", 1), ("3", 1), ("4", 1)]),
            (
                "abcad",
                3,
                &[
                    ("a", 2),
                    ("b", 1),
                    ("c", 1),
                    ("d", 1),
                    ("ab", 1),
                    ("ad", 1),
                    ("abc", 1),
                    ("bc", 1),
                    ("bca", 1),
                    ("ca", 1),
                    ("cad", 1),
                ],
            ),
            (
                "a-b",
                3,
                &[("a", 1), ("a-", 1), ("a-b", 1), ("-", 1), ("-b", 1), ("b", 1)],
            ),
            (
                "[xxx]",
                3,
                &[("[", 1), ("]", 1), ("x", 3), ("xx", 2), ("xxx", 1)],
            ),
            ("(foo)", 1, &[("(", 1), ("f", 1), ("o", 2), (")", 1)]),
            ("äö", 2, &[("ä", 1), ("äö", 1), ("ö", 1)]),
        ];

        for &(word, max_token_length, pairs) in cases {
            assert_eq!(
                counts(word, options(max_token_length)),
                expected(pairs),
                "word: {word:?}"
            );
        }
    }

    #[test]
    fn test_tokenize_with_markers() {
        let options = TokenizeOptions {
            word_markers: true,
            ..options(3)
        };
        assert_eq!(
            counts("abc", options),
            expected(&[
                ("<w>a", 1),
                ("<w>ab", 1),
                ("<w>abc</w>", 1),
                ("b", 1),
                ("bc</w>", 1),
                ("c</w>", 1),
            ])
        );
        assert_eq!(counts("x", options), expected(&[("<w>x</w>", 1)]));
    }

    #[test]
    fn test_tokenize_splits_sentences() {
        assert_eq!(
            counts("ab  ab\tb", options(2)),
            expected(&[("a", 2), ("ab", 2), ("b", 3)])
        );
        assert!(counts("   ", options(2)).is_empty());
    }

    #[test]
    fn test_words_only_filter() {
        let options = TokenizeOptions {
            words_only_filter: true,
            word_markers: true,
            ..options(2)
        };
        assert_eq!(
            counts("ok [no] re-do 42", options),
            expected(&[
                ("<w>o", 1),
                ("<w>ok</w>", 1),
                ("k</w>", 1),
                ("<w>r", 1),
                ("<w>re", 1),
                ("e", 1),
                ("e-", 1),
                ("-", 1),
                ("-d", 1),
                ("d", 1),
                ("do</w>", 1),
                ("o</w>", 1),
            ])
        );
    }

    #[test]
    fn test_unbounded_max_token_length() {
        assert_eq!(
            counts("ab", options(usize::MAX)),
            expected(&[("a", 1), ("b", 1), ("ab", 1)])
        );
        assert_eq!(counts("abc", options(usize::MAX)), counts("abc", options(3)));
    }

    #[test]
    fn test_merge() {
        let mut a: TokenFrequencyTable<u64> = TokenFrequencyTable::new();
        a.tokenize("ab", &options(2));
        let mut b: TokenFrequencyTable<u64> = TokenFrequencyTable::new();
        b.tokenize("bc", &options(2));

        a.merge(b);
        assert_eq!(a.get("a"), 1);
        assert_eq!(a.get("b"), 2);
        assert_eq!(a.get("bc"), 1);
        assert_eq!(a.get("zz"), 0);
        assert_eq!(a.len(), 5);

        let mut empty: TokenFrequencyTable<u64> = TokenFrequencyTable::new();
        empty.merge(a.clone());
        assert_eq!(empty, a);
    }
}
