//! # Vocabulary Selector

use core::cmp::Ordering;

use crate::{
    training::{CountType, TokenFrequencyTable, WeightedToken},
    types::WSHashSet,
    vocab::{Vocabulary, vocabulary::max_content_len},
};

/// Selection order: weight descending, then token ascending.
fn selection_order<C: CountType>(
    a: &WeightedToken<C>,
    b: &WeightedToken<C>,
) -> Ordering {
    b.weight
        .cmp(&a.weight)
        .then_with(|| a.token.cmp(&b.token))
}

/// Build a [`Vocabulary`] from the `max_vocab_size` most frequent tokens.
///
/// Ties on weight are broken lexicographically; the cut is purely ordinal.
/// The vocab's `max_token_length` is measured in content characters.
///
/// ## Arguments
/// * `table` - the frequency table; consumed.
/// * `max_vocab_size` - the max number of tokens kept.
pub fn select_vocabulary<C: CountType>(
    table: TokenFrequencyTable<C>,
    max_vocab_size: usize,
) -> Vocabulary {
    let candidates = table.len();
    let mut weighted = table.into_weighted_tokens();
    weighted.sort_unstable_by(selection_order);
    weighted.truncate(max_vocab_size);

    let max_token_length = max_content_len(weighted.iter().map(|w| w.token.as_str()));
    let tokens: WSHashSet<String> = weighted
        .into_iter()
        .map(|w| w.token.into_string())
        .collect();

    log::info!(
        "Selected {} of {} candidate tokens; max token length {}",
        tokens.len(),
        candidates,
        max_token_length
    );

    Vocabulary::init(tokens, max_token_length)
}
