//! # Parallel Frequency Counting

use rayon::prelude::*;

use crate::training::{CountType, TokenFrequencyTable, TokenizeOptions};

/// Count candidate tokens of many samples in parallel.
///
/// Each rayon worker fills its own table; the tables are then merged by
/// summation. The result equals sequential counting of the same samples.
///
/// ## Arguments
/// * `samples` - the training samples; each is split on whitespace.
/// * `options` - the counting options.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(samples)))]
pub fn count_samples_parallel<C, S>(
    samples: &[S],
    options: &TokenizeOptions,
) -> TokenFrequencyTable<C>
where
    C: CountType,
    S: AsRef<str> + Sync,
{
    let table = samples
        .par_iter()
        .fold(TokenFrequencyTable::new, |mut table, sample| {
            table.tokenize(sample.as_ref(), options);
            table
        })
        .reduce(TokenFrequencyTable::new, |mut a, b| {
            a.merge(b);
            a
        });

    log::info!(
        "Counted {} samples; {} candidate tokens",
        samples.len(),
        table.len()
    );
    table
}
