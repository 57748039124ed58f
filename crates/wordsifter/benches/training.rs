#![allow(missing_docs)]

use std::io::Cursor;

use divan::{Bencher, black_box, counter::BytesCount};
use wordsifter::{
    TrainOptions,
    segmentation::ScanMode,
    training::{TokenFrequencyTable, train_from_reader},
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static ENGLISH_CORPUS: &str = include_str!("data/english.txt");

#[divan::bench(args = [4, 8, 16, 32])]
fn tokenize(
    bencher: Bencher,
    max_token_length: usize,
) {
    let options = TrainOptions::default()
        .with_max_token_length(max_token_length)
        .tokenize_options();
    bencher
        .counter(BytesCount::new(ENGLISH_CORPUS.len()))
        .bench(|| {
            let mut table: TokenFrequencyTable<u32> = TokenFrequencyTable::new();
            table.tokenize(black_box(ENGLISH_CORPUS), &options);
            table
        });
}

#[divan::bench(args = [ScanMode::Words, ScanMode::Sentences])]
fn train(
    bencher: Bencher,
    scan_mode: ScanMode,
) {
    let text = ENGLISH_CORPUS.repeat(4);
    let options = TrainOptions::default()
        .with_max_vocab_size(5_000)
        .with_scan_mode(scan_mode);
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| train_from_reader(Cursor::new(black_box(text.as_bytes())), &options).unwrap());
}

#[cfg(feature = "rayon")]
#[divan::bench]
fn count_parallel(bencher: Bencher) {
    use wordsifter::rayon::count_samples_parallel;

    let samples: Vec<&str> = ENGLISH_CORPUS.lines().cycle().take(256).collect();
    let bytes = samples.iter().map(|s| s.len()).sum::<usize>();
    let options = TrainOptions::default().tokenize_options();
    bencher
        .counter(BytesCount::new(bytes))
        .bench(|| count_samples_parallel::<u32, _>(black_box(&samples), &options));
}
