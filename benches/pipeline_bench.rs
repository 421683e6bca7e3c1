use criterion::{criterion_group, criterion_main, Criterion};
use reviewgram::analysis::{count_ngrams_parallel, count_phrases, ngrams, rank, tokenize_blocks};
use reviewgram::stopwords::StopWords;
use std::hint::black_box;
use std::num::NonZeroUsize;

const VOCAB: &[&str] = &[
    "the", "phone", "is", "great", "battery", "life", "camera", "screen", "a", "bit", "slow",
    "but", "overall", "good", "value", "for", "money", "charger", "broke", "after", "week",
];

fn synthetic_reviews(count: usize, seed: u64) -> Vec<String> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let len = rng.usize(8..60);
            let words: Vec<&str> = (0..len).map(|_| VOCAB[rng.usize(..VOCAB.len())]).collect();
            format!("{}.", words.join(" "))
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let reviews = synthetic_reviews(2_000, 42);
    let tokens = tokenize_blocks(&reviews);
    let sw = StopWords::english();
    let n = NonZeroUsize::new(3).unwrap();

    c.bench_function("tokenize_2k_reviews", |b| {
        b.iter(|| tokenize_blocks(black_box(&reviews)))
    });

    c.bench_function("count_trigrams_sequential", |b| {
        b.iter(|| count_phrases(ngrams(black_box(&tokens), n), 3, &sw))
    });

    c.bench_function("count_trigrams_parallel", |b| {
        b.iter(|| count_ngrams_parallel(black_box(&tokens), n, &sw))
    });

    let counts = count_phrases(ngrams(&tokens, n), 3, &sw);
    c.bench_function("rank_top_25", |b| b.iter(|| rank(black_box(&counts), 25)));
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
