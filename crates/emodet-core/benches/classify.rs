//! Criterion benchmarks for the classifier hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use emodet_core::classifier::classify;
use emodet_core::lexicon::Lexicon;

fn default_lexicon() -> Lexicon {
    Lexicon::new(
        [
            "happy", "love", "great", "amazing", "wonderful", "fantastic", "excellent",
            "awesome", "good", "beautiful", "perfect", "joy", "excited", "brilliant",
        ],
        [
            "sad", "hate", "terrible", "awful", "horrible", "bad", "worst", "angry",
            "disappointed", "upset", "frustrated", "annoyed",
        ],
    )
    .unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let lexicon = default_lexicon();

    c.bench_function("classify_short", |b| {
        b.iter(|| classify(black_box("I love sunny days!"), &lexicon))
    });

    let long_text = "I love sunny days but this terrible weather makes me sad and frustrated \
                     although the beautiful sunset was amazing and wonderful "
        .repeat(50);
    c.bench_function("classify_long", |b| {
        b.iter(|| classify(black_box(&long_text), &lexicon))
    });

    c.bench_function("classify_no_matches", |b| {
        b.iter(|| classify(black_box("the sky is blue and the grass is green"), &lexicon))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
