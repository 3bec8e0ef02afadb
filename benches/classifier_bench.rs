//! Benchmarks for the sentiment classifier and reducer
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use peacepal::config::Config;
use peacepal::sentiment::SentimentClassifier;
use peacepal::state::{Action, AppState, Reducer};
use rand::rngs::StdRng;
use rand::SeedableRng;

const ENTRY: &str = "Woke up tired but the morning walk in nature was refreshing \
    and I feel grateful for good friends even if work stress is still there ";

fn journal_text(repeats: usize) -> String {
    ENTRY.repeat(repeats)
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = SentimentClassifier::builtin();

    for repeats in [1, 10, 100] {
        let text = journal_text(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_function(format!("builtin_{}x", repeats), |b| {
            b.iter(|| classifier.classify(black_box(&text)))
        });
    }

    group.bench_function("short_text", |b| {
        b.iter(|| classifier.classify(black_box("ok")))
    });

    group.finish();
}

fn bench_extended_lexicon(c: &mut Criterion) {
    let mut config = Config::default();
    config.lexicon.extra_positive = (0..500).map(|i| format!("calm{}", i)).collect();
    config.lexicon.extra_negative = (0..500).map(|i| format!("tense{}", i)).collect();
    let classifier = config.classifier();
    let text = journal_text(10);

    c.bench_function("classify_extended_10x", |b| {
        b.iter(|| classifier.classify(black_box(&text)))
    });
}

fn bench_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");
    let reducer = Reducer::default();
    let state = AppState::default();
    let mut rng = StdRng::seed_from_u64(42);

    group.bench_function("journal_input", |b| {
        b.iter(|| {
            reducer
                .apply(
                    black_box(&state),
                    Action::JournalInput {
                        text: ENTRY.to_string(),
                    },
                    &mut rng,
                )
                .unwrap()
        })
    });

    group.bench_function("log_mood", |b| {
        let selected = reducer
            .apply(&state, Action::SelectMood { mood: 5 }, &mut rng)
            .unwrap()
            .state;
        b.iter(|| {
            reducer
                .apply(black_box(&selected), Action::LogMood, &mut rng)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_extended_lexicon, bench_reducer);
criterion_main!(benches);
