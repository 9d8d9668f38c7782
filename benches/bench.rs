use criterion::{Criterion, black_box, criterion_group, criterion_main};
use keymend::prelude::*;

const CORPUS: &str = "the quick brown fox jumps over the lazy dog \
    pack my box with five dozen liquor jugs \
    how vexingly quick daft zebras jump \
    sphinx of black quartz judge my vow \
    the five boxing wizards jump quickly";

fn sample_corrector() -> Corrector {
    Corrector::with_defaults(FrequencyModel::from_corpus(CORPUS)).unwrap()
}

fn bench_edit_generation(c: &mut Criterion) {
    let generator = EditGenerator::new(Alphabet::ascii_lowercase());

    let mut group = c.benchmark_group("edit_generation");
    for token in ["fox", "quick", "wizards"] {
        group.bench_function(token, |b| {
            b.iter(|| black_box(generator.edits1(black_box(token))))
        });
    }
    group.finish();
}

fn bench_proximity(c: &mut Criterion) {
    let scorer = ProximityScorer::new(KeyboardLayout::qwerty());

    c.bench_function("proximity", |b| {
        b.iter(|| {
            black_box(scorer.proximity(black_box("keyboard"), black_box("kwyboars")))
        })
    });
}

fn bench_correct(c: &mut Criterion) {
    let corrector = sample_corrector();

    let mut group = c.benchmark_group("correct");
    // One-edit typo resolves in the first tier, the garbled token falls
    // through to the two-edit expansion
    for token in ["quikc", "wizrds", "qzickl"] {
        group.bench_function(token, |b| {
            b.iter(|| black_box(corrector.correct(black_box(token))))
        });
    }
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let corrector = sample_corrector();

    c.bench_function("recommend", |b| {
        b.iter(|| black_box(corrector.recommend(black_box("jumsp"))))
    });
}

criterion_group!(
    benches,
    bench_edit_generation,
    bench_proximity,
    bench_correct,
    bench_recommend
);
criterion_main!(benches);
