// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand::{rngs::StdRng, SeedableRng};

use candidate_sentiment::{
    aggregate::aggregate,
    config::consts::MAX_CLASSIFY_CHARS,
    config::options::SourceOptions,
    model::EnrichedRecord,
    scrape::synthetic,
    sentiment::{Classifier, LexiconModel},
    text::Normalizer,
};

fn sample(n: usize) -> Vec<candidate_sentiment::model::Record> {
    let opts = SourceOptions::default();
    let mut rng = StdRng::seed_from_u64(7);
    synthetic::generate_with(&mut rng, &opts.candidates, &opts.range, n)
}

fn bench_pipeline(c: &mut Criterion) {
    let records = sample(2_000);
    let normalizer = Normalizer::spanish();
    let classifier = Classifier::new(Box::new(LexiconModel::builtin()), MAX_CLASSIFY_CHARS);

    c.bench_function("normalize_2000", |b| {
        b.iter(|| {
            let n: usize = records.iter().map(|r| normalizer.normalize(black_box(&r.raw_text)).len()).sum();
            black_box(n)
        })
    });

    let cleaned: Vec<String> = records.iter().map(|r| normalizer.normalize(&r.raw_text)).collect();

    c.bench_function("classify_2000", |b| {
        b.iter(|| {
            let s: i64 = cleaned.iter().map(|t| i64::from(classifier.classify(black_box(t)).1)).sum();
            black_box(s)
        })
    });

    let enriched: Vec<EnrichedRecord> = records
        .iter()
        .cloned()
        .zip(cleaned)
        .map(|(r, clean)| {
            let (label, _) = classifier.classify(&clean);
            EnrichedRecord::new(r, clean, label)
        })
        .collect();

    c.bench_function("aggregate_2000", |b| {
        b.iter(|| black_box(aggregate(black_box(&enriched)).grand_total()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
