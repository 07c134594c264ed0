use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use quizling::content::{Dataset, Domain, LanguageCode};
use quizling::engine::category::CategoryId;
use quizling::engine::question::next_question;
use quizling::engine::resolver;

fn make_pool(count: usize) -> (Vec<String>, Vec<String>) {
    let native = (0..count).map(|i| format!("word{i}")).collect();
    let target = (0..count).map(|i| format!("kelime{i}")).collect();
    (native, target)
}

fn bench_next_question(c: &mut Criterion) {
    let (small_native, small_target) = make_pool(6);
    let (large_native, large_target) = make_pool(5_000);

    c.bench_function("next_question (6-item pool)", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            next_question(
                black_box(&small_native),
                black_box(&small_target),
                &mut rng,
            )
        })
    });

    c.bench_function("next_question (5000-item pool)", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            next_question(
                black_box(&large_native),
                black_box(&large_target),
                &mut rng,
            )
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let dataset = Dataset::load(Domain::Words, LanguageCode::En).unwrap();

    c.bench_function("resolve all categories (bundled en words)", |b| {
        b.iter(|| {
            for category in CategoryId::ALL {
                black_box(resolver::resolve(black_box(&dataset), category));
            }
        })
    });
}

criterion_group!(benches, bench_next_question, bench_resolve);
criterion_main!(benches);
