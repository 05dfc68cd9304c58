use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use skillpath_core::corpus::QuestionCorpus;
use skillpath_core::model::{CareerPath, CategoryFilter, Difficulty, QuizRequest};
use skillpath_core::scorer::QuestionScorer;
use skillpath_core::selector::QuizSelector;
use skillpath_core::traits::Capabilities;

fn bench_score(c: &mut Criterion) {
    let corpus = QuestionCorpus::builtin();
    let caps = Capabilities::none();
    let scorer = QuestionScorer::new(&caps);
    let question = &corpus.records()[0];

    c.bench_function("score_single_question", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            scorer.score(
                black_box(question),
                black_box(10),
                CareerPath::Fullstack,
                Some(Difficulty::Medium),
                &mut rng,
            )
        })
    });
}

fn bench_select(c: &mut Criterion) {
    let corpus = QuestionCorpus::builtin();
    let caps = Capabilities::none();
    let selector = QuizSelector::new(&corpus, &caps);

    let mut group = c.benchmark_group("select");

    group.bench_function("mixed_count_5", |b| {
        let request = QuizRequest::default();
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| selector.select(black_box(&request), &mut rng))
    });

    group.bench_function("mixed_count_20", |b| {
        let request = QuizRequest {
            count: 20,
            ..QuizRequest::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| selector.select(black_box(&request), &mut rng))
    });

    group.bench_function("single_category", |b| {
        let request = QuizRequest {
            category: "frontend".parse::<CategoryFilter>().unwrap(),
            ..QuizRequest::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| selector.select(black_box(&request), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_score, bench_select);
criterion_main!(benches);
