use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizrace_core::judge::Judge;
use quizrace_core::model::Question;

fn bench_judge(c: &mut Criterion) {
    let mut group = c.benchmark_group("judge");

    let free_text = Question::free_text("Capital of France?", "Paris");
    let choices = Question::multiple_choice(
        "Capital of France?",
        "Paris",
        vec!["London".into(), "Rome".into(), "Paris".into(), "Berlin".into()],
    );
    let long_answer = Question::free_text(
        "Recite it",
        "The quick brown fox jumps over the lazy dog ".repeat(20),
    );
    let judge = Judge::default();

    group.bench_function("free_text", |b| {
        b.iter(|| judge.judge(black_box(&free_text), black_box("  paris ")))
    });

    group.bench_function("choice_hit", |b| {
        b.iter(|| judge.judge(black_box(&choices), black_box("3")))
    });

    group.bench_function("choice_miscue", |b| {
        b.iter(|| judge.judge(black_box(&choices), black_box("seven")))
    });

    group.bench_function("long_free_text", |b| {
        let answer = long_answer.correct_answer.to_uppercase();
        b.iter(|| judge.judge(black_box(&long_answer), black_box(&answer)))
    });

    group.finish();
}

criterion_group!(benches, bench_judge);
criterion_main!(benches);
