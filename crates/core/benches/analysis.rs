use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use redactor_core::{Advisor, AdvisorConfig, AnalysisEvent, EditorEvent, FleschKincaid, KeywordAnalyzer, Report};
use redactor_core::{TextStatistics, plain_text};

fn bench_plain_text(c: &mut Criterion) {
    let small = std::fs::read_to_string("../../tests/fixtures/short_post.html").unwrap();
    let medium = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let large = medium.repeat(20);

    let mut group = c.benchmark_group("plain_text");

    group.bench_with_input(BenchmarkId::new("small", "short post"), &small, |b, html| {
        b.iter(|| plain_text(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("medium", "article"), &medium, |b, html| {
        b.iter(|| plain_text(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("large", "20 articles"), &large, |b, html| {
        b.iter(|| plain_text(black_box(html)))
    });

    group.finish();
}

fn bench_recommended_keywords(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let text = plain_text(&html);
    let analyzer = KeywordAnalyzer::default();

    c.bench_function("recommended_keywords", |b| {
        b.iter(|| analyzer.recommended_keywords(black_box(&text), 5))
    });
}

fn bench_text_statistics(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let text = plain_text(&html);

    c.bench_function("flesch_kincaid", |b| b.iter(|| FleschKincaid.compute(black_box(&text))));
}

fn bench_body_merge(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let advisor = Advisor::new(AdvisorConfig::default());
    let event = AnalysisEvent::from(EditorEvent::body(html));
    let prev = Report::new();

    c.bench_function("body_merge", |b| b.iter(|| advisor.merge(black_box(&prev), black_box(&event))));
}

criterion_group!(
    benches,
    bench_plain_text,
    bench_recommended_keywords,
    bench_text_statistics,
    bench_body_merge
);
criterion_main!(benches);
