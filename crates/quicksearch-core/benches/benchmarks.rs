use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use quicksearch_core::prelude::*;

fn bench_filter(c: &mut Criterion) {
    let sections = default_sections();
    c.bench_function("filter/one", |b| b.iter(|| sections.filter(black_box("one"))));
    c.bench_function("filter/empty", |b| b.iter(|| sections.filter(black_box(""))));
}

fn bench_highlight(c: &mut Criterion) {
    let highlighter = Highlighter::new("e");
    let items: Vec<&str> = default_sections()
        .iter()
        .flat_map(|s| s.items.iter().map(String::as_str))
        .collect();
    c.bench_function("highlight/all_items", |b| {
        b.iter(|| {
            items
                .iter()
                .map(|item| highlighter.spans(black_box(item)).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_filter, bench_highlight);
criterion_main!(benches);
