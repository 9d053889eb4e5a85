//! Lexer Benchmarks
//!
//! Measures scanner throughput on representative Rill sources.
//! Run with: `cargo bench --package rillc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rillc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "x = 10; while (x) { x -= 1; y += x * 2; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assignment", |b| {
        b.iter(|| lexer_token_count(black_box("x = 42;")))
    });

    group.bench_function("loop_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    // Comment-heavy source with every token category
    let source = r#"
        /* configuration /* nested */ values */
        limit = 0x1F4;
        step = 3;
        total = 0;

        // accumulate until the limit is reached
        while (limit) {
            limit -= step;
            total += limit % 7;
            if (total) {
                total /= 2;
            } else {
                total = 1;
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_statements, bench_lexer_complex);
criterion_main!(benches);
