//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package yassc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use yassc_lex::{tokenize, tokenize_with, IndentMode, LexConfig};

fn lexer_token_count(source: &str) -> usize {
    tokenize(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "SET total TO total + price * 2\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_set", |b| {
        b.iter(|| lexer_token_count(black_box("SET x TO 42\n")))
    });

    group.bench_function("arithmetic_set", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"~ running average ~
INPUT count AS INTEGER
SET total TO 0.0
SET i TO 1
WHILE i <= count DO
    INPUT value AS DECIMAL
    SET total TO total + value
    IF value >= 100 THEN
        OUTPUT "large value" ~ flagged ~
    ELSE
        OUTPUT "ok"
    SET i TO i + 1
OUTPUT "average", total / count
OUTPUT "buckets", total // 10, total % 10
"#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("program", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let marker = LexConfig::default().with_indent(IndentMode::Marker);
    group.bench_function("program_marker_indent", |b| {
        b.iter(|| tokenize_with(black_box(source), &marker).map(|t| t.len()))
    });

    group.finish();
}

fn bench_lexer_large_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let line = "SET result TO (alpha + 3.75) ^ 2 != beta ~ note ~\n";
    let source = line.repeat(2_000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_lines", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    let strings = "OUTPUT \"some text with \\\"escapes\\\" inside\"\n".repeat(2_000);
    group.throughput(Throughput::Bytes(strings.len() as u64));

    group.bench_function("string_heavy", |b| {
        b.iter(|| lexer_token_count(black_box(&strings)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_large_input
);
criterion_main!(benches);
