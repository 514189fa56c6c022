use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use oki_core::segment::split_moras;
use oki_core::{analyze, convert, PhoneticTables};

const WORDS: &[&str] = &[
    "ka",
    "?uci-naa=guci]",
    "kaQtaziitu",
    "Cizi(tu)Qkwaa",
    "?ja]marutuzizu",
];

fn bench_tables(c: &mut Criterion) {
    c.bench_function("build_tables", |b| b.iter(PhoneticTables::builtin));
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_moras");
    for word in WORDS {
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, w| {
            b.iter(|| split_moras(w).unwrap())
        });
    }
    group.finish();
}

fn bench_word(c: &mut Criterion) {
    let tables = PhoneticTables::builtin();
    let mut group = c.benchmark_group("word");
    for word in WORDS {
        group.bench_with_input(BenchmarkId::new("analyze", word), word, |b, w| {
            b.iter(|| analyze(&tables, w).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("convert", word), word, |b, w| {
            b.iter(|| convert(&tables, w).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tables, bench_segment, bench_word);
criterion_main!(benches);
