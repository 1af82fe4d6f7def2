//! Benchmarks for the search kernel

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use babel_core::{base29, census, page, Alphabet, Library, Location};

fn bench_synthesize(c: &mut Criterion) {
    let alphabet = Alphabet::new();
    c.bench_function("page_synthesize", |b| {
        b.iter(|| page::synthesize(&alphabet, black_box("hello world"), black_box(42)).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let alphabet = Alphabet::new();
    let content = page::synthesize(&alphabet, "hello world", 42).unwrap();
    c.bench_function("base29_encode", |b| {
        b.iter(|| base29::encode(&alphabet, black_box(&content)).unwrap())
    });
}

fn bench_locate(c: &mut Criterion) {
    let library = Library::new();
    c.bench_function("locate", |b| {
        b.iter(|| library.locate(black_box("hello world"), black_box(42)).unwrap())
    });
}

fn bench_browse(c: &mut Criterion) {
    let library = Library::new();
    let location = library.locate("hello world", 42).unwrap();
    c.bench_function("browse", |b| b.iter(|| library.browse(black_box(&location)).unwrap()));
}

fn bench_occurrence_count(c: &mut Criterion) {
    c.bench_function("occurrence_count", |b| {
        b.iter(|| census::occurrence_count(black_box("hello world")))
    });
}

fn bench_index_roundtrip(c: &mut Criterion) {
    let location = Location::parse("deadbeefcafe.2.1.12.30").unwrap();
    c.bench_function("location_index_roundtrip", |b| {
        b.iter(|| {
            let index = black_box(&location).to_index().unwrap();
            Location::from_index(&index)
        })
    });
}

criterion_group!(
    benches,
    bench_synthesize,
    bench_encode,
    bench_locate,
    bench_browse,
    bench_occurrence_count,
    bench_index_roundtrip
);
criterion_main!(benches);
