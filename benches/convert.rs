use criterion::{criterion_group, criterion_main, Criterion};
use geosparql_to_geojson::Converter;
use std::fs::read_to_string;

pub fn convert_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntriple");
    let text = read_to_string("./tests/data/ntriple.nt").unwrap();
    group.bench_function("convert", |b| {
        b.iter(|| Converter::default().convert_str(&text).unwrap())
    });
    group.bench_function("convert_reversed", |b| {
        let converter = Converter::default().reverse(true);
        b.iter(|| converter.convert_str(&text).unwrap())
    });
    group.finish();
}

pub fn holes_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("holes");
    group.sample_size(10);
    let text = read_to_string("./tests/data/mixed.txt").unwrap();
    let documents: Vec<String> = (0..64).map(|_| text.clone()).collect();
    group.bench_function("convert_batch", |b| {
        b.iter(|| Converter::default().convert_batch(&documents))
    });
    group.finish();
}

criterion_group!(benches, convert_bench, holes_bench);
criterion_main!(benches);
