#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: search-params-helper vs url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use search_params_helper::{Mutation, SearchParams, search_params_factory};
use url::form_urlencoded;

const SIMPLE: &str = "?key1=value1&key2=value2&key3=value3";
const ENCODED: &str = "?q=hello+world&name=Fran%C3%A7ois&math=1%2B1%3D2&amp=a%26b&emoji=%F0%9F%8E%89";

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("search_params_simple", |b| {
        b.iter(|| SearchParams::parse(black_box(SIMPLE)));
    });

    group.bench_function("form_urlencoded_simple", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(&SIMPLE.as_bytes()[1..]))
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.bench_function("search_params_encoded", |b| {
        b.iter(|| SearchParams::parse(black_box(ENCODED)));
    });

    group.bench_function("form_urlencoded_encoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(&ENCODED.as_bytes()[1..]))
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let params = SearchParams::parse(ENCODED);
    let pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    group.bench_function("search_params", |b| {
        b.iter(|| black_box(&params).serialize());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_mutations_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    group.bench_function("chainable", |b| {
        b.iter(|| {
            SearchParams::create(black_box(SIMPLE))
                .add_param("key4", "value4")
                .remove_param("key1")
                .add_or_replace_param("key3", "replaced value")
                .serialize()
        });
    });

    group.bench_function("compose", |b| {
        b.iter(|| {
            search_params_factory(black_box(SIMPLE)).compose([
                Mutation::add("key4", "value4"),
                Mutation::remove("key1"),
                Mutation::add_or_replace("key3", "replaced value"),
            ])
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_all,
    bench_serialize_all,
    bench_mutations_all
);

criterion_main!(benches);
