//! Benchmarks for list mutations and broadcasts.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ilist::{impl_attributes, Callbacks, IList};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct Complex {
    re: f64,
    im: f64,
}

impl_attributes!(Complex => f64 { real: |c| c.re, imag: |c| c.im });

fn complexes(n: usize) -> IList<Complex> {
    (0..n)
        .map(|i| Complex {
            re: i as f64,
            im: -(i as f64),
        })
        .collect()
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append", |b| {
        let mut list = IList::new();
        let mut i = 0u64;
        b.iter(|| {
            list.append(black_box(i));
            i += 1;
        })
    });
}

fn bench_append_with_callbacks(c: &mut Criterion) {
    c.bench_function("append_with_callbacks", |b| {
        let callbacks = Callbacks::new().on_append(|list: &IList<u64>, x: &u64| {
            black_box((list.len(), *x));
        });
        let mut list = IList::with_callbacks(Vec::new(), callbacks);
        let mut i = 0u64;
        b.iter(|| {
            list.append(black_box(i));
            i += 1;
        })
    });
}

fn bench_get_attribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_attribute");

    for len in [1, 10, 100, 1000].iter() {
        let list = complexes(*len);
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| black_box(list.get_attribute("real").unwrap()))
        });
    }

    group.finish();
}

fn bench_get_attribute_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_attribute_json");

    for len in [10, 100, 1000].iter() {
        let list: IList<serde_json::Value> = (0..*len)
            .map(|i| json!({ "id": i, "name": format!("item-{}", i) }))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, _| {
            b.iter(|| black_box(list.get_attribute("name").unwrap()))
        });
    }

    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let list = complexes(1000);
    c.bench_function("map_1000", |b| {
        b.iter(|| black_box(list.map(|z| z.re.hypot(z.im))))
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("remove_middle_1000", |b| {
        b.iter_batched(
            || complexes(1000),
            |mut list| {
                let target = Complex { re: 500.0, im: -500.0 };
                list.remove(&target).unwrap();
                black_box(list)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_append_with_callbacks,
    bench_get_attribute,
    bench_get_attribute_json,
    bench_map,
    bench_remove,
);

criterion_main!(benches);
