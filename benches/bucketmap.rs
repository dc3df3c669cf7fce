#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use bucketmap::BucketMap;
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = proptest::collection::vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut bucket_map = BucketMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("bucketmap put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                bucket_map.put(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("bucketmap get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = bucket_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.bench_function("bucketmap grow from one slot", |b| {
        b.iter(|| {
            let mut map = BucketMap::with_capacity(1).unwrap();
            for (key, value) in &items {
                map.put(key.as_str(), value.as_str());
            }
            map.len()
        });
    });
    group.bench_function("bucketmap iterate", |b| {
        b.iter(|| bucket_map.values().map(String::len).sum::<usize>());
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
