//! Benchmarks for bloomsieve
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use bloomsieve::traits::MembershipFilter;
use bloomsieve::BloomFilter;

fn bench_bloom(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_filter");
    group.throughput(Throughput::Elements(1));

    for hash_count in [3, 8] {
        group.bench_function(format!("insert_k{}", hash_count), |b| {
            let mut filter = BloomFilter::new(1_000_000, hash_count).unwrap();
            let mut i = 0u64;
            b.iter(|| {
                filter.insert(&i.to_string());
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("contains_hit", |b| {
        let mut filter = BloomFilter::new(1_000_000, 3).unwrap();
        for i in 0..100_000u64 {
            filter.insert(&i.to_string());
        }
        let mut i = 0u64;
        b.iter(|| {
            let result = filter.contains(&(i % 100_000).to_string());
            i = i.wrapping_add(1);
            black_box(result)
        });
    });

    group.bench_function("contains_miss", |b| {
        let mut filter = BloomFilter::new(1_000_000, 3).unwrap();
        for i in 0..100_000u64 {
            filter.insert(&i.to_string());
        }
        let mut i = 1_000_000u64;
        b.iter(|| {
            let result = filter.contains(&i.to_string());
            i = i.wrapping_add(1);
            black_box(result)
        });
    });

    group.bench_function("merge", |b| {
        let mut filter1 = BloomFilter::new(1_000_000, 3).unwrap();
        let mut filter2 = BloomFilter::new(1_000_000, 3).unwrap();
        for i in 0..10_000u64 {
            filter1.insert(&i.to_string());
            filter2.insert(&(i + 10_000).to_string());
        }
        b.iter(|| {
            let mut f = filter1.clone();
            f.merge(black_box(&filter2)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bloom);
criterion_main!(benches);
