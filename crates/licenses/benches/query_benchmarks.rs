use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate};
use licensedesk_core::RecordId;
use licensedesk_licenses::{Record, classify, query};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Collection shaped like a real client list: mixed dates, some gaps.
fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let offset = (i as i64 % 200) - 50;
            let date = (today() + Duration::days(offset)).format("%Y-%m-%d").to_string();
            Record {
                client: Some(format!("Client {i}")),
                vendor: Some(["North", "South", "East", "West"][i % 4].to_string()),
                product_name: Some("PaperCut MF".to_string()),
                license_quantity: Some((i % 500) as i64),
                license_expiry: (i % 7 != 0).then(|| date.clone()),
                contract_expiry: (i % 3 == 0).then_some(date),
                ..Record::empty(RecordId::new(i as i64 + 1))
            }
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let rows = records(1_000);
    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(rows.len() as u64));
    group.bench_function("1k_records", |b| {
        b.iter(|| {
            for r in &rows {
                black_box(classify(black_box(r), today()));
            }
        })
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for size in [100usize, 1_000, 10_000] {
        let rows = records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("no_term", size), &rows, |b, rows| {
            b.iter(|| black_box(query(rows, "", 1, today())))
        });
        group.bench_with_input(BenchmarkId::new("term", size), &rows, |b, rows| {
            b.iter(|| black_box(query(rows, "south", 2, today())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_query);
criterion_main!(benches);
