use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use logcalc::scan::{scan_from_reader, ScanOptions};

/// Build a synthetic judge log: three noise lines per score line.
fn synthetic_log(score_lines: usize) -> String {
    let mut out = String::new();
    for i in 0..score_lines {
        let score = 1_000 + (i as i64 % 9_000) * 37;
        out.push_str("world.time: 1000\n");
        out.push_str(&format!("ans.score: {score}\n"));
        out.push_str(&format!("SCORE: {score}\n"));
        out.push_str(&format!("ret_score: {score}\n"));
    }
    out
}

fn bench_scan(c: &mut Criterion) {
    let data = synthetic_log(10_000);
    let options = ScanOptions::default();

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("scan_10k_scores", |b| {
        b.iter(|| scan_from_reader(black_box(data.as_bytes()), &options).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
