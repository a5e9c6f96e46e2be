//! Request-frame encoding micro-benchmarks.
//!
//! Measures `encode_command` into a reused buffer, the same pattern the
//! driver uses to build its fixed request at startup.

use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resp_bench::frame::encode_command;

fn bench_encode_ping(c: &mut Criterion) {
    let mut buf = BytesMut::with_capacity(64);
    c.bench_function("encode_ping", |b| {
        b.iter(|| {
            buf.clear();
            encode_command(&mut buf, black_box("PING"), &[]);
        })
    });
}

fn bench_encode_set(c: &mut Criterion) {
    let mut buf = BytesMut::with_capacity(2048);
    let value = vec![0xabu8; 1024];
    c.bench_function("encode_set_1k", |b| {
        b.iter(|| {
            buf.clear();
            encode_command(&mut buf, black_box("SET"), &[b"test_key", &value]);
        })
    });
}

criterion_group!(encode, bench_encode_ping, bench_encode_set);
criterion_main!(encode);
