use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jxlsig::{check_signature, CODESTREAM_SIGNATURE, CONTAINER_SIGNATURE};
use rand::Rng;
use std::hint::black_box;

/// Detector cost for each kind of input
fn bench_check_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_signature");
    group.throughput(Throughput::Elements(1));

    let mut rng = rand::rng();
    let random: Vec<u8> = (0..4096).map(|_| rng.random()).collect();

    let inputs: Vec<(&str, Vec<u8>)> = vec![
        ("empty", Vec::new()),
        ("codestream", CODESTREAM_SIGNATURE.to_vec()),
        ("container", CONTAINER_SIGNATURE.to_vec()),
        ("container_prefix", CONTAINER_SIGNATURE[..6].to_vec()),
        ("png", b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR".to_vec()),
        ("random_4k", random),
    ];

    for (name, buf) in &inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), buf, |b, buf| {
            b.iter(|| check_signature(black_box(buf)))
        });
    }

    group.finish();
}

/// Same inputs through the exported C entry point
fn bench_c_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("SignatureCheck");
    group.throughput(Throughput::Elements(1));

    group.bench_function("container", |b| {
        b.iter(|| unsafe {
            jxlsig::c_api::SignatureCheck(
                black_box(CONTAINER_SIGNATURE.as_ptr()),
                black_box(CONTAINER_SIGNATURE.len()),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_check_signature, bench_c_export);
criterion_main!(benches);
