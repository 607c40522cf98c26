
use bench_utils::bench_trace_generation;
use criterion::{criterion_group, criterion_main, Criterion};

fn trace_gen(c: &mut Criterion) {
    bench_trace_generation(c, "trace_gen", &[20, 50, 200, 1000]);
}

criterion_group!(benches, trace_gen);
criterion_main!(benches);
