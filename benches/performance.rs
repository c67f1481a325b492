use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flow_container::{transfer, ConsumeLimiter, Container, ProvideLimiter};
use flow_core::{Properties, State};

fn make_tanks(n: usize) -> Vec<Container<f64>> {
    let properties = Properties::new(1_000.0);
    (0..n)
        .map(|i| Container::with_state(properties, &State::new((i % 10) as f64 * 100.0)))
        .collect()
}

fn bench_ring_transfer(c: &mut Criterion) {
    let mut tanks = make_tanks(1024);
    c.bench_function("ring_transfer", |b| {
        b.iter(|| {
            for i in 0..tanks.len() - 1 {
                let (left, right) = tanks.split_at_mut(i + 1);
                black_box(transfer(&mut left[i], &mut right[0]));
            }
        })
    });
}

fn bench_limited_transfer(c: &mut Criterion) {
    let properties = Properties::new(1_000_000.0f64);
    c.bench_function("limited_transfer", |b| {
        b.iter(|| {
            let mut source = Container::new(properties);
            let mut sink = Container::with_state(properties, &State::new(0.0));
            for _ in 0..256 {
                let _ = &mut sink << ProvideLimiter::new(&mut source, 10.0);
                let _ = &mut source >> ConsumeLimiter::new(&mut sink, 5.0);
            }
            black_box(sink.available_units())
        })
    });
}

criterion_group!(benches, bench_ring_transfer, bench_limited_transfer);
criterion_main!(benches);
