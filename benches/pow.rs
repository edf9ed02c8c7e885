//! Latency of one `f64` power call.
//!
//! Cases: `pow_fixed` (1.2 ^ 1.2), `pow_random` (operands drawn once from [1, 10)).
//! After each case that actually ran, the last computed value goes to the
//! configured sink (`POWBENCH_SINK`, null by default).
//!
//! Run with: cargo bench --bench pow

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use powbench::{emit_observed, registered_cases, rng_from_seed, PowCase, Settings};

fn bench_case(c: &mut Criterion, case: &PowCase, settings: &Settings) {
    // Stays `None` when a filter or `--list` keeps the body from running.
    let mut last: Option<f64> = None;
    c.bench_function(case.name, |b| {
        b.iter(|| {
            let y = case.step();
            last = Some(y);
            black_box(y)
        })
    });

    let mut sink = settings.sink.open();
    if let Err(err) = emit_observed(&mut *sink, case.name, last) {
        log::warn!("{}: {err}", case.name);
    }
}

fn bench_pow(c: &mut Criterion) {
    let _ = env_logger::try_init();

    let settings = Settings::from_env().unwrap_or_else(|err| {
        log::warn!("{err}, using defaults");
        Settings::default()
    });

    let mut rng = rng_from_seed(settings.seed);
    for case in registered_cases(&mut rng) {
        log::info!("{} operands {}", case.name, case.operands);
        bench_case(c, &case, &settings);
    }
}

criterion_group!(
    name = pow;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));
    targets = bench_pow,
);
criterion_main!(pow);
