//! Run both power-call cases through the in-crate loop and print a summary.
//!
//! Configured through `POWBENCH_SEED`, `POWBENCH_SINK`, `POWBENCH_PROFILE`
//! and `RUST_LOG`. For statistically rigorous numbers use `cargo bench`.

use std::process::ExitCode;

use powbench::{
    emit_result, registered_cases, rng_from_seed, run_baseline, run_case, summary_string, Settings,
};

fn main() -> ExitCode {
    env_logger::init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "seed={:?} sink={} warmup={} batch={}",
        settings.seed,
        settings.sink.name(),
        settings.bench.warmup_iters,
        settings.bench.batch_iters,
    );

    // Operands are drawn here, before any timing.
    let mut rng = rng_from_seed(settings.seed);
    let cases = registered_cases(&mut rng);

    let baseline = run_baseline(&settings.bench);
    log::info!("loop baseline: {baseline}");

    let mut sink = settings.sink.open();
    let mut entries = Vec::with_capacity(cases.len());
    for case in cases {
        let result = run_case(&case, &settings.bench);
        if result.median_ns <= baseline.median_ns {
            log::warn!(
                "{}: median not above loop baseline, call may have been optimized away",
                case.name
            );
        }
        if let Err(err) = emit_result(&mut *sink, case.name, result.last_value) {
            log::error!("{}: {err}", case.name);
            return ExitCode::FAILURE;
        }
        entries.push((case, result));
    }

    eprintln!("{}", summary_string(&entries));
    ExitCode::SUCCESS
}
