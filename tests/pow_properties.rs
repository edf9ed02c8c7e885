//! Property tests for the power-call cases.
//!
//! - Benchmark step matches a direct `powf` for every operand pair in [1, 10)
//! - The final observed value does not depend on the loop budget
//! - Timed iterations cost more than the bare loop

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use powbench::{
    registered_cases, rng_from_seed, run_baseline, run_case, scalar_pow, BenchConfig, OperandPair,
    OperandRange, PowCase, POW_FIXED, POW_RANDOM,
};

fn config_with_batches(batch_iters: usize, samples: usize) -> BenchConfig {
    BenchConfig {
        warmup_iters: 0,
        batch_iters,
        min_samples: samples,
        max_samples: samples,
        min_time_ns: 0,
        max_time_ns: u64::MAX,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Step semantics match a direct call
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_step_matches_direct_call(base in 1.0f64..10.0, exponent in 1.0f64..10.0) {
        let case = PowCase { name: POW_RANDOM, operands: OperandPair::new(base, exponent) };
        let direct = scalar_pow(base, exponent);
        prop_assert_eq!(case.step(), direct);
        let reference = case.reference();
        prop_assert!(
            (direct - reference).abs() <= reference.abs() * f64::EPSILON,
            "pow({}, {}) = {} vs {}", base, exponent, direct, reference
        );
    }

    #[test]
    fn prop_sampled_case_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let case = PowCase::random(&mut rng);
        let range = OperandRange::default();
        prop_assert!(range.contains(case.operands.base));
        prop_assert!(range.contains(case.operands.exponent));
        prop_assert!(case.step() >= 1.0);
    }

    #[test]
    fn prop_result_independent_of_loop_count(
        seed in any::<u64>(),
        batch_iters in 1usize..64,
        samples in 1usize..8,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let case = PowCase::random(&mut rng);
        let short = run_case(&case, &config_with_batches(1, 1));
        let long = run_case(&case, &config_with_batches(batch_iters, samples));
        prop_assert_eq!(short.last_value, long.last_value);
        prop_assert_eq!(long.iterations, (batch_iters * samples) as u64);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Example scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_fixed_case_reference_value() {
    let result = run_case(&PowCase::fixed(), &config_with_batches(16, 4));
    assert!(
        (result.last_value - 1.244_564_7).abs() < 1e-5,
        "pow(1.2, 1.2) = {}",
        result.last_value
    );
}

#[test]
fn test_power_of_two_is_exact() {
    let case = PowCase {
        name: "pow_2_10",
        operands: OperandPair::new(2.0, 10.0),
    };
    let result = run_case(&case, &config_with_batches(8, 3));
    assert_eq!(result.last_value, 1024.0);
}

#[test]
fn test_cases_registered_under_separate_names() {
    let cases = registered_cases(&mut rng_from_seed(None));
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].name, POW_FIXED);
    assert_eq!(cases[1].name, POW_RANDOM);
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Non-optimization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_timed_iterations_cost_more_than_empty_loop() {
    let config = BenchConfig::fast();
    let baseline = run_baseline(&config);
    eprintln!("loop baseline: {baseline}");

    let mut rng = rng_from_seed(Some(0x5eed));
    for case in registered_cases(&mut rng) {
        let result = run_case(&case, &config);
        assert!(result.samples > 0, "{}: no samples", case.name);
        assert!(
            result.median_ns > baseline.median_ns * 1.5,
            "{}: median {:.2}ns not above loop baseline {:.2}ns, call optimized away?",
            case.name,
            result.median_ns,
            baseline.median_ns
        );
        eprintln!("{}: {result}", case.name);
    }
}
