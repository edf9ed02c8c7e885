//! powbench: latency micro-benchmarks for a single `f64` power call.
//!
//! Two cases are measured, each registered under its own name:
//! - **`pow_fixed`**: `1.2.powf(1.2)` with the literals hidden behind an
//!   optimization barrier so they cannot be constant-folded
//! - **`pow_random`**: base and exponent drawn once from `[1, 10)` before
//!   timing starts
//!
//! The criterion targets in `benches/pow.rs` own the timing loop and the
//! reporting. [`measure`] provides a keep-running loop for the summary
//! binary and for tests that check the call survives optimization.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use powbench::cases::{registered_cases, rng_from_seed};
//! use powbench::measure::{run_case, BenchConfig};
//!
//! let mut rng = rng_from_seed(None);
//! for case in registered_cases(&mut rng) {
//!     let result = run_case(&case, &BenchConfig::fast());
//!     println!("{}: {result}", case.name);
//! }
//! ```

pub mod cases;
pub mod config;
pub mod error;
pub mod measure;
pub mod operands;
pub mod scalar_ops;
pub mod sink;

pub use cases::{registered_cases, rng_from_seed, PowCase, POW_FIXED, POW_RANDOM};
pub use config::Settings;
pub use error::{PowBenchError, Result};
pub use measure::{run_baseline, run_case, summary_string, BenchConfig, BenchResult, BenchState};
pub use operands::{OperandPair, OperandRange};
pub use scalar_ops::scalar_pow;
pub use sink::{emit_observed, emit_result, SinkKind};
