//! Keep-running loop state and per-iteration timing.
//!
//! Criterion owns timing for the bench targets. This module is the in-crate
//! counterpart used by the summary binary and by tests that check the power
//! call was not optimized away: a [`BenchState`] hands out iterations until
//! its budget is spent, timing them in batches so `Instant::now()` overhead
//! is amortized across many calls.

use std::hint::black_box;
use std::time::Instant;

use crate::cases::PowCase;

/// Result of running one case.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    /// Median time per iteration in nanoseconds
    pub median_ns: f64,
    /// Interquartile range of per-iteration time
    pub iqr_ns: f64,
    /// Fastest observed per-iteration time
    pub min_ns: f64,
    /// Number of timed batches
    pub samples: usize,
    /// Number of measured iterations (warmup excluded)
    pub iterations: u64,
    /// Value computed by the final iteration
    pub last_value: f64,
}

impl std::fmt::Display for BenchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "median={:.2}ns IQR={:.2}ns min={:.2}ns samples={} iters={}",
            self.median_ns, self.iqr_ns, self.min_ns, self.samples, self.iterations,
        )
    }
}

/// Loop budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Untimed iterations before measurement starts
    pub warmup_iters: usize,
    /// Iterations per timed batch
    pub batch_iters: usize,
    /// Minimum number of timed batches
    pub min_samples: usize,
    /// Maximum number of timed batches
    pub max_samples: usize,
    /// Minimum total measurement time in nanoseconds
    pub min_time_ns: u64,
    /// Maximum total measurement time in nanoseconds (timeout)
    pub max_time_ns: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            warmup_iters: 1_000,
            batch_iters: 1_000,
            min_samples: 7,
            max_samples: 100,
            min_time_ns: 50_000_000,    // 50ms
            max_time_ns: 2_000_000_000, // 2s
        }
    }
}

impl BenchConfig {
    /// Short budget for tests and smoke runs.
    pub fn fast() -> Self {
        BenchConfig {
            warmup_iters: 100,
            batch_iters: 256,
            min_samples: 5,
            max_samples: 30,
            min_time_ns: 5_000_000,   // 5ms
            max_time_ns: 200_000_000, // 200ms
        }
    }

    /// Long budget for final numbers.
    pub fn precise() -> Self {
        BenchConfig {
            warmup_iters: 10_000,
            batch_iters: 10_000,
            min_samples: 15,
            max_samples: 200,
            min_time_ns: 200_000_000,   // 200ms
            max_time_ns: 5_000_000_000, // 5s
        }
    }
}

/// Harness-style loop state: `while state.keep_running() { ... }`.
pub struct BenchState<'a> {
    config: &'a BenchConfig,
    batch: usize,
    warmup_left: usize,
    pending: usize,
    iterations: u64,
    wall_start: Option<Instant>,
    batch_start: Option<Instant>,
    times_ns: Vec<f64>,
    done: bool,
}

impl<'a> BenchState<'a> {
    pub fn new(config: &'a BenchConfig) -> Self {
        Self {
            config,
            batch: config.batch_iters.max(1),
            warmup_left: config.warmup_iters,
            pending: 0,
            iterations: 0,
            wall_start: None,
            batch_start: None,
            times_ns: Vec::with_capacity(config.max_samples),
            done: false,
        }
    }

    /// Returns `true` while another iteration should run.
    ///
    /// Warmup iterations come first and are not timed. After that, every
    /// `batch_iters` iterations the elapsed time is recorded as one sample.
    #[inline]
    pub fn keep_running(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.warmup_left > 0 {
            self.warmup_left -= 1;
            return true;
        }
        if self.pending > 0 {
            self.pending -= 1;
            self.iterations += 1;
            return true;
        }

        // Batch boundary.
        let now = Instant::now();
        match self.batch_start {
            Some(start) => {
                let elapsed = now.duration_since(start).as_nanos() as f64;
                self.times_ns.push(elapsed / self.batch as f64);
                if self.should_stop(now) {
                    self.done = true;
                    return false;
                }
            }
            None => self.wall_start = Some(now),
        }
        self.batch_start = Some(Instant::now());
        self.pending = self.batch - 1;
        self.iterations += 1;
        true
    }

    /// Measured iterations handed out so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    fn should_stop(&self, now: Instant) -> bool {
        let samples = self.times_ns.len();
        let wall = self
            .wall_start
            .map(|start| now.duration_since(start).as_nanos() as u64)
            .unwrap_or(0);
        if samples >= self.config.min_samples && wall >= self.config.min_time_ns {
            return true;
        }
        samples >= self.config.max_samples || wall >= self.config.max_time_ns
    }

    /// Consume the state and summarize the recorded samples.
    pub fn finish(mut self, last_value: f64) -> BenchResult {
        let stats = SampleStats::from_samples(&mut self.times_ns).unwrap_or_default();
        BenchResult {
            median_ns: stats.median_ns,
            iqr_ns: stats.iqr_ns,
            min_ns: stats.min_ns,
            samples: self.times_ns.len(),
            iterations: self.iterations,
            last_value,
        }
    }
}

/// Run `case` under `config`, returning timing and the last computed value.
pub fn run_case(case: &PowCase, config: &BenchConfig) -> BenchResult {
    let mut state = BenchState::new(config);
    let mut y = 0.0f64;
    while state.keep_running() {
        y = case.step();
    }
    let result = state.finish(y);
    log::debug!("{} {}: {result}", case.name, case.operands);
    result
}

/// Time the loop itself, with a body that only passes a constant through
/// the optimization barrier.
///
/// A case whose median is not clearly above this baseline under the same
/// config has lost its power call.
pub fn run_baseline(config: &BenchConfig) -> BenchResult {
    let mut state = BenchState::new(config);
    let mut y = 0.0f64;
    while state.keep_running() {
        y = black_box(1.0f64);
    }
    let result = state.finish(y);
    log::debug!("loop baseline: {result}");
    result
}

/// Format a summary table (for quick terminal inspection).
pub fn summary_string(entries: &[(PowCase, BenchResult)]) -> String {
    let mut s = String::with_capacity(512);
    s.push_str(&format!("\n{:=<96}\n powbench summary\n{:=<96}\n", "", ""));
    s.push_str(&format!(
        " {:<12} {:>26} {:>12} {:>10} {:>10} {:>10} {:>8}\n",
        "Case", "Operands", "Result", "Median(ns)", "IQR(ns)", "Min(ns)", "Samples"
    ));
    s.push_str(&format!("{:-<96}\n", ""));
    for (case, r) in entries {
        s.push_str(&format!(
            " {:<12} {:>26} {:>12.6} {:>10.2} {:>10.2} {:>10.2} {:>8}\n",
            case.name,
            case.operands.to_string(),
            r.last_value,
            r.median_ns,
            r.iqr_ns,
            r.min_ns,
            r.samples,
        ));
    }
    s.push_str(&format!("{:=<96}\n", ""));
    s
}

// ── Statistical analysis ────────────────────────────────────────────────

/// Order statistics over per-iteration sample times.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SampleStats {
    median_ns: f64,
    iqr_ns: f64,
    min_ns: f64,
}

impl SampleStats {
    /// Sorts `times` in place. `None` when there are no samples.
    fn from_samples(times: &mut [f64]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }
        times.sort_by(f64::total_cmp);

        // Drop the slowest 10% (preemption, interrupts).
        let kept = &times[..(times.len() * 9 / 10).max(1)];
        let len = kept.len();
        let median_ns = if len % 2 == 0 {
            (kept[len / 2 - 1] + kept[len / 2]) / 2.0
        } else {
            kept[len / 2]
        };

        Some(Self {
            median_ns,
            iqr_ns: kept[len * 3 / 4] - kept[len / 4],
            min_ns: kept[0],
        })
    }
}
