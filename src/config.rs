//! Environment-driven settings.
//!
//! | Variable           | Values                          | Default    |
//! |--------------------|---------------------------------|------------|
//! | `POWBENCH_SEED`    | any `u64`                       | OS entropy |
//! | `POWBENCH_SINK`    | `null`, `stdout`                | `null`     |
//! | `POWBENCH_PROFILE` | `default`, `fast`, `precise`    | `default`  |

use std::env;

use crate::error::{PowBenchError, Result};
use crate::measure::BenchConfig;
use crate::sink::SinkKind;

pub const SEED_VAR: &str = "POWBENCH_SEED";
pub const SINK_VAR: &str = "POWBENCH_SINK";
pub const PROFILE_VAR: &str = "POWBENCH_PROFILE";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    /// Fixed operand seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub sink: SinkKind,
    pub bench: BenchConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_VAR) {
            Some(value) => Some(parse_seed(&value)?),
            None => None,
        };
        let sink = match lookup(SINK_VAR) {
            Some(value) => value.parse()?,
            None => SinkKind::default(),
        };
        let bench = match lookup(PROFILE_VAR) {
            Some(value) => parse_profile(&value)?,
            None => BenchConfig::default(),
        };
        Ok(Self { seed, sink, bench })
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };
    parsed.map_err(|_| PowBenchError::InvalidSeed(value.to_string()))
}

fn parse_profile(value: &str) -> Result<BenchConfig> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("default") {
        Ok(BenchConfig::default())
    } else if value.eq_ignore_ascii_case("fast") {
        Ok(BenchConfig::fast())
    } else if value.eq_ignore_ascii_case("precise") {
        Ok(BenchConfig::precise())
    } else {
        Err(PowBenchError::InvalidProfile(value.to_string()))
    }
}
