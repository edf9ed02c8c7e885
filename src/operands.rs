//! Operand pairs fed to the power routine.

use rand::Rng;

use crate::error::{PowBenchError, Result};

/// Literal used for both operands of the fixed case.
pub const FIXED_OPERAND: f64 = 1.2;

/// Lower bound (inclusive) of the default sampling range.
pub const DEFAULT_LOW: f64 = 1.0;
/// Upper bound (exclusive) of the default sampling range.
pub const DEFAULT_HIGH: f64 = 10.0;

/// `(base, exponent)` passed to the power routine. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandPair {
    pub base: f64,
    pub exponent: f64,
}

impl OperandPair {
    pub const fn new(base: f64, exponent: f64) -> Self {
        Self { base, exponent }
    }

    /// `(1.2, 1.2)`.
    pub const fn fixed() -> Self {
        Self::new(FIXED_OPERAND, FIXED_OPERAND)
    }

    /// Draw base and exponent independently from `range`.
    pub fn sample<R: Rng>(rng: &mut R, range: &OperandRange) -> Self {
        let base = range.sample(rng);
        let exponent = range.sample(rng);
        Self { base, exponent }
    }
}

impl std::fmt::Display for OperandPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.base, self.exponent)
    }
}

/// Half-open interval `[low, high)` operands are sampled from.
///
/// `low` must be strictly positive so the power call never sees a negative
/// base with a fractional exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandRange {
    low: f64,
    high: f64,
}

impl OperandRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low <= 0.0 || low >= high {
            return Err(PowBenchError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..self.high)
    }
}

impl Default for OperandRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}
