//! Named power-call benchmark cases.
//!
//! Two cases are registered, each under its own name:
//! - `pow_fixed`: operands are the literals `(1.2, 1.2)`
//! - `pow_random`: operands are drawn once from `[1, 10)` before timing
//!
//! Every [`PowCase::step`] routes its operands and its result through
//! [`std::hint::black_box`]. The input barrier keeps the fixed literals from
//! being constant-folded; the output barrier keeps the call itself alive.

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::operands::{OperandPair, OperandRange};
use crate::scalar_ops::scalar_pow;

pub const POW_FIXED: &str = "pow_fixed";
pub const POW_RANDOM: &str = "pow_random";

/// One benchmark case: a name plus the operands it calls the power routine with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowCase {
    pub name: &'static str,
    pub operands: OperandPair,
}

impl PowCase {
    pub const fn fixed() -> Self {
        Self {
            name: POW_FIXED,
            operands: OperandPair::fixed(),
        }
    }

    /// Random case over the default `[1, 10)` range.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::random_in(rng, &OperandRange::default())
    }

    pub fn random_in<R: Rng>(rng: &mut R, range: &OperandRange) -> Self {
        Self {
            name: POW_RANDOM,
            operands: OperandPair::sample(rng, range),
        }
    }

    /// One timed iteration: a single power call behind optimization barriers.
    #[inline(always)]
    pub fn step(&self) -> f64 {
        let base = black_box(self.operands.base);
        let exponent = black_box(self.operands.exponent);
        black_box(scalar_pow(base, exponent))
    }

    /// Direct call with no barriers, used as the expected value.
    pub fn reference(&self) -> f64 {
        self.operands.base.powf(self.operands.exponent)
    }
}

/// Build the generator for operand sampling.
///
/// `None` seeds from OS entropy; `Some(seed)` gives a repeatable run.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::debug!("seeding operand rng with fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// All cases in registration order. Random operands are drawn here, once,
/// before any timing starts.
pub fn registered_cases<R: Rng>(rng: &mut R) -> Vec<PowCase> {
    let cases = vec![PowCase::fixed(), PowCase::random(rng)];
    for case in &cases {
        log::debug!("registered {} with operands {}", case.name, case.operands);
    }
    cases
}
