//! Output sink for the final observed value.
//!
//! Writing the last result somewhere gives the compiler an observable use
//! after the loop. Nobody reads it: the default sink discards everything.

use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{PowBenchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    /// `std::io::sink()`
    #[default]
    Null,
    Stdout,
}

impl SinkKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Stdout => "stdout",
        }
    }

    pub fn open(&self) -> Box<dyn Write> {
        match self {
            Self::Null => Box::new(io::sink()),
            Self::Stdout => Box::new(io::stdout()),
        }
    }
}

impl FromStr for SinkKind {
    type Err = PowBenchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("null") || value.eq_ignore_ascii_case("none") {
            return Ok(Self::Null);
        }
        if value.eq_ignore_ascii_case("stdout") {
            return Ok(Self::Stdout);
        }
        Err(PowBenchError::InvalidSink(value.to_string()))
    }
}

/// Write `value` as one text line.
pub fn emit_result<W: Write + ?Sized>(out: &mut W, case_name: &str, value: f64) -> Result<()> {
    writeln!(out, "{case_name} {value}")?;
    out.flush()?;
    Ok(())
}

/// Write the last observed value, if the loop produced one.
///
/// Returns `false` without touching `out` when `last` is `None`, e.g. when
/// the harness filtered the case out and its body never ran.
pub fn emit_observed<W: Write + ?Sized>(
    out: &mut W,
    case_name: &str,
    last: Option<f64>,
) -> Result<bool> {
    match last {
        Some(value) => emit_result(out, case_name, value).map(|()| true),
        None => {
            log::debug!("{case_name}: no iterations ran, nothing to emit");
            Ok(false)
        }
    }
}
