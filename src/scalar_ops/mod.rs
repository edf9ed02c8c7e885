//! Scalar routines under measurement.
//!
//! Every function here is `#[no_mangle] pub extern "C"` and never inlined, so
//! each benchmark iteration pays for one real call instead of a folded
//! expression.

pub mod pow;

pub use pow::scalar_pow;
