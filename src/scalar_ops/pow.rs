//! Scalar power function.

/// `out = base ^ exponent`
///
/// Operands are expected to be finite with `base > 0`; no domain checks are
/// made on this path.
#[no_mangle]
#[inline(never)]
pub extern "C" fn scalar_pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
