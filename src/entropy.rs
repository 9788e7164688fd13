//! Entropy accounting for uniform choices.

/// Entropy in bits of selecting uniformly from `n` equally likely
/// outcomes, rounded to two significant digits.
///
/// A single outcome carries no information so `bits(1)` is zero.
pub fn bits(n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    to_precision((n as f64).log2(), 2)
}

/// Round to a number of significant digits, like ECMAScript
/// `Number.prototype.toPrecision`.
fn to_precision(value: f64, digits: i32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}
