//! Base-10 magnitude helpers shared by every normalization stage.
//!
//! Rounding decisions only ever look at the leading significant digit, so
//! each stage first reduces a value by its order of magnitude. The same
//! exponent drives [`compensation_factor`], which lifts small operands into
//! integer range before dividing or rounding them.

/// Returns `10^exponent`.
///
/// Negative exponents are computed as `1 / 10^-exponent` so that `0.001` and
/// friends are the correctly rounded double rather than an accumulated product.
/// Exponents beyond `±308` saturate to `inf` and `0`.
#[must_use]
pub fn power_of_ten(exponent: i32) -> f64 {
    if exponent >= 0 {
        10_f64.powi(exponent)
    } else {
        1.0 / 10_f64.powi(-exponent)
    }
}

/// Integer exponent of the largest power of ten not exceeding `|value|`.
///
/// Zero and non-finite values have exponent `0` (magnitude `1`).
#[must_use]
pub fn magnitude_exponent(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }

    let abs = value.abs();
    let mut exponent = abs.log10().floor() as i32;
    // log10 can land one ulp on the wrong side of an exact power of ten.
    if power_of_ten(exponent) > abs {
        exponent -= 1;
    } else if power_of_ten(exponent + 1) <= abs {
        exponent += 1;
    }
    exponent
}

/// Order of magnitude of `value`: `10^floor(log10(|value|))`, with `0 -> 1`.
#[must_use]
pub fn order_of_magnitude(value: f64) -> f64 {
    power_of_ten(magnitude_exponent(value))
}

/// Power-of-ten multiplier applied to both operands of a division or rounding.
///
/// Equals `1 / min(order_of_magnitude(lhs), order_of_magnitude(rhs))` when that
/// minimum is below one and `1` otherwise.
#[must_use]
pub fn compensation_factor(lhs: f64, rhs: f64) -> f64 {
    let exponent = magnitude_exponent(lhs).min(magnitude_exponent(rhs));
    if exponent < 0 {
        power_of_ten(-exponent)
    } else {
        1.0
    }
}

/// Divides `lhs` by `rhs` after scaling both by [`compensation_factor`].
#[must_use]
pub fn compensated_div(lhs: f64, rhs: f64) -> f64 {
    let factor = compensation_factor(lhs, rhs);
    (lhs * factor) / (rhs * factor)
}
