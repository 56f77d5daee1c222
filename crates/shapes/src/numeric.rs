//! Shared floating-point guards.
//!
//! - `ensure_finite`: rejects `inf`/`NaN` results with `ArithmeticOverflow`.
//! - `ensure_length`: rejects NaN, non-positive, or infinite inputs with
//!   `InvalidArgument`. NaN is checked first since `NaN <= 0.0` is false.
//! - `tolerance_from_decimal_places`: `10^(-d)` for `d >= 0`.

use crate::error::ShapeError;

/// Pass `value` through if finite; otherwise report which quantity escaped.
#[inline]
pub fn ensure_finite(value: f64, what: &str) -> Result<f64, ShapeError> {
    if value.is_nan() {
        return Err(ShapeError::overflow(format!("{what} is not a number")));
    }
    if value.is_infinite() {
        return Err(ShapeError::overflow(format!("{what} is infinite")));
    }
    Ok(value)
}

/// Validate a length input: defined, strictly positive, finite.
pub fn ensure_length(value: f64, name: &str) -> Result<f64, ShapeError> {
    if value.is_nan() {
        return Err(ShapeError::invalid(format!("{name} must not be NaN")));
    }
    if value <= 0.0 {
        return Err(ShapeError::invalid(format!(
            "{name} must be > 0 (got {value})"
        )));
    }
    if value.is_infinite() {
        return Err(ShapeError::invalid(format!("{name} must be finite")));
    }
    Ok(value)
}

/// Absolute tolerance `10^(-decimal_places)`.
///
/// Negative precision would mean a tolerance above 1 and is rejected.
/// Very large precisions underflow to `0.0`, under which no strict `<`
/// comparison succeeds.
pub fn tolerance_from_decimal_places(decimal_places: i32) -> Result<f64, ShapeError> {
    if decimal_places < 0 {
        return Err(ShapeError::invalid(format!(
            "decimal places must be >= 0 (got {decimal_places})"
        )));
    }
    Ok(10f64.powi(-decimal_places))
}
