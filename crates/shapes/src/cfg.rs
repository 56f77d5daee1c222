//! Tolerance defaults for shape queries.
//!
//! Policy
//! - Defaults are fixed constants. Callers that need a different precision
//!   pass it explicitly (see `Triangle::is_right_triangle_with_precision`).

/// Absolute tolerance for `|a² + b² - c²|` in the default right-angle check.
pub const RIGHT_ANGLE_EPS: f64 = 1e-10;
