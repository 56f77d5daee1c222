use crate::error::ShapeError;

/// A shape whose area can be computed.
///
/// Implementations return `ShapeError::ArithmeticOverflow` when the area is
/// not a finite number for the stored (valid) dimensions.
pub trait Area {
    fn area(&self) -> Result<f64, ShapeError>;
}
