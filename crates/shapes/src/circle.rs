use std::f64::consts::PI;

use crate::area::Area;
use crate::error::ShapeError;
use crate::numeric::{ensure_finite, ensure_length};

/// Circle with a positive, finite radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Errors with `InvalidArgument` for NaN, non-positive, or infinite radii.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        let radius = ensure_length(radius, "radius")?;
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Circumference `2πr`.
    pub fn perimeter(&self) -> Result<f64, ShapeError> {
        ensure_finite(2.0 * PI * self.radius, "circumference")
    }
}

impl Area for Circle {
    /// `π r²`; `ArithmeticOverflow` once `r²` leaves the finite range.
    fn area(&self) -> Result<f64, ShapeError> {
        ensure_finite(PI * self.radius * self.radius, "circle area")
    }
}
