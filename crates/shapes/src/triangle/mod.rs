//! Triangle given by three side lengths.
//!
//! Model
//! - Sides are stored in the order given (`side_a`, `side_b`, `side_c`); the
//!   order only matters for error messages, never for geometry.
//! - Construction enforces positive finite sides and the strict triangle
//!   inequality, so degenerate (collinear) triangles are rejected.
//!
//! Numerics
//! - Area uses Heron's formula. For near-degenerate inputs the radicand can
//!   round below zero; the resulting `NaN` is reported as overflow rather
//!   than clamped.
//! - The right-angle check compares `s0² + s1²` against `s2²` on sorted
//!   sides with an absolute tolerance, so the verdict depends on the
//!   requested precision for near-right triangles.

use nalgebra::Vector2;

use crate::area::Area;
use crate::cfg::RIGHT_ANGLE_EPS;
use crate::error::ShapeError;
use crate::numeric::{ensure_finite, ensure_length, tolerance_from_decimal_places};

const SIDE_NAMES: [&str; 3] = ["side_a", "side_b", "side_c"];

/// Triangle with positive finite sides satisfying the strict triangle inequality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    sides: [f64; 3],
}

impl Triangle {
    /// Errors with `InvalidArgument` when a side is NaN, non-positive, or
    /// infinite, or when one side is at least the sum of the other two.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ShapeError> {
        let mut sides = [a, b, c];
        for (side, name) in sides.iter_mut().zip(SIDE_NAMES) {
            *side = ensure_length(*side, name)?;
        }
        // Each side against the sum of the other two.
        for k in 0..3 {
            let rest = sides[(k + 1) % 3] + sides[(k + 2) % 3];
            if rest <= sides[k] {
                return Err(ShapeError::invalid(format!(
                    "sides do not form a triangle: {} = {} >= {} (sum of the other two)",
                    SIDE_NAMES[k], sides[k], rest
                )));
            }
        }
        Ok(Self { sides })
    }

    /// Triangle spanned by three points in the plane.
    ///
    /// Coincident points give a zero side and collinear points violate the
    /// strict inequality; both are `InvalidArgument`.
    pub fn from_vertices(
        p: Vector2<f64>,
        q: Vector2<f64>,
        r: Vector2<f64>,
    ) -> Result<Self, ShapeError> {
        Self::new((r - q).norm(), (p - r).norm(), (q - p).norm())
    }

    #[inline]
    pub fn side_a(&self) -> f64 {
        self.sides[0]
    }
    #[inline]
    pub fn side_b(&self) -> f64 {
        self.sides[1]
    }
    #[inline]
    pub fn side_c(&self) -> f64 {
        self.sides[2]
    }
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }

    /// Sides in ascending order: two candidate catheti, then the candidate hypotenuse.
    pub fn sorted_sides(&self) -> [f64; 3] {
        let mut s = self.sides;
        s.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
        s
    }

    pub fn perimeter(&self) -> Result<f64, ShapeError> {
        let [a, b, c] = self.sides;
        ensure_finite(a + b + c, "perimeter")
    }

    pub fn semi_perimeter(&self) -> Result<f64, ShapeError> {
        let [a, b, c] = self.sides;
        ensure_finite((a + b + c) / 2.0, "semi-perimeter")
    }

    /// Right-angle check with the default absolute tolerance `RIGHT_ANGLE_EPS`.
    pub fn is_right_triangle(&self) -> Result<bool, ShapeError> {
        Ok(self.pythagorean_gap()? < RIGHT_ANGLE_EPS)
    }

    /// Right-angle check with tolerance `10^(-decimal_places)`.
    ///
    /// Larger `decimal_places` demand tighter agreement between `s0² + s1²`
    /// and `s2²`, so a near-right triangle that passes at a loose precision
    /// can fail at a tight one.
    ///
    /// Errors
    /// - `InvalidArgument` if `decimal_places < 0`.
    /// - `ArithmeticOverflow` if a squared term is not finite.
    pub fn is_right_triangle_with_precision(
        &self,
        decimal_places: i32,
    ) -> Result<bool, ShapeError> {
        let tol = tolerance_from_decimal_places(decimal_places)?;
        Ok(self.pythagorean_gap()? < tol)
    }

    /// `|s0² + s1² - s2²|` on sorted sides.
    fn pythagorean_gap(&self) -> Result<f64, ShapeError> {
        let [s0, s1, s2] = self.sorted_sides();
        let catheti = ensure_finite(s0 * s0 + s1 * s1, "sum of squared catheti")?;
        let hypotenuse = ensure_finite(s2 * s2, "squared hypotenuse")?;
        Ok((catheti - hypotenuse).abs())
    }
}

impl Area for Triangle {
    /// Heron's formula `sqrt(s (s-a) (s-b) (s-c))`.
    fn area(&self) -> Result<f64, ShapeError> {
        let s = self.semi_perimeter()?;
        let [a, b, c] = self.sides;
        let area = (s * (s - a) * (s - b) * (s - c)).sqrt();
        ensure_finite(area, "triangle area")
    }
}
