//! Validated 2D shape values: circles and triangles.
//!
//! Purpose
//! - Provide small immutable value types whose constructors enforce the
//!   geometric preconditions (positive finite lengths, triangle inequality).
//! - Keep every numeric query explicit about floating-point failure: results
//!   that leave the finite range surface as `ShapeError::ArithmeticOverflow`
//!   instead of silently returning `inf`/`NaN`.
//!
//! Layout
//! - `area`: the `Area` capability shared by both shapes.
//! - `circle`, `triangle`: the shape values.
//! - `error`: `ShapeError` (invalid argument vs. arithmetic overflow).
//! - `numeric`: finite/positivity checks and tolerance conversion.
//! - `cfg`: fixed tolerance defaults.

pub mod area;
pub mod cfg;
pub mod circle;
pub mod error;
pub mod numeric;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::Area;
pub use circle::Circle;
pub use error::ShapeError;
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::Area;
    pub use crate::circle::Circle;
    pub use crate::error::ShapeError;
    pub use crate::triangle::Triangle;
    pub use nalgebra::Vector2 as Vec2;
}
