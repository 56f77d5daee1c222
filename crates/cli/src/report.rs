use anyhow::{Context, Result};
use serde::Serialize;
use shapes::cfg::RIGHT_ANGLE_EPS;
use shapes::numeric::tolerance_from_decimal_places;
use shapes::{Area, Circle, Triangle};

/// JSON row printed by `circle`.
#[derive(Debug, Serialize)]
pub struct CircleReport {
    pub shape: &'static str,
    pub radius: f64,
    pub area: f64,
    pub perimeter: f64,
}

/// JSON row printed by `triangle`.
#[derive(Debug, Serialize)]
pub struct TriangleReport {
    pub shape: &'static str,
    pub sides: [f64; 3],
    pub area: f64,
    pub perimeter: f64,
    pub is_right: bool,
    /// `None` means the default absolute tolerance was used.
    pub decimal_places: Option<i32>,
    pub tolerance: f64,
}

/// JSON block printed by `report`.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub cli_version: &'static str,
    pub shapes_version: &'static str,
    pub right_angle_eps: f64,
}

pub fn circle_report(radius: f64) -> Result<CircleReport> {
    let circle = Circle::new(radius).with_context(|| format!("circle(radius={radius})"))?;
    Ok(CircleReport {
        shape: "circle",
        radius: circle.radius(),
        area: circle.area().context("circle area")?,
        perimeter: circle.perimeter().context("circle perimeter")?,
    })
}

pub fn triangle_report(
    a: f64,
    b: f64,
    c: f64,
    decimal_places: Option<i32>,
) -> Result<TriangleReport> {
    let triangle =
        Triangle::new(a, b, c).with_context(|| format!("triangle(a={a}, b={b}, c={c})"))?;
    let (is_right, tolerance) = match decimal_places {
        Some(d) => (
            triangle
                .is_right_triangle_with_precision(d)
                .with_context(|| format!("right-angle check at {d} decimal places"))?,
            tolerance_from_decimal_places(d)?,
        ),
        None => (
            triangle.is_right_triangle().context("right-angle check")?,
            RIGHT_ANGLE_EPS,
        ),
    };
    Ok(TriangleReport {
        shape: "triangle",
        sides: triangle.sides(),
        area: triangle.area().context("triangle area")?,
        perimeter: triangle.perimeter().context("triangle perimeter")?,
        is_right,
        decimal_places,
        tolerance,
    })
}

pub fn version_report() -> VersionReport {
    VersionReport {
        cli_version: env!("CARGO_PKG_VERSION"),
        shapes_version: shapes::VERSION,
        right_angle_eps: RIGHT_ANGLE_EPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use shapes::ShapeError;

    fn shape_error(err: &anyhow::Error) -> &ShapeError {
        err.downcast_ref::<ShapeError>()
            .expect("error chain carries a ShapeError")
    }

    #[test]
    fn circle_report_serializes_area() {
        let report = circle_report(10.0).unwrap();
        let json: Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["shape"], "circle");
        assert_eq!(json["radius"], 10.0);
        let area = json["area"].as_f64().unwrap();
        assert!((area - 314.16).abs() < 5e-3);
    }

    #[test]
    fn circle_report_invalid_radius() {
        let err = circle_report(-1.0).unwrap_err();
        assert!(shape_error(&err).is_invalid_argument());
        assert!(format!("{err:#}").contains("radius=-1"));
    }

    #[test]
    fn circle_report_overflow() {
        let err = circle_report(f64::MAX).unwrap_err();
        assert!(shape_error(&err).is_arithmetic_overflow());
    }

    #[test]
    fn triangle_report_default_tolerance() {
        let report = triangle_report(3.0, 4.0, 5.0, None).unwrap();
        assert!(report.is_right);
        assert_eq!(report.tolerance, RIGHT_ANGLE_EPS);
        assert!((report.area - 6.0).abs() < 1e-12);
        let json: Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["decimal_places"], Value::Null);
        assert_eq!(json["sides"][2], 5.0);
    }

    #[test]
    fn triangle_report_precision_flips_verdict() {
        let loose = triangle_report(3.21, 4.39, 5.44, Some(1)).unwrap();
        let tight = triangle_report(3.21, 4.39, 5.44, Some(3)).unwrap();
        assert!(loose.is_right);
        assert!(!tight.is_right);
        assert!((tight.tolerance - 1e-3).abs() < 1e-18);
    }

    #[test]
    fn triangle_report_errors() {
        let err = triangle_report(1.0, 1.0, 3.0, None).unwrap_err();
        assert!(shape_error(&err).is_invalid_argument());
        let err = triangle_report(3.0, 4.0, 5.0, Some(-2)).unwrap_err();
        assert!(shape_error(&err).is_invalid_argument());
    }

    #[test]
    fn version_report_names_library() {
        let json = serde_json::to_value(version_report()).unwrap();
        assert_eq!(json["shapes_version"], shapes::VERSION);
    }
}
