//! Show how the right-angle verdict moves with the requested precision.
//!
//! Usage:
//!   cargo run -p shapes --example right_triangles
//!
//! Prints `|a² + b² - c²|` and the verdict at 0..=6 decimal places for a
//! few exact and near-right triangles.

use shapes::{Area, Triangle};

fn main() {
    let samples = [(3.0, 4.0, 5.0), (3.21, 4.39, 5.44), (2.0, 3.0, 4.0)];
    for (a, b, c) in samples {
        let t = match Triangle::new(a, b, c) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("({a}, {b}, {c}): {e}");
                continue;
            }
        };
        let [s0, s1, s2] = t.sorted_sides();
        let gap = (s0 * s0 + s1 * s1 - s2 * s2).abs();
        let area = t.area().map_or_else(|e| e.to_string(), |v| format!("{v:.4}"));
        println!("({a}, {b}, {c}): area={area} gap={gap:.3e}");
        for d in 0..=6 {
            match t.is_right_triangle_with_precision(d) {
                Ok(right) => println!("  d={d}: right={right}"),
                Err(e) => println!("  d={d}: {e}"),
            }
        }
    }
}
