use std::f64::consts::PI;

/// Enum representing a closed set of shape variants with sentinel-based
/// error signaling: invalid dimensions make `area` return `f64::NAN`
/// instead of failing.
///
/// This is the deliberate counterpart to [`crate::geometry::Polygon`],
/// which fails fast with a descriptive error for the same class of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Triangle { base: f64, height: f64 },
}

impl Shape {
    /// Calculates the area of the shape, or `f64::NAN` when any dimension
    /// is not strictly positive. Callers must test the result with
    /// `is_nan()` before formatting it.
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => {
                if radius > 0.0 {
                    PI * radius * radius
                } else {
                    f64::NAN
                }
            }
            Shape::Rectangle { width, height } => {
                if width > 0.0 && height > 0.0 {
                    width * height
                } else {
                    f64::NAN
                }
            }
            Shape::Triangle { base, height } => {
                if base > 0.0 && height > 0.0 {
                    (base * height) / 2.0
                } else {
                    f64::NAN
                }
            }
        }
    }

    /// Produces a human-readable rendering of the shape. Never fails,
    /// even when the stored dimensions are invalid.
    pub fn describe(&self) -> String {
        match *self {
            Shape::Circle { radius } => format!("Circle(r={:?})", radius),
            Shape::Rectangle { width, height } => format!("Rectangle(w={:?},h={:?})", width, height),
            Shape::Triangle { base, height } => format!("Triangle(b={:?},h={:?})", base, height),
        }
    }
}
