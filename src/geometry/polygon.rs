use crate::geometry::error::GeometryError;

/// Enum representing a closed set of polygon variants.
///
/// Values are immutable: `scale` builds a new polygon instead of mutating.
/// Dimensions are NOT validated at construction; a polygon may hold
/// non-positive fields and only fails once `area` or `perimeter` runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Polygon {
    Square { side: f64 },
    Rectangle { width: f64, height: f64 },
    RightTriangle { base: f64, height: f64 },
}

/// Checks a precondition, turning a violation into an `InvalidParameter`
/// error carrying the given message.
fn ensure(condition: bool, message: &str) -> Result<(), GeometryError> {
    if condition {
        Ok(())
    } else {
        Err(GeometryError::invalid_parameter(message))
    }
}

impl Polygon {
    /// Calculates the area of the polygon.
    ///
    /// Every dimension of the variant must be strictly positive.
    pub fn area(&self) -> Result<f64, GeometryError> {
        match *self {
            Polygon::Square { side } => {
                ensure(side > 0.0, "Side must be > 0")?;
                Ok(side * side)
            }
            Polygon::Rectangle { width, height } => {
                ensure(width > 0.0 && height > 0.0, "Width/Height must be > 0")?;
                Ok(width * height)
            }
            Polygon::RightTriangle { base, height } => {
                ensure(base > 0.0 && height > 0.0, "Base/Height must be > 0")?;
                Ok(0.5 * base * height)
            }
        }
    }

    /// Calculates the perimeter of the polygon.
    ///
    /// Same precondition discipline as [`Polygon::area`]. The right-triangle
    /// formula treats `base` and `height` as perpendicular legs and adds the
    /// hypotenuse; no geometric right-angle check is performed.
    pub fn perimeter(&self) -> Result<f64, GeometryError> {
        match *self {
            Polygon::Square { side } => {
                ensure(side > 0.0, "Side must be > 0")?;
                Ok(4.0 * side)
            }
            Polygon::Rectangle { width, height } => {
                ensure(width > 0.0 && height > 0.0, "Width/Height must be > 0")?;
                Ok(2.0 * (width + height))
            }
            Polygon::RightTriangle { base, height } => {
                ensure(base > 0.0 && height > 0.0, "Base/Height must be > 0")?;
                Ok(base + height + base.hypot(height))
            }
        }
    }

    /// Produces a human-readable rendering of the polygon.
    ///
    /// Always succeeds; it reflects the stored fields even when they are
    /// invalid for `area`/`perimeter`.
    pub fn describe(&self) -> String {
        match *self {
            Polygon::Square { side } => format!("Square(side={:?})", side),
            Polygon::Rectangle { width, height } => {
                format!("Rectangle(w={:?}, h={:?})", width, height)
            }
            Polygon::RightTriangle { base, height } => {
                format!("RightTriangle(b={:?}, h={:?})", base, height)
            }
        }
    }

    /// Returns a new polygon of the same variant with every length field
    /// multiplied by `factor`.
    ///
    /// Requires `factor > 0`. The resulting fields are not validated here;
    /// that is deferred to the next `area`/`perimeter` call.
    pub fn scale(&self, factor: f64) -> Result<Polygon, GeometryError> {
        ensure(factor > 0.0, "Scale factor must be > 0")?;
        Ok(match *self {
            Polygon::Square { side } => Polygon::Square {
                side: side * factor,
            },
            Polygon::Rectangle { width, height } => Polygon::Rectangle {
                width: width * factor,
                height: height * factor,
            },
            Polygon::RightTriangle { base, height } => Polygon::RightTriangle {
                base: base * factor,
                height: height * factor,
            },
        })
    }
}
