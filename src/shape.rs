//! Hit-testing geometry.
//!
//! Shapes are stateless geometry relative to an implicit local origin: every
//! query takes coordinates already expressed in the shape's local frame (the
//! owning entity subtracts its transform position first). Rectangles and
//! lines anchor at the origin corner/endpoint; circles center on the origin.

use crate::foundation::core::Point;
use crate::foundation::error::{ScenaError, ScenaResult};

/// Polymorphic hit-testing geometry as one tagged union.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    Circle {
        radius: f64,
    },
    Rect {
        w: f64,
        h: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Closed polygon given as an ordered vertex sequence.
    Path(Vec<Point>),
    /// Union of member shapes; hit tests are an OR over members.
    Composite(Vec<Shape>),
}

impl Shape {
    /// Circle centered on the local origin. Fails on a degenerate radius.
    pub fn circle(radius: f64) -> ScenaResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ScenaError::construction(
                "circle radius must be finite and > 0",
            ));
        }
        Ok(Self::Circle { radius })
    }

    /// Axis-aligned rectangle with its top-left corner on the local origin.
    pub fn rect(w: f64, h: f64) -> ScenaResult<Self> {
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(ScenaError::construction(
                "rect dimensions must be finite and > 0",
            ));
        }
        Ok(Self::Rect { w, h })
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> ScenaResult<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(ScenaError::construction("line endpoints must be finite"));
        }
        Ok(Self::Line { x1, y1, x2, y2 })
    }

    pub fn path(points: Vec<Point>) -> ScenaResult<Self> {
        if points.len() < 2 {
            return Err(ScenaError::construction("path needs at least 2 points"));
        }
        Ok(Self::Path(points))
    }

    pub fn composite(shapes: Vec<Shape>) -> ScenaResult<Self> {
        if shapes.is_empty() {
            return Err(ScenaError::construction("composite needs at least 1 shape"));
        }
        Ok(Self::Composite(shapes))
    }

    /// Point containment in the shape's local frame.
    ///
    /// Rectangles require the point to be inside on *both* axes. Lines and
    /// open paths have no area and never contain a point.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Circle { radius } => p.x.hypot(p.y) < *radius,
            Self::Rect { w, h } => p.x > 0.0 && p.x < *w && p.y > 0.0 && p.y < *h,
            Self::Line { .. } | Self::Path(_) => false,
            Self::Composite(shapes) => shapes.iter().any(|s| s.contains(p)),
        }
    }

    /// Radius of the smallest origin-centered circle enclosing the shape.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Self::Circle { radius } => *radius,
            Self::Rect { w, h } => w.hypot(*h) / 2.0,
            Self::Line { x1, y1, x2, y2 } => (x2 - x1).hypot(y2 - y1) / 2.0,
            Self::Path(points) => points
                .iter()
                .map(|p| p.x.hypot(p.y))
                .fold(0.0_f64, f64::max),
            Self::Composite(shapes) => shapes
                .iter()
                .map(Shape::bounding_radius)
                .fold(0.0_f64, f64::max),
        }
    }

    /// Coarse overlap test between two shapes whose origins are `offset`
    /// apart: a bounding-radius sum check, not exact intersection.
    /// Composites OR over their members.
    pub fn overlaps(&self, other: &Shape, offset: Point) -> bool {
        match (self, other) {
            (Self::Composite(shapes), _) => shapes.iter().any(|s| s.overlaps(other, offset)),
            (_, Self::Composite(shapes)) => shapes.iter().any(|s| self.overlaps(s, offset)),
            _ => offset.x.hypot(offset.y) < self.bounding_radius() + other.bounding_radius(),
        }
    }

    /// Validate geometry invariants of an already-constructed shape.
    pub fn validate(&self) -> ScenaResult<()> {
        match self {
            Self::Circle { radius } => {
                Self::circle(*radius)?;
            }
            Self::Rect { w, h } => {
                Self::rect(*w, *h)?;
            }
            Self::Line { x1, y1, x2, y2 } => {
                Self::line(*x1, *y1, *x2, *y2)?;
            }
            Self::Path(points) => {
                if points.len() < 2 {
                    return Err(ScenaError::construction("path needs at least 2 points"));
                }
            }
            Self::Composite(shapes) => {
                if shapes.is_empty() {
                    return Err(ScenaError::construction("composite needs at least 1 shape"));
                }
                for s in shapes {
                    s.validate()?;
                }
            }
        }
        Ok(())
    }
}
