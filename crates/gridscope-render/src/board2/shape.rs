//! Primitive shapes of the 2D board.

use gridscope_kernel::RealPoint2;

/// One vector primitive on the board.
///
/// Angles are in radians, measured counterclockwise from the +x axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape2 {
    /// Straight segment from `a` to `b`.
    Segment { a: RealPoint2, b: RealPoint2 },
    /// Segment from `a` to `b` with an arrow head at `b`.
    Arrow { a: RealPoint2, b: RealPoint2 },
    /// Axis-aligned rectangle around `center`.
    Rectangle { center: RealPoint2, half_extent: RealPoint2 },
    /// Polyline through `vertices`, optionally closed.
    Polygon { vertices: Vec<RealPoint2>, closed: bool },
    /// Circle around `center`.
    Circle { center: RealPoint2, radius: f32 },
    /// Circular arc around `center` from `start_angle` to `end_angle`.
    Arc { center: RealPoint2, radius: f32, start_angle: f32, end_angle: f32 },
}

impl Shape2 {
    /// Loose axis-aligned bounding box of the shape.
    #[must_use]
    pub fn bounds(&self) -> (RealPoint2, RealPoint2) {
        match self {
            Shape2::Segment { a, b } | Shape2::Arrow { a, b } => (a.min(*b), a.max(*b)),
            Shape2::Rectangle { center, half_extent } => {
                (*center - *half_extent, *center + *half_extent)
            }
            Shape2::Polygon { vertices, .. } => {
                let mut lo = RealPoint2::splat(f32::INFINITY);
                let mut hi = RealPoint2::splat(f32::NEG_INFINITY);
                for v in vertices {
                    lo = lo.min(*v);
                    hi = hi.max(*v);
                }
                if vertices.is_empty() {
                    (RealPoint2::ZERO, RealPoint2::ZERO)
                } else {
                    (lo, hi)
                }
            }
            // The full circle box also covers any arc of it.
            Shape2::Circle { center, radius } | Shape2::Arc { center, radius, .. } => {
                (*center - RealPoint2::splat(*radius), *center + RealPoint2::splat(*radius))
            }
        }
    }
}
