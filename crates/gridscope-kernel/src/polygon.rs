//! Lattice polygons, typically produced by faithful polygon
//! approximation of a digital contour.

use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// A polygonal line with lattice vertices, open or closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticePolygon {
    vertices: Vec<Point2>,
    closed: bool,
}

impl LatticePolygon {
    /// Polygon from its vertex list.
    #[must_use]
    pub fn new(vertices: Vec<Point2>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    /// The vertices, in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Whether the last vertex connects back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The edges as vertex pairs, including the closing edge when closed.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        let wrap = if self.closed && n > 2 { n } else { n.saturating_sub(1) };
        (0..wrap).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_polygon_edges() {
        let p = LatticePolygon::new(
            vec![Point2::new(0, 0), Point2::new(3, 1), Point2::new(5, 0)],
            false,
        );
        assert_eq!(p.edges().count(), 2);
    }

    #[test]
    fn test_closed_polygon_edges_wrap() {
        let p = LatticePolygon::new(
            vec![Point2::new(0, 0), Point2::new(3, 1), Point2::new(5, 0)],
            true,
        );
        let edges: Vec<_> = p.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point2::new(5, 0), Point2::new(0, 0)));
    }

    #[test]
    fn test_degenerate_polygons() {
        assert_eq!(LatticePolygon::new(vec![], true).edges().count(), 0);
        assert_eq!(LatticePolygon::new(vec![Point2::ZERO], true).edges().count(), 0);
    }
}
