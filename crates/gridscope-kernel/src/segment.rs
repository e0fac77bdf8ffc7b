//! Digital straight segments.
//!
//! A 2D segment is a run of lattice points inside the arithmetical
//! strip `mu <= a*x - b*y <= mu + omega - 1`, where the thickness
//! `omega` depends on the connectivity: `|a| + |b|` for 4-connected
//! (standard) segments and `max(|a|, |b|)` for 8-connected (naive)
//! ones. Construction verifies the strip invariant for every point and
//! rejects degenerate or reducible slope parameters.
//!
//! The 3D variant stores the recognized point run as-is; its drawing
//! styles only need the run and its end points.

use serde::{Deserialize, Serialize};

use gridscope_core::{GridscopeError, Result};

use crate::adjacency::Adjacency2;
use crate::point::{Point2, Point3};

/// A 2D digital straight segment with slope `a/b` and intercept `mu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalSegment2 {
    a: i32,
    b: i32,
    mu: i32,
    connectivity: Adjacency2,
    points: Vec<Point2>,
}

impl DigitalSegment2 {
    /// Builds a segment and checks the strip invariant for every point.
    pub fn new(
        a: i32,
        b: i32,
        mu: i32,
        connectivity: Adjacency2,
        points: Vec<Point2>,
    ) -> Result<Self> {
        if a == 0 && b == 0 {
            return Err(GridscopeError::InvalidSegment(
                "direction (a, b) must be nonzero".into(),
            ));
        }
        if gcd(a.unsigned_abs(), b.unsigned_abs()) != 1 {
            return Err(GridscopeError::InvalidSegment(format!(
                "direction ({a}, {b}) must be irreducible"
            )));
        }
        let segment = Self { a, b, mu, connectivity, points };
        let hi = i64::from(mu) + segment.omega() - 1;
        for &p in &segment.points {
            let r = segment.remainder(p);
            if r < i64::from(mu) || r > hi {
                return Err(GridscopeError::InvalidSegment(format!(
                    "point ({}, {}) has remainder {r} outside [{mu}, {hi}]",
                    p.x, p.y
                )));
            }
        }
        Ok(segment)
    }

    /// Slope numerator.
    #[must_use]
    pub fn a(&self) -> i32 {
        self.a
    }

    /// Slope denominator.
    #[must_use]
    pub fn b(&self) -> i32 {
        self.b
    }

    /// Strip intercept.
    #[must_use]
    pub fn mu(&self) -> i32 {
        self.mu
    }

    /// Connectivity of the segment.
    #[must_use]
    pub fn connectivity(&self) -> Adjacency2 {
        self.connectivity
    }

    /// Arithmetical thickness of the strip.
    #[must_use]
    pub fn omega(&self) -> i64 {
        let (a, b) = (i64::from(self.a).abs(), i64::from(self.b).abs());
        match self.connectivity {
            Adjacency2::Four => a + b,
            Adjacency2::Eight => a.max(b),
        }
    }

    /// Remainder `a*x - b*y` of a point.
    #[must_use]
    pub fn remainder(&self, p: Point2) -> i64 {
        i64::from(self.a) * i64::from(p.x) - i64::from(self.b) * i64::from(p.y)
    }

    /// The recognized point run.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// First point of the run, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    /// Last point of the run, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    /// Direction vector `(b, a)` of the support lines.
    #[must_use]
    pub fn direction(&self) -> Point2 {
        Point2::new(self.b, self.a)
    }
}

/// A 3D digital straight segment: the recognized point run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalSegment3 {
    points: Vec<Point3>,
}

impl DigitalSegment3 {
    /// Segment over the given point run.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// The recognized point run.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// First point of the run, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    /// Last point of the run, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point3> {
        self.points.last().copied()
    }

    /// Displacement from the first to the last point, if the run is nonempty.
    #[must_use]
    pub fn extent(&self) -> Option<Point3> {
        match (self.first(), self.last()) {
            (Some(f), Some(l)) => Some(l - f),
            _ => None,
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    // Points of the naive segment y = x/2 for x in 0..=4.
    fn diagonal_run() -> Vec<Point2> {
        vec![
            Point2::new(0, 0),
            Point2::new(1, 0),
            Point2::new(2, 1),
            Point2::new(3, 1),
            Point2::new(4, 2),
        ]
    }

    #[test]
    fn test_valid_naive_segment() {
        let s = DigitalSegment2::new(1, 2, 0, Adjacency2::Eight, diagonal_run()).unwrap();
        assert_eq!(s.omega(), 2);
        assert_eq!(s.first(), Some(Point2::new(0, 0)));
        assert_eq!(s.last(), Some(Point2::new(4, 2)));
    }

    #[test]
    fn test_rejects_point_outside_strip() {
        let mut pts = diagonal_run();
        pts.push(Point2::new(4, 0));
        let err = DigitalSegment2::new(1, 2, 0, Adjacency2::Eight, pts).unwrap_err();
        assert!(matches!(err, GridscopeError::InvalidSegment(_)));
    }

    #[test]
    fn test_rejects_zero_direction() {
        let err = DigitalSegment2::new(0, 0, 0, Adjacency2::Eight, vec![]).unwrap_err();
        assert!(matches!(err, GridscopeError::InvalidSegment(_)));
    }

    #[test]
    fn test_rejects_reducible_direction() {
        let err = DigitalSegment2::new(2, 4, 0, Adjacency2::Four, vec![]).unwrap_err();
        assert!(matches!(err, GridscopeError::InvalidSegment(_)));
    }

    #[test]
    fn test_standard_segment_thickness() {
        let pts = vec![Point2::new(0, 0), Point2::new(1, 0), Point2::new(1, 1)];
        let s = DigitalSegment2::new(1, 1, 0, Adjacency2::Four, pts).unwrap();
        assert_eq!(s.omega(), 2);
    }

    #[test]
    fn test_empty_segment_is_allowed() {
        let s = DigitalSegment2::new(0, 1, 0, Adjacency2::Eight, vec![]).unwrap();
        assert!(s.points().is_empty());
        assert_eq!(s.first(), None);
    }

    #[test]
    fn test_segment_3d_extent() {
        let s = DigitalSegment3::new(vec![
            Point3::new(0, 0, 0),
            Point3::new(1, 1, 0),
            Point3::new(2, 1, 1),
        ]);
        assert_eq!(s.extent(), Some(Point3::new(2, 1, 1)));
        assert_eq!(DigitalSegment3::new(vec![]).extent(), None);
    }
}
