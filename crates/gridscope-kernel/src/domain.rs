//! Axis-aligned rectangular domains on the integer lattice.
//!
//! A domain is the set of lattice points between an inclusive lower and
//! upper bound. Iteration order is fixed: the x coordinate varies
//! fastest, then y, then (in 3D) z. A domain whose upper bound is below
//! its lower bound on any axis is empty and iterates over nothing.

use serde::{Deserialize, Serialize};

use crate::point::{Point2, Point3};

/// A finite rectangular subset of the 2D lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain2 {
    lower: Point2,
    upper: Point2,
}

impl Domain2 {
    /// Creates the domain `[lower.x, upper.x] x [lower.y, upper.y]`.
    #[must_use]
    pub fn new(lower: Point2, upper: Point2) -> Self {
        Self { lower, upper }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn lower_bound(&self) -> Point2 {
        self.lower
    }

    /// Inclusive upper bound.
    #[must_use]
    pub fn upper_bound(&self) -> Point2 {
        self.upper
    }

    /// Number of lattice points along x.
    #[must_use]
    pub fn width(&self) -> u32 {
        extent(self.lower.x, self.upper.x)
    }

    /// Number of lattice points along y.
    #[must_use]
    pub fn height(&self) -> u32 {
        extent(self.lower.y, self.upper.y)
    }

    /// Total number of lattice points.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Whether the domain contains no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether `p` lies inside the domain.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.lower.x && p.x <= self.upper.x && p.y >= self.lower.y && p.y <= self.upper.y
    }

    /// Iterates over all points, x varying fastest.
    pub fn iter(&self) -> Domain2Iter {
        Domain2Iter {
            domain: *self,
            next: if self.is_empty() { None } else { Some(self.lower) },
        }
    }
}

impl IntoIterator for &Domain2 {
    type Item = Point2;
    type IntoIter = Domain2Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`Domain2`].
#[derive(Debug, Clone)]
pub struct Domain2Iter {
    domain: Domain2,
    next: Option<Point2>,
}

impl Iterator for Domain2Iter {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        let current = self.next?;
        let mut p = current;
        p.x += 1;
        if p.x > self.domain.upper.x {
            p.x = self.domain.lower.x;
            p.y += 1;
        }
        self.next = if p.y > self.domain.upper.y { None } else { Some(p) };
        Some(current)
    }
}

/// A finite rectangular subset of the 3D lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain3 {
    lower: Point3,
    upper: Point3,
}

impl Domain3 {
    /// Creates the domain spanned by the two inclusive bounds.
    #[must_use]
    pub fn new(lower: Point3, upper: Point3) -> Self {
        Self { lower, upper }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn lower_bound(&self) -> Point3 {
        self.lower
    }

    /// Inclusive upper bound.
    #[must_use]
    pub fn upper_bound(&self) -> Point3 {
        self.upper
    }

    /// Number of lattice points along x.
    #[must_use]
    pub fn width(&self) -> u32 {
        extent(self.lower.x, self.upper.x)
    }

    /// Number of lattice points along y.
    #[must_use]
    pub fn height(&self) -> u32 {
        extent(self.lower.y, self.upper.y)
    }

    /// Number of lattice points along z.
    #[must_use]
    pub fn depth(&self) -> u32 {
        extent(self.lower.z, self.upper.z)
    }

    /// Total number of lattice points.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height()) * u64::from(self.depth())
    }

    /// Whether the domain contains no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether `p` lies inside the domain.
    #[must_use]
    pub fn contains(&self, p: Point3) -> bool {
        p.x >= self.lower.x
            && p.x <= self.upper.x
            && p.y >= self.lower.y
            && p.y <= self.upper.y
            && p.z >= self.lower.z
            && p.z <= self.upper.z
    }

    /// Iterates over all points, x varying fastest, then y, then z.
    pub fn iter(&self) -> Domain3Iter {
        Domain3Iter {
            domain: *self,
            next: if self.is_empty() { None } else { Some(self.lower) },
        }
    }
}

impl IntoIterator for &Domain3 {
    type Item = Point3;
    type IntoIter = Domain3Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`Domain3`].
#[derive(Debug, Clone)]
pub struct Domain3Iter {
    domain: Domain3,
    next: Option<Point3>,
}

impl Iterator for Domain3Iter {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        let current = self.next?;
        let mut p = current;
        p.x += 1;
        if p.x > self.domain.upper.x {
            p.x = self.domain.lower.x;
            p.y += 1;
            if p.y > self.domain.upper.y {
                p.y = self.domain.lower.y;
                p.z += 1;
            }
        }
        self.next = if p.z > self.domain.upper.z { None } else { Some(p) };
        Some(current)
    }
}

fn extent(lower: i32, upper: i32) -> u32 {
    if upper < lower {
        0
    } else {
        // Inclusive span; safe because upper >= lower.
        (i64::from(upper) - i64::from(lower) + 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents_and_size() {
        let d = Domain2::new(Point2::new(-1, 2), Point2::new(2, 3));
        assert_eq!(d.width(), 4);
        assert_eq!(d.height(), 2);
        assert_eq!(d.size(), 8);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_empty_domain_iterates_nothing() {
        let d = Domain2::new(Point2::new(0, 0), Point2::new(-1, 5));
        assert!(d.is_empty());
        assert_eq!(d.iter().count(), 0);

        let d3 = Domain3::new(Point3::new(2, 0, 0), Point3::new(1, 9, 9));
        assert!(d3.is_empty());
        assert_eq!(d3.iter().count(), 0);
    }

    #[test]
    fn test_iteration_order_x_fastest() {
        let d = Domain2::new(Point2::new(0, 0), Point2::new(1, 1));
        let pts: Vec<Point2> = d.iter().collect();
        assert_eq!(
            pts,
            vec![
                Point2::new(0, 0),
                Point2::new(1, 0),
                Point2::new(0, 1),
                Point2::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_iteration_order_3d() {
        let d = Domain3::new(Point3::new(0, 0, 0), Point3::new(1, 0, 1));
        let pts: Vec<Point3> = d.iter().collect();
        assert_eq!(
            pts,
            vec![
                Point3::new(0, 0, 0),
                Point3::new(1, 0, 0),
                Point3::new(0, 0, 1),
                Point3::new(1, 0, 1),
            ]
        );
    }

    #[test]
    fn test_iteration_count_matches_size() {
        let d = Domain3::new(Point3::new(-2, -2, -2), Point3::new(2, 1, 0));
        assert_eq!(d.iter().count() as u64, d.size());
    }

    #[test]
    fn test_contains() {
        let d = Domain2::new(Point2::new(0, 0), Point2::new(4, 4));
        assert!(d.contains(Point2::new(0, 0)));
        assert!(d.contains(Point2::new(4, 4)));
        assert!(!d.contains(Point2::new(5, 0)));
        assert!(!d.contains(Point2::new(0, -1)));
    }
}
