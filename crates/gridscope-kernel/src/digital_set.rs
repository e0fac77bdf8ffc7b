//! Digital sets: finite point sets inside a domain.
//!
//! Two storage strategies are provided per dimension. The ordered sets
//! keep their points sorted lexicographically (x before y before z) and
//! deduplicated; the vector sets keep insertion order and are cheaper
//! to fill when the caller already produces unique points. Both expose
//! the same read view through [`PointSet2`] / [`PointSet3`], which is
//! what every consumer in gridscope works against.

use std::collections::BTreeSet;

use crate::domain::{Domain2, Domain3};
use crate::point::{Point2, Point3};

/// Read view of a 2D digital set.
pub trait PointSet2 {
    /// Domain the set lives in.
    fn domain(&self) -> Domain2;

    /// Number of points in the set.
    fn len(&self) -> usize;

    /// Whether the set holds no point.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` belongs to the set.
    fn contains(&self, p: Point2) -> bool;

    /// Iterates over the points in the set's storage order.
    fn points(&self) -> impl Iterator<Item = Point2> + '_;
}

/// Read view of a 3D digital set.
pub trait PointSet3 {
    /// Domain the set lives in.
    fn domain(&self) -> Domain3;

    /// Number of points in the set.
    fn len(&self) -> usize;

    /// Whether the set holds no point.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` belongs to the set.
    fn contains(&self, p: Point3) -> bool;

    /// Iterates over the points in the set's storage order.
    fn points(&self) -> impl Iterator<Item = Point3> + '_;
}

/// 2D digital set backed by an ordered set.
///
/// Points iterate in lexicographic order (x first, then y). Inserting a
/// point outside the domain is a caller bug; it is checked in debug
/// builds only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalSetBySet2 {
    domain: Domain2,
    points: BTreeSet<(i32, i32)>,
}

impl DigitalSetBySet2 {
    /// Creates an empty set over `domain`.
    #[must_use]
    pub fn new(domain: Domain2) -> Self {
        Self { domain, points: BTreeSet::new() }
    }

    /// Inserts a point; returns `true` if it was not present before.
    pub fn insert(&mut self, p: Point2) -> bool {
        debug_assert!(self.domain.contains(p), "point outside the set's domain");
        self.points.insert((p.x, p.y))
    }

    /// Inserts every point of `iter`.
    pub fn extend<I: IntoIterator<Item = Point2>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }

    /// Removes a point; returns `true` if it was present.
    pub fn remove(&mut self, p: Point2) -> bool {
        self.points.remove(&(p.x, p.y))
    }
}

impl PointSet2 for DigitalSetBySet2 {
    fn domain(&self) -> Domain2 {
        self.domain
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn contains(&self, p: Point2) -> bool {
        self.points.contains(&(p.x, p.y))
    }

    fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.points.iter().map(|&(x, y)| Point2::new(x, y))
    }
}

/// 2D digital set backed by a vector, keeping insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalSetByVec2 {
    domain: Domain2,
    points: Vec<Point2>,
}

impl DigitalSetByVec2 {
    /// Creates an empty set over `domain`.
    #[must_use]
    pub fn new(domain: Domain2) -> Self {
        Self { domain, points: Vec::new() }
    }

    /// Inserts a point; returns `true` if it was not present before.
    ///
    /// Membership is checked linearly, which keeps set semantics while
    /// preserving insertion order.
    pub fn insert(&mut self, p: Point2) -> bool {
        debug_assert!(self.domain.contains(p), "point outside the set's domain");
        if self.points.contains(&p) {
            false
        } else {
            self.points.push(p);
            true
        }
    }

    /// Inserts every point of `iter`.
    pub fn extend<I: IntoIterator<Item = Point2>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl PointSet2 for DigitalSetByVec2 {
    fn domain(&self) -> Domain2 {
        self.domain
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn contains(&self, p: Point2) -> bool {
        self.points.contains(&p)
    }

    fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.points.iter().copied()
    }
}

/// 3D digital set backed by an ordered set.
///
/// Points iterate in lexicographic order (x, then y, then z).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalSetBySet3 {
    domain: Domain3,
    points: BTreeSet<(i32, i32, i32)>,
}

impl DigitalSetBySet3 {
    /// Creates an empty set over `domain`.
    #[must_use]
    pub fn new(domain: Domain3) -> Self {
        Self { domain, points: BTreeSet::new() }
    }

    /// Inserts a point; returns `true` if it was not present before.
    pub fn insert(&mut self, p: Point3) -> bool {
        debug_assert!(self.domain.contains(p), "point outside the set's domain");
        self.points.insert((p.x, p.y, p.z))
    }

    /// Inserts every point of `iter`.
    pub fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }

    /// Removes a point; returns `true` if it was present.
    pub fn remove(&mut self, p: Point3) -> bool {
        self.points.remove(&(p.x, p.y, p.z))
    }
}

impl PointSet3 for DigitalSetBySet3 {
    fn domain(&self) -> Domain3 {
        self.domain
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn contains(&self, p: Point3) -> bool {
        self.points.contains(&(p.x, p.y, p.z))
    }

    fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().map(|&(x, y, z)| Point3::new(x, y, z))
    }
}

/// 3D digital set backed by a vector, keeping insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalSetByVec3 {
    domain: Domain3,
    points: Vec<Point3>,
}

impl DigitalSetByVec3 {
    /// Creates an empty set over `domain`.
    #[must_use]
    pub fn new(domain: Domain3) -> Self {
        Self { domain, points: Vec::new() }
    }

    /// Inserts a point; returns `true` if it was not present before.
    pub fn insert(&mut self, p: Point3) -> bool {
        debug_assert!(self.domain.contains(p), "point outside the set's domain");
        if self.points.contains(&p) {
            false
        } else {
            self.points.push(p);
            true
        }
    }

    /// Inserts every point of `iter`.
    pub fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl PointSet3 for DigitalSetByVec3 {
    fn domain(&self) -> Domain3 {
        self.domain
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn contains(&self, p: Point3) -> bool {
        self.points.contains(&p)
    }

    fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().copied()
    }
}
