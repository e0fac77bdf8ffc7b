//! Digital objects: a digital set together with an adjacency relation.
//!
//! The adjacency makes the point set a graph; drawing with adjacencies
//! walks each point's neighbourhood in the fixed offset order of
//! [`Adjacency2`] / [`Adjacency3`].

use crate::adjacency::{Adjacency2, Adjacency3};
use crate::digital_set::{DigitalSetBySet2, DigitalSetBySet3, PointSet2, PointSet3};
use crate::point::{Point2, Point3};

/// A 2D digital object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalObject2 {
    set: DigitalSetBySet2,
    adjacency: Adjacency2,
}

impl DigitalObject2 {
    /// Object over `set` with the given adjacency.
    #[must_use]
    pub fn new(set: DigitalSetBySet2, adjacency: Adjacency2) -> Self {
        Self { set, adjacency }
    }

    /// The underlying point set.
    #[must_use]
    pub fn set(&self) -> &DigitalSetBySet2 {
        &self.set
    }

    /// The adjacency relation.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency2 {
        self.adjacency
    }

    /// Number of points in the object.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether the object holds no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Neighbours of `p` that belong to the object, in offset order.
    pub fn neighbors(&self, p: Point2) -> impl Iterator<Item = Point2> + '_ {
        self.adjacency.offsets().iter().map(move |&d| p + d).filter(|&q| self.set.contains(q))
    }
}

/// A 3D digital object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalObject3 {
    set: DigitalSetBySet3,
    adjacency: Adjacency3,
}

impl DigitalObject3 {
    /// Object over `set` with the given adjacency.
    #[must_use]
    pub fn new(set: DigitalSetBySet3, adjacency: Adjacency3) -> Self {
        Self { set, adjacency }
    }

    /// The underlying point set.
    #[must_use]
    pub fn set(&self) -> &DigitalSetBySet3 {
        &self.set
    }

    /// The adjacency relation.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency3 {
        self.adjacency
    }

    /// Number of points in the object.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether the object holds no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Neighbours of `p` that belong to the object, in offset order.
    pub fn neighbors(&self, p: Point3) -> impl Iterator<Item = Point3> + '_ {
        self.adjacency.offsets().iter().map(move |&d| p + d).filter(|&q| self.set.contains(q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Domain2, Domain3};

    #[test]
    fn test_neighbors_respect_adjacency() {
        let d = Domain2::new(Point2::new(0, 0), Point2::new(4, 4));
        let mut set = DigitalSetBySet2::new(d);
        set.extend([Point2::new(1, 1), Point2::new(2, 1), Point2::new(2, 2)]);

        let four = DigitalObject2::new(set.clone(), Adjacency2::Four);
        let n4: Vec<Point2> = four.neighbors(Point2::new(1, 1)).collect();
        assert_eq!(n4, vec![Point2::new(2, 1)]);

        let eight = DigitalObject2::new(set, Adjacency2::Eight);
        let n8: Vec<Point2> = eight.neighbors(Point2::new(1, 1)).collect();
        assert_eq!(n8, vec![Point2::new(2, 1), Point2::new(2, 2)]);
    }

    #[test]
    fn test_neighbors_3d() {
        let d = Domain3::new(Point3::new(0, 0, 0), Point3::new(3, 3, 3));
        let mut set = DigitalSetBySet3::new(d);
        set.extend([Point3::new(1, 1, 1), Point3::new(1, 1, 2), Point3::new(2, 2, 1)]);

        let six = DigitalObject3::new(set.clone(), Adjacency3::Six);
        let n: Vec<Point3> = six.neighbors(Point3::new(1, 1, 1)).collect();
        assert_eq!(n, vec![Point3::new(1, 1, 2)]);

        let twenty_six = DigitalObject3::new(set, Adjacency3::TwentySix);
        assert_eq!(twenty_six.neighbors(Point3::new(1, 1, 1)).count(), 2);
    }

    #[test]
    fn test_empty_object() {
        let d = Domain2::new(Point2::new(0, 0), Point2::new(1, 1));
        let obj = DigitalObject2::new(DigitalSetBySet2::new(d), Adjacency2::Four);
        assert!(obj.is_empty());
        assert_eq!(obj.neighbors(Point2::ZERO).count(), 0);
    }
}
