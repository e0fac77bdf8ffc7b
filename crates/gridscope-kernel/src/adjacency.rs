//! Lattice adjacency relations.
//!
//! Neighbour offsets are listed in a fixed order so that anything
//! iterating over them (object drawing in particular) is deterministic:
//! axis steps first, in `+x, +y, (+z,) -x, -y, (-z)` order, then the
//! diagonal steps in lexicographic order.

use serde::{Deserialize, Serialize};

use crate::point::{Point2, Point3};

const OFFSETS_4: [Point2; 4] = [
    Point2::new(1, 0),
    Point2::new(0, 1),
    Point2::new(-1, 0),
    Point2::new(0, -1),
];

const OFFSETS_8: [Point2; 8] = [
    Point2::new(1, 0),
    Point2::new(0, 1),
    Point2::new(-1, 0),
    Point2::new(0, -1),
    Point2::new(-1, -1),
    Point2::new(-1, 1),
    Point2::new(1, -1),
    Point2::new(1, 1),
];

const OFFSETS_6: [Point3; 6] = [
    Point3::new(1, 0, 0),
    Point3::new(0, 1, 0),
    Point3::new(0, 0, 1),
    Point3::new(-1, 0, 0),
    Point3::new(0, -1, 0),
    Point3::new(0, 0, -1),
];

const OFFSETS_18: [Point3; 18] = [
    Point3::new(1, 0, 0),
    Point3::new(0, 1, 0),
    Point3::new(0, 0, 1),
    Point3::new(-1, 0, 0),
    Point3::new(0, -1, 0),
    Point3::new(0, 0, -1),
    Point3::new(-1, -1, 0),
    Point3::new(-1, 0, -1),
    Point3::new(-1, 0, 1),
    Point3::new(-1, 1, 0),
    Point3::new(0, -1, -1),
    Point3::new(0, -1, 1),
    Point3::new(0, 1, -1),
    Point3::new(0, 1, 1),
    Point3::new(1, -1, 0),
    Point3::new(1, 0, -1),
    Point3::new(1, 0, 1),
    Point3::new(1, 1, 0),
];

const OFFSETS_26: [Point3; 26] = [
    Point3::new(1, 0, 0),
    Point3::new(0, 1, 0),
    Point3::new(0, 0, 1),
    Point3::new(-1, 0, 0),
    Point3::new(0, -1, 0),
    Point3::new(0, 0, -1),
    Point3::new(-1, -1, 0),
    Point3::new(-1, 0, -1),
    Point3::new(-1, 0, 1),
    Point3::new(-1, 1, 0),
    Point3::new(0, -1, -1),
    Point3::new(0, -1, 1),
    Point3::new(0, 1, -1),
    Point3::new(0, 1, 1),
    Point3::new(1, -1, 0),
    Point3::new(1, 0, -1),
    Point3::new(1, 0, 1),
    Point3::new(1, 1, 0),
    Point3::new(-1, -1, -1),
    Point3::new(-1, -1, 1),
    Point3::new(-1, 1, -1),
    Point3::new(-1, 1, 1),
    Point3::new(1, -1, -1),
    Point3::new(1, -1, 1),
    Point3::new(1, 1, -1),
    Point3::new(1, 1, 1),
];

/// Adjacency relation on the 2D lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjacency2 {
    /// Axis neighbours only.
    Four,
    /// Axis and diagonal neighbours.
    Eight,
}

impl Adjacency2 {
    /// Neighbour offsets of this relation, in iteration order.
    #[must_use]
    pub fn offsets(self) -> &'static [Point2] {
        match self {
            Adjacency2::Four => &OFFSETS_4,
            Adjacency2::Eight => &OFFSETS_8,
        }
    }

    /// Whether `p` and `q` are adjacent (and distinct).
    #[must_use]
    pub fn are_adjacent(self, p: Point2, q: Point2) -> bool {
        let d = q - p;
        self.offsets().contains(&d)
    }
}

/// Adjacency relation on the 3D lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjacency3 {
    /// Face neighbours.
    Six,
    /// Face and edge neighbours.
    Eighteen,
    /// Face, edge and vertex neighbours.
    TwentySix,
}

impl Adjacency3 {
    /// Neighbour offsets of this relation, in iteration order.
    #[must_use]
    pub fn offsets(self) -> &'static [Point3] {
        match self {
            Adjacency3::Six => &OFFSETS_6,
            Adjacency3::Eighteen => &OFFSETS_18,
            Adjacency3::TwentySix => &OFFSETS_26,
        }
    }

    /// Whether `p` and `q` are adjacent (and distinct).
    #[must_use]
    pub fn are_adjacent(self, p: Point3, q: Point3) -> bool {
        let d = q - p;
        self.offsets().contains(&d)
    }
}
