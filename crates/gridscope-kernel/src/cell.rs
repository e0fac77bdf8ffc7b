//! Cells of the Khalimsky grid.
//!
//! A cell is stored through its Khalimsky coordinates: a lattice point
//! whose parities encode the cell's dimension. A coordinate is *open*
//! on an axis when it is odd there and *closed* when it is even; the
//! cell's dimension is the number of open axes. The embedded center of
//! a cell is its Khalimsky coordinate halved on every axis, and the
//! cell spans half a unit on each open axis around that center.
//!
//! Signed cells pair a cell with an orientation bit, which downstream
//! drawing uses to pick a color and which grid curves use to orient
//! incidence.

use serde::{Deserialize, Serialize};

use crate::point::{Point2, Point3, RealPoint2, RealPoint3};

/// An unsigned cell of the 2D Khalimsky grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell2 {
    /// Khalimsky coordinates.
    pub coords: Point2,
}

impl Cell2 {
    /// Cell with the given Khalimsky coordinates.
    #[must_use]
    pub fn new(kx: i32, ky: i32) -> Self {
        Self { coords: Point2::new(kx, ky) }
    }

    /// The 0-cell at lattice point `p`.
    #[must_use]
    pub fn pointel(p: Point2) -> Self {
        Self { coords: p * 2 }
    }

    /// The 1-cell touching lattice point `p`, open along `axis` (0 = x, 1 = y).
    #[must_use]
    pub fn linel(p: Point2, axis: usize) -> Self {
        let mut k = p * 2;
        match axis {
            0 => k.x += 1,
            1 => k.y += 1,
            _ => panic!("axis out of range for a 2D cell"),
        }
        Self { coords: k }
    }

    /// The 2-cell whose lower corner sits at lattice point `p`.
    #[must_use]
    pub fn pixel(p: Point2) -> Self {
        Self { coords: p * 2 + Point2::new(1, 1) }
    }

    /// Cell dimension: the number of open (odd) axes.
    #[must_use]
    pub fn dim(&self) -> u32 {
        u32::from(is_open(self.coords.x)) + u32::from(is_open(self.coords.y))
    }

    /// Whether the cell is open along `axis`.
    #[must_use]
    pub fn is_open(&self, axis: usize) -> bool {
        match axis {
            0 => is_open(self.coords.x),
            1 => is_open(self.coords.y),
            _ => panic!("axis out of range for a 2D cell"),
        }
    }

    /// The single open axis of a 1-cell, if the cell has dimension one.
    #[must_use]
    pub fn open_axis(&self) -> Option<usize> {
        match (is_open(self.coords.x), is_open(self.coords.y)) {
            (true, false) => Some(0),
            (false, true) => Some(1),
            _ => None,
        }
    }

    /// Embedded center: Khalimsky coordinates halved.
    #[must_use]
    pub fn center(&self) -> RealPoint2 {
        self.coords.as_vec2() * 0.5
    }

    /// Half extent of the cell's span: 0.5 on open axes, 0 on closed ones.
    #[must_use]
    pub fn half_extent(&self) -> RealPoint2 {
        RealPoint2::new(
            if is_open(self.coords.x) { 0.5 } else { 0.0 },
            if is_open(self.coords.y) { 0.5 } else { 0.0 },
        )
    }

    /// The lattice point whose coordinates are the Khalimsky coordinates
    /// halved, rounded toward negative infinity.
    #[must_use]
    pub fn lattice_point(&self) -> Point2 {
        Point2::new(self.coords.x.div_euclid(2), self.coords.y.div_euclid(2))
    }
}

/// An oriented cell of the 2D Khalimsky grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedCell2 {
    /// Underlying unsigned cell.
    pub cell: Cell2,
    /// Orientation bit.
    pub positive: bool,
}

impl SignedCell2 {
    /// Signed cell from a cell and a sign.
    #[must_use]
    pub fn new(cell: Cell2, positive: bool) -> Self {
        Self { cell, positive }
    }

    /// The same cell with the opposite sign.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self { cell: self.cell, positive: !self.positive }
    }
}

/// An unsigned cell of the 3D Khalimsky grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell3 {
    /// Khalimsky coordinates.
    pub coords: Point3,
}

impl Cell3 {
    /// Cell with the given Khalimsky coordinates.
    #[must_use]
    pub fn new(kx: i32, ky: i32, kz: i32) -> Self {
        Self { coords: Point3::new(kx, ky, kz) }
    }

    /// The 0-cell at lattice point `p`.
    #[must_use]
    pub fn pointel(p: Point3) -> Self {
        Self { coords: p * 2 }
    }

    /// The 1-cell touching lattice point `p`, open along `axis`.
    #[must_use]
    pub fn linel(p: Point3, axis: usize) -> Self {
        let mut k = p * 2;
        add_unit(&mut k, axis);
        Self { coords: k }
    }

    /// The 2-cell between voxel `p` and voxel `p + e_axis`.
    #[must_use]
    pub fn surfel(p: Point3, axis: usize) -> Self {
        let mut k = p * 2 + Point3::new(1, 1, 1);
        add_unit(&mut k, axis);
        Self { coords: k }
    }

    /// The 3-cell of voxel `p`.
    #[must_use]
    pub fn voxel(p: Point3) -> Self {
        Self { coords: p * 2 + Point3::new(1, 1, 1) }
    }

    /// Cell dimension: the number of open (odd) axes.
    #[must_use]
    pub fn dim(&self) -> u32 {
        u32::from(is_open(self.coords.x))
            + u32::from(is_open(self.coords.y))
            + u32::from(is_open(self.coords.z))
    }

    /// Whether the cell is open along `axis`.
    #[must_use]
    pub fn is_open(&self, axis: usize) -> bool {
        match axis {
            0 => is_open(self.coords.x),
            1 => is_open(self.coords.y),
            2 => is_open(self.coords.z),
            _ => panic!("axis out of range for a 3D cell"),
        }
    }

    /// The single open axis of a 1-cell, if the cell has dimension one.
    #[must_use]
    pub fn open_axis(&self) -> Option<usize> {
        let open = [self.is_open(0), self.is_open(1), self.is_open(2)];
        if open.iter().filter(|&&o| o).count() == 1 {
            open.iter().position(|&o| o)
        } else {
            None
        }
    }

    /// The single closed axis of a 2-cell, if the cell has dimension two.
    #[must_use]
    pub fn orthogonal_axis(&self) -> Option<usize> {
        let closed = [!self.is_open(0), !self.is_open(1), !self.is_open(2)];
        if closed.iter().filter(|&&c| c).count() == 1 {
            closed.iter().position(|&c| c)
        } else {
            None
        }
    }

    /// Embedded center: Khalimsky coordinates halved.
    #[must_use]
    pub fn center(&self) -> RealPoint3 {
        self.coords.as_vec3() * 0.5
    }

    /// Half extent of the cell's span: 0.5 on open axes, 0 on closed ones.
    #[must_use]
    pub fn half_extent(&self) -> RealPoint3 {
        RealPoint3::new(
            if is_open(self.coords.x) { 0.5 } else { 0.0 },
            if is_open(self.coords.y) { 0.5 } else { 0.0 },
            if is_open(self.coords.z) { 0.5 } else { 0.0 },
        )
    }

    /// The lattice point whose coordinates are the Khalimsky coordinates
    /// halved, rounded toward negative infinity.
    #[must_use]
    pub fn lattice_point(&self) -> Point3 {
        Point3::new(
            self.coords.x.div_euclid(2),
            self.coords.y.div_euclid(2),
            self.coords.z.div_euclid(2),
        )
    }
}

/// An oriented cell of the 3D Khalimsky grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedCell3 {
    /// Underlying unsigned cell.
    pub cell: Cell3,
    /// Orientation bit.
    pub positive: bool,
}

impl SignedCell3 {
    /// Signed cell from a cell and a sign.
    #[must_use]
    pub fn new(cell: Cell3, positive: bool) -> Self {
        Self { cell, positive }
    }

    /// The same cell with the opposite sign.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self { cell: self.cell, positive: !self.positive }
    }
}

fn is_open(k: i32) -> bool {
    k & 1 != 0
}

fn add_unit(k: &mut Point3, axis: usize) {
    match axis {
        0 => k.x += 1,
        1 => k.y += 1,
        2 => k.z += 1,
        _ => panic!("axis out of range for a 3D cell"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_counts_odd_axes() {
        assert_eq!(Cell2::new(4, 6).dim(), 0);
        assert_eq!(Cell2::new(5, 6).dim(), 1);
        assert_eq!(Cell2::new(5, 7).dim(), 2);
        assert_eq!(Cell3::new(2, 4, 6).dim(), 0);
        assert_eq!(Cell3::new(3, 4, 7).dim(), 2);
        assert_eq!(Cell3::new(3, 5, 7).dim(), 3);
    }

    #[test]
    fn test_constructors_match_parities() {
        let p = Point2::new(3, -2);
        assert_eq!(Cell2::pointel(p).dim(), 0);
        assert_eq!(Cell2::linel(p, 0).dim(), 1);
        assert_eq!(Cell2::linel(p, 1).dim(), 1);
        assert_eq!(Cell2::pixel(p).dim(), 2);

        let q = Point3::new(0, 1, -4);
        assert_eq!(Cell3::pointel(q).dim(), 0);
        assert_eq!(Cell3::linel(q, 2).dim(), 1);
        assert_eq!(Cell3::surfel(q, 1).dim(), 2);
        assert_eq!(Cell3::voxel(q).dim(), 3);
    }

    #[test]
    fn test_center_is_half_coordinates() {
        let c = Cell2::new(7, 4);
        assert_eq!(c.center(), RealPoint2::new(3.5, 2.0));
        let c3 = Cell3::new(-3, 0, 5);
        assert_eq!(c3.center(), RealPoint3::new(-1.5, 0.0, 2.5));
    }

    #[test]
    fn test_surfel_orthogonal_axis() {
        let s = Cell3::surfel(Point3::new(1, 2, 3), 2);
        assert_eq!(s.dim(), 2);
        assert_eq!(s.orthogonal_axis(), Some(2));
        assert_eq!(Cell3::voxel(Point3::ZERO).orthogonal_axis(), None);
    }

    #[test]
    fn test_linel_open_axis() {
        assert_eq!(Cell3::linel(Point3::new(0, 0, 0), 1).open_axis(), Some(1));
        assert_eq!(Cell3::pointel(Point3::ZERO).open_axis(), None);
        assert_eq!(Cell2::linel(Point2::new(2, 2), 0).open_axis(), Some(0));
    }

    #[test]
    fn test_lattice_point_floors_negatives() {
        assert_eq!(Cell2::new(-3, 5).lattice_point(), Point2::new(-2, 2));
        assert_eq!(Cell3::voxel(Point3::new(-1, 0, 2)).lattice_point(), Point3::new(-1, 0, 2));
    }

    #[test]
    fn test_signed_cell_flip() {
        let s = SignedCell3::new(Cell3::voxel(Point3::ZERO), true);
        assert!(!s.flipped().positive);
        assert_eq!(s.flipped().cell, s.cell);
    }
}
