//! Grid curves: sequences of signed cells of one dimension.
//!
//! A grid curve is either a path of 1-cells (a digital curve traced
//! through linels) or a band of 2-cells (a surfel strip on a digital
//! surface). Construction enforces the uniform dimension; the range
//! views then project the cells onto whatever geometry a consumer
//! needs: the cells themselves, lattice points, embedded midpoints,
//! oriented arrows, or the voxels incident to each surfel.
//!
//! Ranges that only make sense for one cell dimension (arrows need
//! linels, incidence needs surfels) are handed out through `Result`,
//! so a mismatched request fails before anything iterates.

use gridscope_core::{GridscopeError, Result};

use crate::cell::{Cell3, SignedCell3};
use crate::point::{Point3, RealPoint3};

/// A sequence of signed cells sharing one dimension (1 or 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCurve3 {
    scells: Vec<SignedCell3>,
    dim: Option<u32>,
}

impl GridCurve3 {
    /// Builds a curve; all cells must share one dimension, 1 or 2.
    pub fn new(scells: Vec<SignedCell3>) -> Result<Self> {
        let Some(first) = scells.first() else {
            return Ok(Self { scells, dim: None });
        };
        let dim = first.cell.dim();
        if dim != 1 && dim != 2 {
            return Err(GridscopeError::InvalidCellDimension {
                expected: if dim == 0 { 1 } else { 2 },
                actual: dim,
            });
        }
        for sc in &scells {
            let d = sc.cell.dim();
            if d != dim {
                return Err(GridscopeError::InvalidCellDimension { expected: dim, actual: d });
            }
        }
        Ok(Self { scells, dim: Some(dim) })
    }

    /// Builds a 1-cell curve through consecutive axis-neighbour points.
    ///
    /// Each step's sign records the travel direction along its axis.
    pub fn from_lattice_points(points: &[Point3]) -> Result<Self> {
        let mut scells = Vec::with_capacity(points.len().saturating_sub(1));
        for w in points.windows(2) {
            let (p, q) = (w[0], w[1]);
            let d = q - p;
            let step = d.abs();
            if step.x + step.y + step.z != 1 {
                return Err(GridscopeError::InvalidCurve(format!(
                    "points ({}, {}, {}) and ({}, {}, {}) are not axis neighbours",
                    p.x, p.y, p.z, q.x, q.y, q.z
                )));
            }
            let axis = if step.x == 1 { 0 } else if step.y == 1 { 1 } else { 2 };
            let positive = d.x + d.y + d.z > 0;
            let base = if positive { p } else { q };
            scells.push(SignedCell3::new(Cell3::linel(base, axis), positive));
        }
        Ok(Self { dim: if scells.is_empty() { None } else { Some(1) }, scells })
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scells.len()
    }

    /// Whether the curve holds no cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scells.is_empty()
    }

    /// Common dimension of the cells; `None` when empty.
    #[must_use]
    pub fn dim(&self) -> Option<u32> {
        self.dim
    }

    /// The signed cells, in curve order.
    #[must_use]
    pub fn scells(&self) -> &[SignedCell3] {
        &self.scells
    }

    /// View of the signed cells themselves.
    #[must_use]
    pub fn scells_range(&self) -> ScellsRange<'_> {
        ScellsRange { scells: &self.scells }
    }

    /// View of one lattice point per cell (Khalimsky coordinates halved).
    #[must_use]
    pub fn points_range(&self) -> PointsRange<'_> {
        PointsRange { scells: &self.scells }
    }

    /// View of the embedded cell centers.
    #[must_use]
    pub fn mid_points_range(&self) -> MidPointsRange<'_> {
        MidPointsRange { scells: &self.scells }
    }

    /// View of one oriented lattice step per 1-cell.
    pub fn arrows_range(&self) -> Result<ArrowsRange<'_>> {
        self.require_dim(1)?;
        Ok(ArrowsRange { scells: &self.scells })
    }

    /// View of the voxel on the oriented side of each 2-cell.
    pub fn inner_points_range(&self) -> Result<InnerPointsRange<'_>> {
        self.require_dim(2)?;
        Ok(InnerPointsRange { scells: &self.scells })
    }

    /// View of the voxel on the opposite side of each 2-cell.
    pub fn outer_points_range(&self) -> Result<OuterPointsRange<'_>> {
        self.require_dim(2)?;
        Ok(OuterPointsRange { scells: &self.scells })
    }

    /// View of the (inner, outer) voxel pair of each 2-cell.
    pub fn incident_points_range(&self) -> Result<IncidentPointsRange<'_>> {
        self.require_dim(2)?;
        Ok(IncidentPointsRange { scells: &self.scells })
    }

    fn require_dim(&self, expected: u32) -> Result<()> {
        match self.dim {
            None => Ok(()),
            Some(d) if d == expected => Ok(()),
            Some(d) => Err(GridscopeError::InvalidCellDimension { expected, actual: d }),
        }
    }
}

/// Range over the curve's signed cells.
#[derive(Debug, Clone, Copy)]
pub struct ScellsRange<'a> {
    scells: &'a [SignedCell3],
}

impl<'a> ScellsRange<'a> {
    /// Iterates over the cells in curve order.
    pub fn iter(&self) -> impl Iterator<Item = SignedCell3> + 'a {
        self.scells.iter().copied()
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scells.len()
    }

    /// Whether the range is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scells.is_empty()
    }
}

/// Range over one lattice point per cell.
#[derive(Debug, Clone, Copy)]
pub struct PointsRange<'a> {
    scells: &'a [SignedCell3],
}

impl<'a> PointsRange<'a> {
    /// Iterates over the lattice points in curve order.
    pub fn iter(&self) -> impl Iterator<Item = Point3> + 'a {
        self.scells.iter().map(|sc| sc.cell.lattice_point())
    }
}

/// Range over the embedded midpoints of the cells.
#[derive(Debug, Clone, Copy)]
pub struct MidPointsRange<'a> {
    scells: &'a [SignedCell3],
}

impl<'a> MidPointsRange<'a> {
    /// Iterates over the embedded centers in curve order.
    pub fn iter(&self) -> impl Iterator<Item = RealPoint3> + 'a {
        self.scells.iter().map(|sc| sc.cell.center())
    }
}

/// Range over oriented lattice steps, one per 1-cell.
#[derive(Debug, Clone, Copy)]
pub struct ArrowsRange<'a> {
    scells: &'a [SignedCell3],
}

impl<'a> ArrowsRange<'a> {
    /// Iterates over `(base, displacement)` pairs in curve order.
    pub fn iter(&self) -> impl Iterator<Item = (Point3, Point3)> + 'a {
        self.scells.iter().map(|sc| {
            let axis = open_axis(sc.cell);
            let e = axis_unit(axis);
            if sc.positive {
                (Cell3 { coords: sc.cell.coords - e }.lattice_point(), e)
            } else {
                (Cell3 { coords: sc.cell.coords + e }.lattice_point(), -e)
            }
        })
    }
}

/// Range over the inner voxel of each 2-cell.
#[derive(Debug, Clone, Copy)]
pub struct InnerPointsRange<'a> {
    scells: &'a [SignedCell3],
}

impl<'a> InnerPointsRange<'a> {
    /// Iterates over the inner voxels in curve order.
    pub fn iter(&self) -> impl Iterator<Item = Point3> + 'a {
        self.scells.iter().map(|sc| inner_voxel(*sc))
    }
}

/// Range over the outer voxel of each 2-cell.
#[derive(Debug, Clone, Copy)]
pub struct OuterPointsRange<'a> {
    scells: &'a [SignedCell3],
}

impl<'a> OuterPointsRange<'a> {
    /// Iterates over the outer voxels in curve order.
    pub fn iter(&self) -> impl Iterator<Item = Point3> + 'a {
        self.scells.iter().map(|sc| outer_voxel(*sc))
    }
}

/// Range over the (inner, outer) voxel pair of each 2-cell.
#[derive(Debug, Clone, Copy)]
pub struct IncidentPointsRange<'a> {
    scells: &'a [SignedCell3],
}

impl<'a> IncidentPointsRange<'a> {
    /// Iterates over `(inner, outer)` pairs in curve order.
    pub fn iter(&self) -> impl Iterator<Item = (Point3, Point3)> + 'a {
        self.scells.iter().map(|sc| (inner_voxel(*sc), outer_voxel(*sc)))
    }
}

/// The voxel a positively-signed surfel points away from.
fn inner_voxel(sc: SignedCell3) -> Point3 {
    let e = axis_unit(orthogonal_axis(sc.cell));
    let k = if sc.positive { sc.cell.coords - e } else { sc.cell.coords + e };
    Cell3 { coords: k }.lattice_point()
}

fn outer_voxel(sc: SignedCell3) -> Point3 {
    inner_voxel(sc.flipped())
}

// Total versions of the axis lookups; range construction has already
// pinned the cell dimension, so the fallback arm never fires for a
// well-formed curve.
fn open_axis(c: Cell3) -> usize {
    if c.coords.x & 1 != 0 {
        0
    } else if c.coords.y & 1 != 0 {
        1
    } else {
        2
    }
}

fn orthogonal_axis(c: Cell3) -> usize {
    if c.coords.x & 1 == 0 {
        0
    } else if c.coords.y & 1 == 0 {
        1
    } else {
        2
    }
}

fn axis_unit(axis: usize) -> Point3 {
    match axis {
        0 => Point3::new(1, 0, 0),
        1 => Point3::new(0, 1, 0),
        _ => Point3::new(0, 0, 1),
    }
}
