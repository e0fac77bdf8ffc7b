//! Embedding seams for 3D scenes.
//!
//! A scene needs two answers: where a lattice point sits in space, and
//! where a Khalimsky cell sits in space. Both go through a trait so a
//! scene can swap in scaled or shifted embeddings; the canonic
//! implementations are the identity on lattice points and the
//! halved-coordinate center on cells.

use crate::cell::Cell3;
use crate::point::{Point3, RealPoint3};

/// Embedding of lattice points into Euclidean space.
pub trait Space3: std::fmt::Debug + Send + Sync {
    /// Where lattice point `p` sits in space.
    fn embed(&self, p: Point3) -> RealPoint3;
}

/// Embedding of Khalimsky cells into Euclidean space.
pub trait CellSpace3: std::fmt::Debug + Send + Sync {
    /// Where the center of cell `c` sits in space.
    fn embed_cell(&self, c: Cell3) -> RealPoint3;
}

/// Identity embedding of the lattice.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicSpace3;

impl Space3 for CanonicSpace3 {
    fn embed(&self, p: Point3) -> RealPoint3 {
        p.as_vec3()
    }
}

/// Cell embedding at the halved Khalimsky coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicCellSpace3;

impl CellSpace3 for CanonicCellSpace3 {
    fn embed_cell(&self, c: Cell3) -> RealPoint3 {
        c.center()
    }
}
