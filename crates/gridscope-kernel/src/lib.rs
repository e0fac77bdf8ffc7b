//! Digital-geometry types for gridscope.
//!
//! Everything in this crate lives on the integer lattice or in the
//! Khalimsky grid built on top of it: points, rectangular domains,
//! digital sets, cells and signed cells, Freeman chains, digital
//! straight segments, adjacency-carrying objects, grid curves, meshes,
//! spherical accumulators and images over a domain.
//!
//! The types here are plain data with their structural invariants
//! checked at construction time. How they are turned into drawable
//! primitives is the business of `gridscope-render`.

// Geometry code intentionally casts between lattice, bin, and float coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod accumulator;
pub mod adjacency;
pub mod cell;
pub mod chain;
pub mod digital_set;
pub mod domain;
pub mod grid_curve;
pub mod image;
pub mod mesh;
pub mod minimizer;
pub mod object;
pub mod point;
pub mod polygon;
pub mod segment;
pub mod space;

pub use accumulator::SphericalAccumulator;
pub use adjacency::{Adjacency2, Adjacency3};
pub use cell::{Cell2, Cell3, SignedCell2, SignedCell3};
pub use chain::{ChainCode, FreemanChain};
pub use digital_set::{
    DigitalSetBySet2, DigitalSetBySet3, DigitalSetByVec2, DigitalSetByVec3, PointSet2, PointSet3,
};
pub use domain::{Domain2, Domain3};
pub use grid_curve::{
    ArrowsRange, GridCurve3, IncidentPointsRange, InnerPointsRange, MidPointsRange,
    OuterPointsRange, PointsRange, ScellsRange,
};
pub use image::{
    value_bounds2, value_bounds3, Image2, Image3, ImageAdapter2, ImageAdapter3, ImageSource2,
    ImageSource3, SparseImage2, SparseImage3,
};
pub use mesh::Mesh;
pub use minimizer::{AngleEntry, AngleMinimizer};
pub use object::{DigitalObject2, DigitalObject3};
pub use point::{Point2, Point3, RealPoint2, RealPoint3};
pub use polygon::LatticePolygon;
pub use segment::{DigitalSegment2, DigitalSegment3};
pub use space::{CanonicCellSpace3, CanonicSpace3, CellSpace3, Space3};
