//! gridscope: type-directed rendering of digital-geometry structures.
//!
//! gridscope turns already-computed digital-geometry data — lattice
//! points, domains, digital sets, Khalimsky cells, Freeman chains,
//! digital straight segments, objects with adjacency, grid curves,
//! meshes, spherical accumulators and images — into primitive drawing
//! calls on one of two accumulating canvases:
//!
//! - [`Board2`], a 2D vector board with SVG export;
//! - [`Display3`], a 3D scene of lines, balls, cubes, quads, prisms and
//!   textured image quads.
//!
//! It is an adapter, not an algorithm library: the geometry types carry
//! their structural invariants, the canvases accumulate styled
//! primitives, and the dispatch layer in between translates one into
//! the other. There is no viewer here; downstream tools consume the
//! canvas contents.
//!
//! # Quick start
//!
//! ```
//! use gridscope::*;
//!
//! fn main() -> Result<()> {
//!     let mut board = Board2::new();
//!
//!     // Draw a domain as its lattice grid, then a set as paved squares.
//!     let domain = Domain2::new(Point2::new(0, 0), Point2::new(8, 8));
//!     board.draw(&domain)?;
//!
//!     let mut set = DigitalSetBySet2::new(domain);
//!     set.insert(Point2::new(3, 4));
//!     set.insert(Point2::new(4, 4));
//!     board.draw(&set)?;
//!
//!     let svg = board.to_svg();
//!     assert!(svg.contains("<svg"));
//!     Ok(())
//! }
//! ```
//!
//! # Dispatch
//!
//! Every drawable type implements [`Drawable2d`] and/or [`Drawable3d`].
//! `draw` reads the canvas's mode string for the type's class and picks
//! a style variant; the per-variant functions in [`factory2d`] and
//! [`factory3d`] are public for callers that want a specific variant
//! regardless of canvas state. Style directives ([`SetMode3`],
//! [`CustomColors3`], [`ClippingPlane`], ...) travel through the same
//! `draw` mechanism and only affect primitives appended after them.
//!
//! Recorded sequences of geometry and directives replay through
//! [`run2`] / [`run3`]; [`StyleScope::Scoped`] restores the canvas's
//! dispatch state after the run.

// Re-export core value types.
pub use gridscope_core::{
    Color, GradientColorMap, GrayscaleColorMap, GridscopeError, HueShadeColorMap, LineStyle,
    Result, Style2, Style3,
};

// Re-export the geometry kernel.
pub use gridscope_kernel::{
    Adjacency2, Adjacency3, AngleEntry, AngleMinimizer, ArrowsRange, CanonicCellSpace3,
    CanonicSpace3, Cell2, Cell3, CellSpace3, ChainCode, DigitalObject2, DigitalObject3,
    DigitalSegment2, DigitalSegment3, DigitalSetBySet2, DigitalSetBySet3, DigitalSetByVec2,
    DigitalSetByVec3, Domain2, Domain3, FreemanChain, GridCurve3, Image2, Image3, ImageAdapter2,
    ImageAdapter3, ImageSource2, ImageSource3, IncidentPointsRange, InnerPointsRange,
    LatticePolygon, Mesh, MidPointsRange, OuterPointsRange, Point2, Point3, PointSet2, PointSet3,
    PointsRange, RealPoint2, RealPoint3, ScellsRange, SignedCell2, SignedCell3, Space3,
    SparseImage2, SparseImage3, SphericalAccumulator,
};

// Re-export the canvases, dispatch traits, directives, and commands.
pub use gridscope_render::{
    factory2d, factory3d, run2, run3, AddDomain2, AddTexturedImage2, AddTexturedImage3, Ball3,
    Board2, BoardItem, ClippingPlane, ClippingPlane3, Command2, Command3, Cube3, CustomColors3,
    CustomStyle2, CustomStyle3, Display3, Drawable2d, Drawable3d, EmbeddedDomain2, ImageDirection,
    Line3, Polygon3, Prism3, Quad3, SetMode2, SetMode3, Shape2, StyleScope, SurfelPrism,
    TextureData, TextureMode, TexturedImage, TranslateDomain, Triangle3,
    UpdateDomainPosition, UpdateImageData, UpdateImagePosition, UpdateLastImagePosition,
};
