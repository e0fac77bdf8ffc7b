//! Rendering canvases and draw dispatch for gridscope.
//!
//! This crate owns the two sinks every digital-geometry type draws
//! onto:
//! - [`Board2`], an accumulating 2D vector board with SVG export;
//! - [`Display3`], an accumulating 3D scene with grouped primitive
//!   lists, textured image quads, embedded 2D domains, and clipping
//!   planes.
//!
//! Dispatch is type-directed: anything implementing [`Drawable2d`] or
//! [`Drawable3d`] can be handed to `Board2::draw` / `Display3::draw`,
//! and the `factory2d` / `factory3d` modules provide the per-type
//! drawing routines plus explicit per-variant entry points. Style
//! directives (mode selection, style overrides, color pairs, scene
//! mutations) are plain value types dispatched through the same draw
//! mechanism, and `commands` replays a recorded sequence of geometry
//! and directives in order.

// Graphics code intentionally casts between lattice, index, and float coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
// Draw routines keep a uniform `Result<()>` signature even when a variant
// cannot currently fail
#![allow(clippy::unnecessary_wraps)]

pub mod board2;
pub mod commands;
pub mod display3;
pub mod drawable;
pub mod factory2d;
pub mod factory3d;
pub mod modifiers;

pub use board2::{Board2, BoardItem, Shape2};
pub use commands::{run2, run3, Command2, Command3, StyleScope};
pub use display3::{
    Ball3, ClippingPlane3, Cube3, Display3, EmbeddedDomain2, ImageDirection, Line3, Polygon3,
    Prism3, Quad3, TextureData, TextureMode, TexturedImage, Triangle3,
};
pub use drawable::{Drawable2d, Drawable3d};
pub use modifiers::{
    AddDomain2, AddTexturedImage2, AddTexturedImage3, ClippingPlane, CustomColors3, CustomStyle2,
    CustomStyle3, SetMode2, SetMode3, SurfelPrism, TranslateDomain, UpdateDomainPosition,
    UpdateImageData, UpdateImagePosition, UpdateLastImagePosition,
};
