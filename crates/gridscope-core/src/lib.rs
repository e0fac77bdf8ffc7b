//! Core value types for gridscope.
//!
//! This crate provides the types shared by both rendering back-ends:
//! - [`Color`] and the color maps used to shade scalar data
//! - [`Style2`] / [`Style3`] style descriptors consumed by the canvases
//! - [`GridscopeError`] and the crate-wide [`Result`] alias
//!
//! Nothing here draws anything; the canvases and the dispatch layer live in
//! `gridscope-render`.

// Internal functions don't need exhaustive panic/error docs.
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder-style methods return Self which doesn't need must_use.
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod colormap;
pub mod error;
pub mod style;

pub use color::Color;
pub use colormap::{GradientColorMap, GrayscaleColorMap, HueShadeColorMap};
pub use error::{GridscopeError, Result};
pub use style::{LineStyle, Style2, Style3};
