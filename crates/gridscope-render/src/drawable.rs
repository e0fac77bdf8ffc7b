//! The dispatch traits connecting drawable types to the canvases.
//!
//! A type implements [`Drawable2d`] and/or [`Drawable3d`] to become
//! drawable through `Board2::draw` / `Display3::draw`. The `class_name`
//! is the key the canvas's mode map and style overrides are indexed by;
//! `draw_on` reads the canvas's current mode for that class and routes
//! to the matching drawing variant. Style directives implement the same
//! traits, which is how a recorded stream can interleave geometry and
//! style mutations through one mechanism.

use gridscope_core::{Result, Style3};

use crate::board2::Board2;
use crate::display3::Display3;

/// A value drawable on the 2D board.
pub trait Drawable2d {
    /// Key into the board's mode map and style overrides.
    fn class_name(&self) -> &'static str;

    /// Appends this value's primitives (or applies its directive).
    fn draw_on(&self, board: &mut Board2) -> Result<()>;
}

/// A value drawable on the 3D display.
pub trait Drawable3d {
    /// Key into the display's mode map and style overrides.
    fn class_name(&self) -> &'static str;

    /// The style this type draws with under `mode`, before any canvas
    /// override. Unrecognized modes fall back to the default variant's
    /// style; only `draw_on` rejects them.
    fn default_style(&self, mode: &str) -> Style3;

    /// Appends this value's primitives (or applies its directive).
    fn draw_on(&self, display: &mut Display3) -> Result<()>;
}
