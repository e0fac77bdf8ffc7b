//! Style directives: drawable values that mutate canvas state.
//!
//! A directive is a transient value object dispatched through the same
//! `draw` mechanism as geometry. Instead of appending primitives it
//! mutates the canvas — sets a class mode, registers a style override,
//! installs the custom color pair, adds a clipping plane, re-textures or
//! repositions an image, moves an embedded domain. Because primitives
//! capture their resolved style at append time, a directive only ever
//! influences what is drawn after it.
//!
//! The prism directive is the one geometric member of the family: it
//! turns a signed surfel into an extruded prism, which no plain cell
//! draw covers.

use gridscope_core::{Color, GridscopeError, Result, Style2, Style3};
use gridscope_kernel::{
    Domain2, ImageSource2, ImageSource3, RealPoint3, SignedCell3,
};

use crate::board2::Board2;
use crate::display3::{
    Display3, ImageDirection, Prism3, TextureData, TextureMode, TexturedImage,
};
use crate::drawable::{Drawable2d, Drawable3d};
use crate::factory3d::{rasterize_2d, rasterize_3d, signed_cell_style};

/// Half-extent of a surfel prism's base quad.
const PRISM_HALF_SIZE: f32 = 0.5;

// ----------------------------------------------------------------------
// 2D directives
// ----------------------------------------------------------------------

/// Sets the board's drawing mode for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMode2 {
    /// Class the mode applies to.
    pub class_name: String,
    /// Mode string; empty restores the class default.
    pub mode: String,
}

impl SetMode2 {
    #[must_use]
    pub fn new(class_name: impl Into<String>, mode: impl Into<String>) -> Self {
        Self { class_name: class_name.into(), mode: mode.into() }
    }
}

impl Drawable2d for SetMode2 {
    fn class_name(&self) -> &'static str {
        "SetMode2"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        board.set_mode(self.class_name.clone(), self.mode.clone());
        Ok(())
    }
}

/// Registers a per-class style override on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomStyle2 {
    /// Class the style applies to.
    pub class_name: String,
    /// Style every later primitive of that class resolves to.
    pub style: Style2,
}

impl CustomStyle2 {
    #[must_use]
    pub fn new(class_name: impl Into<String>, style: Style2) -> Self {
        Self { class_name: class_name.into(), style }
    }
}

impl Drawable2d for CustomStyle2 {
    fn class_name(&self) -> &'static str {
        "CustomStyle2"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        board.set_style(self.class_name.clone(), self.style);
        Ok(())
    }
}

// ----------------------------------------------------------------------
// 3D directives
// ----------------------------------------------------------------------

/// Sets the display's drawing mode for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMode3 {
    /// Class the mode applies to.
    pub class_name: String,
    /// Mode string; empty restores the class default.
    pub mode: String,
}

impl SetMode3 {
    #[must_use]
    pub fn new(class_name: impl Into<String>, mode: impl Into<String>) -> Self {
        Self { class_name: class_name.into(), mode: mode.into() }
    }
}

impl Drawable3d for SetMode3 {
    fn class_name(&self) -> &'static str {
        "SetMode3"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.set_mode(self.class_name.clone(), self.mode.clone());
        Ok(())
    }
}

/// Registers a per-class style override on the display.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomStyle3 {
    /// Class the style applies to.
    pub class_name: String,
    /// Style every later primitive of that class resolves to.
    pub style: Style3,
}

impl CustomStyle3 {
    #[must_use]
    pub fn new(class_name: impl Into<String>, style: Style3) -> Self {
        Self { class_name: class_name.into(), style }
    }
}

impl Drawable3d for CustomStyle3 {
    fn class_name(&self) -> &'static str {
        "CustomStyle3"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.set_style(self.class_name.clone(), self.style);
        Ok(())
    }
}

/// Installs the custom (line, surface) color pair.
///
/// The pair replaces the colors of every later default style that has
/// no per-class override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomColors3 {
    /// Color for lines and wire edges.
    pub line: Color,
    /// Color for surfaces and volumes.
    pub surface: Color,
}

impl CustomColors3 {
    #[must_use]
    pub fn new(line: Color, surface: Color) -> Self {
        Self { line, surface }
    }
}

impl Drawable3d for CustomColors3 {
    fn class_name(&self) -> &'static str {
        "CustomColors3"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.set_custom_colors(self.line, self.surface);
        Ok(())
    }
}

/// Adds a clipping plane `normal . p + offset = 0` to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippingPlane {
    /// Plane normal; a zero vector is rejected at draw time.
    pub normal: RealPoint3,
    /// Plane offset.
    pub offset: f32,
    /// Whether the plane itself should be rendered.
    pub draw_plane: bool,
}

impl ClippingPlane {
    #[must_use]
    pub fn new(normal: RealPoint3, offset: f32, draw_plane: bool) -> Self {
        Self { normal, offset, draw_plane }
    }
}

impl Drawable3d for ClippingPlane {
    fn class_name(&self) -> &'static str {
        "ClippingPlane"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.add_clipping_plane(self.normal, self.offset, self.draw_plane)
    }
}

/// Directive form of [`draw_image_2d`](crate::factory3d::draw_image_2d).
///
/// The image is rasterized when the directive is built, so the value is
/// self-contained and replayable; drawing it appends the quad.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTexturedImage2 {
    quads: Vec<TexturedImage>,
}

impl AddTexturedImage2 {
    /// Rasterizes a 2D image source; empty domains yield a directive
    /// that draws nothing.
    pub fn new<I, F>(image: &I, functor: &F, mode: TextureMode) -> Result<Self>
    where
        I: ImageSource2,
        F: Fn(I::Value) -> Color,
    {
        Ok(Self { quads: rasterize_2d(image, functor, mode)? })
    }

    /// The rasterized quads this directive will append.
    #[must_use]
    pub fn quads(&self) -> &[TexturedImage] {
        &self.quads
    }
}

impl Drawable3d for AddTexturedImage2 {
    fn class_name(&self) -> &'static str {
        "AddTexturedImage2"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        for quad in &self.quads {
            display.add_image(quad.clone());
        }
        Ok(())
    }
}

/// Directive form of [`draw_image_3d`](crate::factory3d::draw_image_3d).
#[derive(Debug, Clone, PartialEq)]
pub struct AddTexturedImage3 {
    quads: Vec<TexturedImage>,
}

impl AddTexturedImage3 {
    /// Rasterizes a 3D image source into its three boundary slices;
    /// empty domains yield a directive that draws nothing.
    pub fn new<I, F>(image: &I, functor: &F, mode: TextureMode) -> Result<Self>
    where
        I: ImageSource3,
        F: Fn(I::Value) -> Color,
    {
        Ok(Self { quads: rasterize_3d(image, functor, mode)? })
    }

    /// The rasterized quads this directive will append.
    #[must_use]
    pub fn quads(&self) -> &[TexturedImage] {
        &self.quads
    }
}

impl Drawable3d for AddTexturedImage3 {
    fn class_name(&self) -> &'static str {
        "AddTexturedImage3"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        for quad in &self.quads {
            display.add_image(quad.clone());
        }
        Ok(())
    }
}

/// Replaces the texels of textured image `index`, optionally moving it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateImageData {
    /// Index of the image to update.
    pub index: usize,
    /// New texels; must match the image's size.
    pub data: TextureData,
    /// Translation applied after the update.
    pub translation: RealPoint3,
}

impl UpdateImageData {
    #[must_use]
    pub fn new(index: usize, data: TextureData) -> Self {
        Self { index, data, translation: RealPoint3::ZERO }
    }

    /// Also translates the image by `delta`.
    #[must_use]
    pub fn with_translation(mut self, delta: RealPoint3) -> Self {
        self.translation = delta;
        self
    }
}

impl Drawable3d for UpdateImageData {
    fn class_name(&self) -> &'static str {
        "UpdateImageData"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.update_image_data(self.index, self.data.clone(), self.translation)
    }
}

/// Repositions and reorients textured image `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateImagePosition {
    /// Index of the image to move.
    pub index: usize,
    /// New lower corner.
    pub origin: RealPoint3,
    /// New normal axis.
    pub direction: ImageDirection,
}

impl Drawable3d for UpdateImagePosition {
    fn class_name(&self) -> &'static str {
        "UpdateImagePosition"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.update_image_position(self.index, self.origin, self.direction)
    }
}

/// Repositions the most recently added textured image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateLastImagePosition {
    /// New lower corner.
    pub origin: RealPoint3,
    /// New normal axis.
    pub direction: ImageDirection,
}

impl Drawable3d for UpdateLastImagePosition {
    fn class_name(&self) -> &'static str {
        "UpdateLastImagePosition"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.update_last_image_position(self.origin, self.direction)
    }
}

/// Pins a 2D lattice domain into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddDomain2 {
    /// The domain to embed.
    pub domain: Domain2,
    /// Where its lower bound sits in the scene.
    pub origin: RealPoint3,
    /// Normal axis of its plane.
    pub direction: ImageDirection,
}

impl Drawable3d for AddDomain2 {
    fn class_name(&self) -> &'static str {
        "AddDomain2"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.add_domain2(self.domain, self.origin, self.direction);
        Ok(())
    }
}

/// Repositions and reorients embedded domain `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateDomainPosition {
    /// Index of the embedded domain.
    pub index: usize,
    /// New scene position of its lower bound.
    pub origin: RealPoint3,
    /// New normal axis.
    pub direction: ImageDirection,
}

impl Drawable3d for UpdateDomainPosition {
    fn class_name(&self) -> &'static str {
        "UpdateDomainPosition"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.update_domain2_position(self.index, self.origin, self.direction)
    }
}

/// Translates embedded domain `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateDomain {
    /// Index of the embedded domain.
    pub index: usize,
    /// Scene-space translation.
    pub delta: RealPoint3,
}

impl Drawable3d for TranslateDomain {
    fn class_name(&self) -> &'static str {
        "TranslateDomain"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        display.translate_domain2(self.index, self.delta)
    }
}

/// Draws a signed surfel as an extruded prism.
///
/// The base quad is the surfel itself; the apex quad is scaled by
/// `size_ratio` and shifted `shift` units along the surfel normal,
/// toward positive orientation for a positive sign and away from it
/// otherwise. Cells of any other dimension are an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfelPrism {
    /// The signed 2-cell to extrude.
    pub scell: SignedCell3,
    /// Extrusion distance along the surfel normal.
    pub shift: f32,
    /// Apex size relative to the base.
    pub size_ratio: f32,
}

impl SurfelPrism {
    #[must_use]
    pub fn new(scell: SignedCell3, shift: f32, size_ratio: f32) -> Self {
        Self { scell, shift, size_ratio }
    }
}

impl Drawable3d for SurfelPrism {
    fn class_name(&self) -> &'static str {
        "SurfelPrism"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        signed_cell_style(self.scell.positive)
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        let cell = self.scell.cell;
        let Some(axis) = cell.orthogonal_axis() else {
            return Err(GridscopeError::InvalidCellDimension { expected: 2, actual: cell.dim() });
        };
        let style = display.resolve_style("SurfelPrism", self.default_style(""));
        let shift = if self.scell.positive { self.shift } else { -self.shift };
        display.add_prism(Prism3 {
            center: display.embed_cell(cell),
            axis,
            half_size: PRISM_HALF_SIZE,
            shift,
            apex_scale: self.size_ratio,
            color: style.color,
        });
        Ok(())
    }
}
