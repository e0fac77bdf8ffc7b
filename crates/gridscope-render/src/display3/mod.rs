//! The 3D display: an accumulating scene of drawing primitives.
//!
//! Primitives live in grouped lists (a new-group call starts a fresh
//! group, everything after appends to it), the way downstream viewers
//! consume them batch-wise. On top of the lists the display owns the
//! scene-level state the 3D factory reads: the per-class mode map and
//! style overrides, the optional custom color pair, the lattice and
//! cell embeddings, textured image quads, embedded 2D domains, and
//! clipping planes.
//!
//! Mode, style, and color mutations persist for the display's lifetime
//! (or until [`Display3::reset_styles`]) and only influence primitives
//! appended afterwards.

mod image;
mod primitive;

use std::collections::BTreeMap;

use gridscope_core::{Color, GridscopeError, Result, Style3};
use gridscope_kernel::{
    CanonicCellSpace3, CanonicSpace3, Cell3, CellSpace3, Domain2, Point3, RealPoint3, Space3,
};

use crate::drawable::Drawable3d;

pub use image::{
    direction_vec, ClippingPlane3, EmbeddedDomain2, ImageDirection, TextureData, TextureMode,
    TexturedImage,
};
pub use primitive::{Ball3, Cube3, Line3, Polygon3, Prism3, Quad3, Triangle3};

pub(crate) use primitive::{axis_vec, box_edges, in_plane_axes, quad_corners};

/// Snapshot of the display's dispatch state, for scoped command runs.
#[derive(Debug, Clone, Default)]
pub(crate) struct DisplayStyleState {
    modes: BTreeMap<String, String>,
    styles: BTreeMap<String, Style3>,
    custom_colors: Option<(Color, Color)>,
}

/// An accumulating 3D scene.
#[derive(Debug)]
pub struct Display3 {
    // Grouped primitive lists.
    lines: Vec<Vec<Line3>>,
    balls: Vec<Vec<Ball3>>,
    cubes: Vec<Vec<Cube3>>,
    quads: Vec<Vec<Quad3>>,
    triangles: Vec<Vec<Triangle3>>,
    polygons: Vec<Vec<Polygon3>>,
    prisms: Vec<Prism3>,
    // Positioned scene content.
    images: Vec<TexturedImage>,
    domains: Vec<EmbeddedDomain2>,
    clipping_planes: Vec<ClippingPlane3>,
    // Dispatch state.
    modes: BTreeMap<String, String>,
    styles: BTreeMap<String, Style3>,
    custom_colors: Option<(Color, Color)>,
    // Embedding seams.
    space: Box<dyn Space3>,
    cell_space: Box<dyn CellSpace3>,
}

impl Default for Display3 {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            balls: Vec::new(),
            cubes: Vec::new(),
            quads: Vec::new(),
            triangles: Vec::new(),
            polygons: Vec::new(),
            prisms: Vec::new(),
            images: Vec::new(),
            domains: Vec::new(),
            clipping_planes: Vec::new(),
            modes: BTreeMap::new(),
            styles: BTreeMap::new(),
            custom_colors: None,
            space: Box::new(CanonicSpace3),
            cell_space: Box::new(CanonicCellSpace3),
        }
    }
}

impl Display3 {
    /// An empty scene with canonic embeddings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Embedding
    // ------------------------------------------------------------------

    /// Replaces the lattice-point embedding.
    pub fn set_space(&mut self, space: Box<dyn Space3>) {
        log::debug!("replacing lattice embedding: {space:?}");
        self.space = space;
    }

    /// Replaces the cell embedding.
    pub fn set_cell_space(&mut self, cell_space: Box<dyn CellSpace3>) {
        log::debug!("replacing cell embedding: {cell_space:?}");
        self.cell_space = cell_space;
    }

    /// Where lattice point `p` sits in the scene.
    #[must_use]
    pub fn embed(&self, p: Point3) -> RealPoint3 {
        self.space.embed(p)
    }

    /// Where cell `c`'s center sits in the scene.
    #[must_use]
    pub fn embed_cell(&self, c: Cell3) -> RealPoint3 {
        self.cell_space.embed_cell(c)
    }

    // ------------------------------------------------------------------
    // Primitive accumulation
    // ------------------------------------------------------------------

    /// Appends a line to the current line group.
    pub fn add_line(&mut self, line: Line3) {
        last_group(&mut self.lines).push(line);
    }

    /// Appends a ball to the current ball group.
    pub fn add_ball(&mut self, ball: Ball3) {
        last_group(&mut self.balls).push(ball);
    }

    /// Appends a cube to the current cube group.
    pub fn add_cube(&mut self, cube: Cube3) {
        last_group(&mut self.cubes).push(cube);
    }

    /// Appends a quad to the current quad group.
    pub fn add_quad(&mut self, quad: Quad3) {
        last_group(&mut self.quads).push(quad);
    }

    /// Appends a triangle to the current triangle group.
    pub fn add_triangle(&mut self, triangle: Triangle3) {
        last_group(&mut self.triangles).push(triangle);
    }

    /// Appends a polygon to the current polygon group.
    pub fn add_polygon(&mut self, polygon: Polygon3) {
        last_group(&mut self.polygons).push(polygon);
    }

    /// Appends a prism.
    pub fn add_prism(&mut self, prism: Prism3) {
        self.prisms.push(prism);
    }

    /// Starts a fresh line group.
    pub fn new_line_group(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Starts a fresh ball group.
    pub fn new_ball_group(&mut self) {
        self.balls.push(Vec::new());
    }

    /// Starts a fresh cube group.
    pub fn new_cube_group(&mut self) {
        self.cubes.push(Vec::new());
    }

    /// Starts a fresh quad group.
    pub fn new_quad_group(&mut self) {
        self.quads.push(Vec::new());
    }

    /// Starts a fresh triangle group.
    pub fn new_triangle_group(&mut self) {
        self.triangles.push(Vec::new());
    }

    /// Starts a fresh polygon group.
    pub fn new_polygon_group(&mut self) {
        self.polygons.push(Vec::new());
    }

    // ------------------------------------------------------------------
    // Primitive access
    // ------------------------------------------------------------------

    /// Line groups, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[Vec<Line3>] {
        &self.lines
    }

    /// Ball groups, oldest first.
    #[must_use]
    pub fn balls(&self) -> &[Vec<Ball3>] {
        &self.balls
    }

    /// Cube groups, oldest first.
    #[must_use]
    pub fn cubes(&self) -> &[Vec<Cube3>] {
        &self.cubes
    }

    /// Quad groups, oldest first.
    #[must_use]
    pub fn quads(&self) -> &[Vec<Quad3>] {
        &self.quads
    }

    /// Triangle groups, oldest first.
    #[must_use]
    pub fn triangles(&self) -> &[Vec<Triangle3>] {
        &self.triangles
    }

    /// Polygon groups, oldest first.
    #[must_use]
    pub fn polygons(&self) -> &[Vec<Polygon3>] {
        &self.polygons
    }

    /// All prisms, oldest first.
    #[must_use]
    pub fn prisms(&self) -> &[Prism3] {
        &self.prisms
    }

    /// Total number of primitives across all lists.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        flat_len(&self.lines)
            + flat_len(&self.balls)
            + flat_len(&self.cubes)
            + flat_len(&self.quads)
            + flat_len(&self.triangles)
            + flat_len(&self.polygons)
            + self.prisms.len()
    }

    /// Whether no primitive has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    // ------------------------------------------------------------------
    // Dispatch state
    // ------------------------------------------------------------------

    /// Sets the drawing mode for a class; persists until changed or reset.
    pub fn set_mode(&mut self, class_name: impl Into<String>, mode: impl Into<String>) {
        self.modes.insert(class_name.into(), mode.into());
    }

    /// Current mode for a class; empty selects the type's default variant.
    #[must_use]
    pub fn mode(&self, class_name: &str) -> &str {
        self.modes.get(class_name).map_or("", String::as_str)
    }

    /// Registers a style override for a class; persists until reset.
    pub fn set_style(&mut self, class_name: impl Into<String>, style: Style3) {
        self.styles.insert(class_name.into(), style);
    }

    /// The override registered for a class, if any.
    #[must_use]
    pub fn style_override(&self, class_name: &str) -> Option<Style3> {
        self.styles.get(class_name).copied()
    }

    /// Sets the custom (line, surface) color pair for later primitives.
    pub fn set_custom_colors(&mut self, line: Color, surface: Color) {
        self.custom_colors = Some((line, surface));
    }

    /// Drops the custom color pair.
    pub fn clear_custom_colors(&mut self) {
        self.custom_colors = None;
    }

    /// The active custom (line, surface) pair, if any.
    #[must_use]
    pub fn custom_colors(&self) -> Option<(Color, Color)> {
        self.custom_colors
    }

    /// The effective style for a class.
    ///
    /// A per-class override wins outright; otherwise the type's default
    /// is used, with its colors replaced by the active custom pair.
    #[must_use]
    pub fn resolve_style(&self, class_name: &str, default: Style3) -> Style3 {
        if let Some(over) = self.styles.get(class_name) {
            return *over;
        }
        match self.custom_colors {
            Some((line, surface)) => default.with_colors(line, surface),
            None => default,
        }
    }

    /// Drops all modes, style overrides, and the custom color pair.
    pub fn reset_styles(&mut self) {
        self.modes.clear();
        self.styles.clear();
        self.custom_colors = None;
    }

    pub(crate) fn style_state(&self) -> DisplayStyleState {
        DisplayStyleState {
            modes: self.modes.clone(),
            styles: self.styles.clone(),
            custom_colors: self.custom_colors,
        }
    }

    pub(crate) fn restore_style_state(&mut self, state: DisplayStyleState) {
        self.modes = state.modes;
        self.styles = state.styles;
        self.custom_colors = state.custom_colors;
    }

    // ------------------------------------------------------------------
    // Scene content: clipping planes, images, embedded domains
    // ------------------------------------------------------------------

    /// Registers a clipping plane; a zero normal is an error.
    pub fn add_clipping_plane(
        &mut self,
        normal: RealPoint3,
        offset: f32,
        draw_plane: bool,
    ) -> Result<()> {
        if normal.length_squared() < f32::EPSILON {
            return Err(GridscopeError::InvalidClippingPlane);
        }
        self.clipping_planes.push(ClippingPlane3 { normal, offset, draw_plane });
        Ok(())
    }

    /// Registered clipping planes, oldest first.
    #[must_use]
    pub fn clipping_planes(&self) -> &[ClippingPlane3] {
        &self.clipping_planes
    }

    /// Adds a textured image; returns its index.
    pub fn add_image(&mut self, image: TexturedImage) -> usize {
        log::debug!(
            "adding {}x{} textured image at index {}",
            image.width(),
            image.height(),
            self.images.len()
        );
        self.images.push(image);
        self.images.len() - 1
    }

    /// Textured images, oldest first.
    #[must_use]
    pub fn images(&self) -> &[TexturedImage] {
        &self.images
    }

    /// Replaces the texels of image `index`, optionally translating it.
    pub fn update_image_data(
        &mut self,
        index: usize,
        data: TextureData,
        translation: RealPoint3,
    ) -> Result<()> {
        let len = self.images.len();
        let image = self
            .images
            .get_mut(index)
            .ok_or(GridscopeError::ImageIndexOutOfRange { index, len })?;
        image.set_data(data)?;
        image.translate(translation);
        Ok(())
    }

    /// Repositions and reorients image `index`.
    pub fn update_image_position(
        &mut self,
        index: usize,
        origin: RealPoint3,
        direction: ImageDirection,
    ) -> Result<()> {
        let len = self.images.len();
        let image = self
            .images
            .get_mut(index)
            .ok_or(GridscopeError::ImageIndexOutOfRange { index, len })?;
        image.set_position(origin, direction);
        Ok(())
    }

    /// Repositions the most recently added image.
    pub fn update_last_image_position(
        &mut self,
        origin: RealPoint3,
        direction: ImageDirection,
    ) -> Result<()> {
        let len = self.images.len();
        let image = self
            .images
            .last_mut()
            .ok_or(GridscopeError::ImageIndexOutOfRange { index: 0, len })?;
        image.set_position(origin, direction);
        Ok(())
    }

    /// Pins a 2D domain into the scene; returns its index.
    pub fn add_domain2(
        &mut self,
        domain: Domain2,
        origin: RealPoint3,
        direction: ImageDirection,
    ) -> usize {
        self.domains.push(EmbeddedDomain2 { domain, origin, direction });
        self.domains.len() - 1
    }

    /// Embedded 2D domains, oldest first.
    #[must_use]
    pub fn domains(&self) -> &[EmbeddedDomain2] {
        &self.domains
    }

    /// Repositions and reorients embedded domain `index`.
    pub fn update_domain2_position(
        &mut self,
        index: usize,
        origin: RealPoint3,
        direction: ImageDirection,
    ) -> Result<()> {
        let len = self.domains.len();
        let dom = self
            .domains
            .get_mut(index)
            .ok_or(GridscopeError::DomainIndexOutOfRange { index, len })?;
        dom.origin = origin;
        dom.direction = direction;
        Ok(())
    }

    /// Translates embedded domain `index`.
    pub fn translate_domain2(&mut self, index: usize, delta: RealPoint3) -> Result<()> {
        let len = self.domains.len();
        let dom = self
            .domains
            .get_mut(index)
            .ok_or(GridscopeError::DomainIndexOutOfRange { index, len })?;
        dom.translate(delta);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Draws any 3D-drawable value, returning the display for chaining.
    pub fn draw<T: Drawable3d + ?Sized>(&mut self, object: &T) -> Result<&mut Self> {
        object.draw_on(self)?;
        Ok(self)
    }
}

fn last_group<T>(groups: &mut Vec<Vec<T>>) -> &mut Vec<T> {
    if groups.is_empty() {
        groups.push(Vec::new());
    }
    let last = groups.len() - 1;
    &mut groups[last]
}

fn flat_len<T>(groups: &[Vec<T>]) -> usize {
    groups.iter().map(Vec::len).sum()
}
