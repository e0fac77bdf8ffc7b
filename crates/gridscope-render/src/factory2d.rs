//! 2D drawing routines: one `draw_*` entry point per geometry type.
//!
//! Each `draw_<type>` function reads the board's current mode for the
//! type's class name and forwards to the matching per-variant routine;
//! an empty mode selects the default variant, any other unrecognized
//! mode is an [`UnknownMode`](GridscopeError::UnknownMode) error. The
//! per-variant routines (`draw_<type>_as_<variant>`) are public so
//! callers can bypass mode dispatch entirely.
//!
//! Primitives are appended in a fixed, object-defined order: native
//! iteration order for point sets and domains, code order for chains.
//! Empty inputs append nothing and succeed.

use gridscope_core::{Color, GridscopeError, Result, Style2};
use gridscope_kernel::{
    AngleMinimizer, Cell2, DigitalObject2, DigitalSegment2, DigitalSetBySet2, DigitalSetByVec2,
    Domain2, FreemanChain, LatticePolygon, Point2, PointSet2, RealPoint2, SignedCell2,
};

use crate::board2::{Board2, Shape2};
use crate::drawable::Drawable2d;

// ----------------------------------------------------------------------
// Default styles
// ----------------------------------------------------------------------

/// Fill of paved lattice points.
const POINT_FILL: Color = Color::rgb(160, 160, 160);
/// Pen of domain grid lines and paving outlines.
const DOMAIN_PEN: Color = Color::rgb(160, 160, 160);
/// Fill of paved domain squares.
const DOMAIN_FILL: Color = Color::rgb(230, 230, 230);
/// Fill of digital-set points.
const SET_FILL: Color = Color::rgb(120, 120, 120);
/// Fill of positively signed cells.
const POSITIVE_FILL: Color = Color::rgb(90, 140, 230);
/// Fill of negatively signed cells.
const NEGATIVE_FILL: Color = Color::rgb(230, 140, 90);
/// Fill of unsigned cells.
const CELL_FILL: Color = Color::rgb(180, 180, 180);

/// Radius of a lattice point drawn in `Grid` mode.
const GRID_POINT_RADIUS: f32 = 0.1;
/// Radius of a digital-straight-segment point disk.
const SEGMENT_POINT_RADIUS: f32 = 0.15;
/// Radius of a 0-cell disk and half-thickness of a 1-cell bar.
const CELL_THICKNESS: f32 = 0.12;
/// Radius of an angle-minimizer value dot.
const MINIMIZER_DOT_RADIUS: f32 = 0.08;

fn point_paving_style() -> Style2 {
    Style2::default().with_fill_color(POINT_FILL)
}

fn point_grid_style() -> Style2 {
    Style2::default().with_fill_color(Color::BLACK)
}

fn domain_grid_style() -> Style2 {
    Style2::default().with_pen_color(DOMAIN_PEN)
}

fn domain_paving_style() -> Style2 {
    Style2::default().with_pen_color(DOMAIN_PEN).with_fill_color(DOMAIN_FILL)
}

fn set_style() -> Style2 {
    Style2::default().with_fill_color(SET_FILL)
}

fn cell_style(dim: u32) -> Style2 {
    // Pointels read better solid.
    let fill = if dim == 0 { Color::BLACK } else { CELL_FILL };
    Style2::default().with_fill_color(fill)
}

fn signed_cell_style(positive: bool) -> Style2 {
    let fill = if positive { POSITIVE_FILL } else { NEGATIVE_FILL };
    Style2::default().with_fill_color(fill)
}

fn unknown_mode(class_name: &str, mode: &str) -> GridscopeError {
    GridscopeError::UnknownMode { class_name: class_name.to_owned(), mode: mode.to_owned() }
}

// ----------------------------------------------------------------------
// Lattice points
// ----------------------------------------------------------------------

/// Draws a lattice point in the board's current `Point` mode.
pub fn draw_point(board: &mut Board2, p: Point2) -> Result<()> {
    match board.mode("Point") {
        "" | "Paving" => draw_point_as_paving(board, p),
        "Grid" => draw_point_as_grid(board, p),
        mode => Err(unknown_mode("Point", mode)),
    }
}

/// One filled unit square centered on the point.
pub fn draw_point_as_paving(board: &mut Board2, p: Point2) -> Result<()> {
    let style = board.resolve_style("Point", point_paving_style());
    board.push(
        Shape2::Rectangle { center: p.as_vec2(), half_extent: RealPoint2::splat(0.5) },
        style,
    );
    Ok(())
}

/// One small filled disk at the point.
pub fn draw_point_as_grid(board: &mut Board2, p: Point2) -> Result<()> {
    let style = board.resolve_style("Point", point_grid_style());
    board.push(Shape2::Circle { center: p.as_vec2(), radius: GRID_POINT_RADIUS }, style);
    Ok(())
}

/// An arrow between two lattice points, styled as the `Point` class.
pub fn draw_arrow(board: &mut Board2, a: Point2, b: Point2) -> Result<()> {
    let style = board.resolve_style("Point", Style2::default());
    board.push(Shape2::Arrow { a: a.as_vec2(), b: b.as_vec2() }, style);
    Ok(())
}

// ----------------------------------------------------------------------
// Domains
// ----------------------------------------------------------------------

/// Draws a domain in the board's current `Domain` mode.
pub fn draw_domain(board: &mut Board2, domain: Domain2) -> Result<()> {
    match board.mode("Domain") {
        "" | "Grid" => draw_domain_as_grid(board, domain),
        "Paving" => draw_domain_as_paving(board, domain),
        mode => Err(unknown_mode("Domain", mode)),
    }
}

/// One segment per lattice column and per lattice row of the domain.
pub fn draw_domain_as_grid(board: &mut Board2, domain: Domain2) -> Result<()> {
    if domain.is_empty() {
        return Ok(());
    }
    let style = board.resolve_style("Domain", domain_grid_style());
    let lo = domain.lower_bound();
    let hi = domain.upper_bound();
    for x in lo.x..=hi.x {
        board.push(
            Shape2::Segment {
                a: RealPoint2::new(x as f32, lo.y as f32),
                b: RealPoint2::new(x as f32, hi.y as f32),
            },
            style,
        );
    }
    for y in lo.y..=hi.y {
        board.push(
            Shape2::Segment {
                a: RealPoint2::new(lo.x as f32, y as f32),
                b: RealPoint2::new(hi.x as f32, y as f32),
            },
            style,
        );
    }
    Ok(())
}

/// One filled unit square per point of the domain.
pub fn draw_domain_as_paving(board: &mut Board2, domain: Domain2) -> Result<()> {
    let style = board.resolve_style("Domain", domain_paving_style());
    for p in &domain {
        board.push(
            Shape2::Rectangle { center: p.as_vec2(), half_extent: RealPoint2::splat(0.5) },
            style,
        );
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Digital sets
// ----------------------------------------------------------------------

/// Draws a point set in the board's current `DigitalSet` mode.
pub fn draw_digital_set<S: PointSet2>(board: &mut Board2, set: &S) -> Result<()> {
    match board.mode("DigitalSet") {
        "" | "Paving" => draw_digital_set_as_paving(board, set),
        "Grid" => draw_digital_set_as_grid(board, set),
        mode => Err(unknown_mode("DigitalSet", mode)),
    }
}

/// One filled unit square per point, in the set's native order.
pub fn draw_digital_set_as_paving<S: PointSet2>(board: &mut Board2, set: &S) -> Result<()> {
    let style = board.resolve_style("DigitalSet", set_style());
    for p in set.points() {
        board.push(
            Shape2::Rectangle { center: p.as_vec2(), half_extent: RealPoint2::splat(0.5) },
            style,
        );
    }
    Ok(())
}

/// One small disk per point, in the set's native order.
pub fn draw_digital_set_as_grid<S: PointSet2>(board: &mut Board2, set: &S) -> Result<()> {
    let style = board.resolve_style("DigitalSet", set_style());
    for p in set.points() {
        board.push(Shape2::Circle { center: p.as_vec2(), radius: GRID_POINT_RADIUS }, style);
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Freeman chains
// ----------------------------------------------------------------------

/// Draws a chain in the board's current `FreemanChain` mode.
pub fn draw_freeman_chain(board: &mut Board2, chain: &FreemanChain) -> Result<()> {
    match board.mode("FreemanChain") {
        "" | "Grid" => draw_freeman_chain_as_grid(board, chain),
        "InterGrid" => draw_freeman_chain_as_inter_grid(board, chain),
        mode => Err(unknown_mode("FreemanChain", mode)),
    }
}

/// Polyline segments between consecutive chain points.
pub fn draw_freeman_chain_as_grid(board: &mut Board2, chain: &FreemanChain) -> Result<()> {
    draw_chain_polyline(board, chain, RealPoint2::ZERO)
}

/// The same polyline shifted onto the inter-pixel grid.
pub fn draw_freeman_chain_as_inter_grid(board: &mut Board2, chain: &FreemanChain) -> Result<()> {
    draw_chain_polyline(board, chain, RealPoint2::splat(-0.5))
}

fn draw_chain_polyline(board: &mut Board2, chain: &FreemanChain, shift: RealPoint2) -> Result<()> {
    let style = board.resolve_style("FreemanChain", Style2::default());
    let points: Vec<Point2> = chain.points().collect();
    for pair in points.windows(2) {
        board.push(
            Shape2::Segment { a: pair[0].as_vec2() + shift, b: pair[1].as_vec2() + shift },
            style,
        );
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Digital straight segments
// ----------------------------------------------------------------------

/// Draws a segment in the board's current `DigitalSegment` mode.
pub fn draw_segment(board: &mut Board2, segment: &DigitalSegment2) -> Result<()> {
    match board.mode("DigitalSegment") {
        "" | "BoundingBox" => draw_segment_as_bounding_box(board, segment),
        "Points" => draw_segment_as_digital_points(board, segment),
        mode => Err(unknown_mode("DigitalSegment", mode)),
    }
}

/// The closed 4-gon bounded by the segment's two support lines.
///
/// Corners are the orthogonal projections of the first and last points
/// onto the lines `a x - b y = mu` and `a x - b y = mu + omega - 1`.
pub fn draw_segment_as_bounding_box(board: &mut Board2, segment: &DigitalSegment2) -> Result<()> {
    let (Some(first), Some(last)) = (segment.first(), segment.last()) else {
        return Ok(());
    };
    let style = board.resolve_style("DigitalSegment", Style2::default());
    let upper = segment.mu() as f32;
    let lower = (i64::from(segment.mu()) + segment.omega() - 1) as f32;
    let vertices = vec![
        support_foot(segment, first, upper),
        support_foot(segment, last, upper),
        support_foot(segment, last, lower),
        support_foot(segment, first, lower),
    ];
    board.push(Shape2::Polygon { vertices, closed: true }, style);
    Ok(())
}

/// One small disk per segment point.
pub fn draw_segment_as_digital_points(
    board: &mut Board2,
    segment: &DigitalSegment2,
) -> Result<()> {
    let style = board.resolve_style("DigitalSegment", point_grid_style());
    for &p in segment.points() {
        board.push(Shape2::Circle { center: p.as_vec2(), radius: SEGMENT_POINT_RADIUS }, style);
    }
    Ok(())
}

/// Orthogonal projection of `p` onto the line `a x - b y = c`.
fn support_foot(segment: &DigitalSegment2, p: Point2, c: f32) -> RealPoint2 {
    let a = segment.a() as f32;
    let b = segment.b() as f32;
    let q = p.as_vec2();
    let t = (a * q.x - b * q.y - c) / (a * a + b * b);
    RealPoint2::new(q.x - t * a, q.y + t * b)
}

// ----------------------------------------------------------------------
// Digital objects
// ----------------------------------------------------------------------

/// Draws an object in the board's current `DigitalObject` mode.
pub fn draw_object(board: &mut Board2, object: &DigitalObject2) -> Result<()> {
    match board.mode("DigitalObject") {
        "" => draw_object_points(board, object),
        "DrawAdjacencies" => draw_object_with_adjacencies(board, object),
        mode => Err(unknown_mode("DigitalObject", mode)),
    }
}

/// One filled unit square per object point.
pub fn draw_object_points(board: &mut Board2, object: &DigitalObject2) -> Result<()> {
    let style = board.resolve_style("DigitalObject", set_style());
    for p in object.set().points() {
        board.push(
            Shape2::Rectangle { center: p.as_vec2(), half_extent: RealPoint2::splat(0.5) },
            style,
        );
    }
    Ok(())
}

/// The point paving plus one arrow per directed adjacent pair.
///
/// Arrows are emitted point by point in set order, targets in the
/// adjacency's offset order, so each unordered pair shows up twice with
/// opposite directions.
pub fn draw_object_with_adjacencies(board: &mut Board2, object: &DigitalObject2) -> Result<()> {
    draw_object_points(board, object)?;
    let style = board.resolve_style("DigitalObject", set_style());
    for p in object.set().points() {
        for q in object.neighbors(p) {
            board.push(Shape2::Arrow { a: p.as_vec2(), b: q.as_vec2() }, style);
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Cells
// ----------------------------------------------------------------------

/// Draws an unsigned cell: disk, bar, or square by dimension.
pub fn draw_cell(board: &mut Board2, cell: Cell2) -> Result<()> {
    let mode = board.mode("Cell");
    if !mode.is_empty() {
        return Err(unknown_mode("Cell", mode));
    }
    let style = board.resolve_style("Cell", cell_style(cell.dim()));
    push_cell_glyph(board, cell, style);
    Ok(())
}

/// Draws a signed cell: the cell glyph with a sign-selected fill.
pub fn draw_signed_cell(board: &mut Board2, scell: SignedCell2) -> Result<()> {
    let mode = board.mode("SignedCell");
    if !mode.is_empty() {
        return Err(unknown_mode("SignedCell", mode));
    }
    let style = board.resolve_style("SignedCell", signed_cell_style(scell.positive));
    push_cell_glyph(board, scell.cell, style);
    Ok(())
}

fn push_cell_glyph(board: &mut Board2, cell: Cell2, style: Style2) {
    let center = cell.center();
    match cell.dim() {
        0 => board.push(Shape2::Circle { center, radius: CELL_THICKNESS }, style),
        1 => {
            let half = RealPoint2::new(
                if cell.is_open(0) { 0.5 } else { CELL_THICKNESS },
                if cell.is_open(1) { 0.5 } else { CELL_THICKNESS },
            );
            board.push(Shape2::Rectangle { center, half_extent: half }, style);
        }
        _ => board.push(
            Shape2::Rectangle { center, half_extent: RealPoint2::splat(0.5) },
            style,
        ),
    }
}

// ----------------------------------------------------------------------
// Angle minimizers
// ----------------------------------------------------------------------

/// Draws a minimizer as concentric rings around the origin.
///
/// Entry `i` sits on the ring of radius `i + 1`: an arc spanning its
/// `[min, max]` interval, a dot at its current value, and from the
/// second entry on a segment connecting the previous value dot to this
/// one.
pub fn draw_angle_minimizer(board: &mut Board2, minimizer: &AngleMinimizer) -> Result<()> {
    let mode = board.mode("AngleMinimizer");
    if !mode.is_empty() {
        return Err(unknown_mode("AngleMinimizer", mode));
    }
    let style = board.resolve_style("AngleMinimizer", Style2::default());
    let dot_style = style.with_fill_color(style.pen_color);
    let mut previous_dot: Option<RealPoint2> = None;
    for (i, entry) in minimizer.entries().iter().enumerate() {
        let radius = (i + 1) as f32;
        board.push(
            Shape2::Arc {
                center: RealPoint2::ZERO,
                radius,
                start_angle: entry.min as f32,
                end_angle: entry.max as f32,
            },
            style,
        );
        let dot = RealPoint2::new(entry.value.cos() as f32, entry.value.sin() as f32) * radius;
        board.push(Shape2::Circle { center: dot, radius: MINIMIZER_DOT_RADIUS }, dot_style);
        if let Some(prev) = previous_dot {
            board.push(Shape2::Segment { a: prev, b: dot }, style);
        }
        previous_dot = Some(dot);
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Lattice polygons
// ----------------------------------------------------------------------

/// Draws a polygon in the board's current `LatticePolygon` mode.
pub fn draw_polygon(board: &mut Board2, polygon: &LatticePolygon) -> Result<()> {
    match board.mode("LatticePolygon") {
        "" | "Polygon" => draw_polygon_as_polygon(board, polygon),
        mode => Err(unknown_mode("LatticePolygon", mode)),
    }
}

/// The open or closed polyline through the polygon's vertices.
pub fn draw_polygon_as_polygon(board: &mut Board2, polygon: &LatticePolygon) -> Result<()> {
    if polygon.is_empty() {
        return Ok(());
    }
    let style = board.resolve_style("LatticePolygon", Style2::default());
    let vertices = polygon.vertices().iter().map(|p| p.as_vec2()).collect();
    board.push(Shape2::Polygon { vertices, closed: polygon.is_closed() }, style);
    Ok(())
}

// ----------------------------------------------------------------------
// Drawable impls
// ----------------------------------------------------------------------

impl Drawable2d for Point2 {
    fn class_name(&self) -> &'static str {
        "Point"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_point(board, *self)
    }
}

impl Drawable2d for Domain2 {
    fn class_name(&self) -> &'static str {
        "Domain"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_domain(board, *self)
    }
}

impl Drawable2d for DigitalSetBySet2 {
    fn class_name(&self) -> &'static str {
        "DigitalSet"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_digital_set(board, self)
    }
}

impl Drawable2d for DigitalSetByVec2 {
    fn class_name(&self) -> &'static str {
        "DigitalSet"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_digital_set(board, self)
    }
}

impl Drawable2d for FreemanChain {
    fn class_name(&self) -> &'static str {
        "FreemanChain"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_freeman_chain(board, self)
    }
}

impl Drawable2d for DigitalSegment2 {
    fn class_name(&self) -> &'static str {
        "DigitalSegment"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_segment(board, self)
    }
}

impl Drawable2d for DigitalObject2 {
    fn class_name(&self) -> &'static str {
        "DigitalObject"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_object(board, self)
    }
}

impl Drawable2d for Cell2 {
    fn class_name(&self) -> &'static str {
        "Cell"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_cell(board, *self)
    }
}

impl Drawable2d for SignedCell2 {
    fn class_name(&self) -> &'static str {
        "SignedCell"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_signed_cell(board, *self)
    }
}

impl Drawable2d for AngleMinimizer {
    fn class_name(&self) -> &'static str {
        "AngleMinimizer"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_angle_minimizer(board, self)
    }
}

impl Drawable2d for LatticePolygon {
    fn class_name(&self) -> &'static str {
        "LatticePolygon"
    }

    fn draw_on(&self, board: &mut Board2) -> Result<()> {
        draw_polygon(board, self)
    }
}
