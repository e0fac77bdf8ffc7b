//! Ordered command streams replayed onto a canvas.
//!
//! [`Command2`] and [`Command3`] close the drawable surface into one
//! enum each, so a caller can record an interleaved sequence of
//! geometry draws and style directives and replay it later with
//! [`run2`] / [`run3`]. Commands run strictly in order, which preserves
//! the directive contract: a mode, style, or color change affects only
//! primitives appended after it in the stream.
//!
//! [`StyleScope`] settles whether a run's style mutations outlive it.
//! `Retained` leaves them on the canvas, matching a direct sequence of
//! `draw` calls; `Scoped` snapshots the canvas's mode map, style
//! overrides, and custom color pair before the run and restores them
//! afterwards, even when a command fails.

use gridscope_core::Result;
use gridscope_kernel::{
    AngleMinimizer, Cell2, Cell3, DigitalObject2, DigitalObject3, DigitalSegment2,
    DigitalSegment3, DigitalSetBySet2, DigitalSetBySet3, DigitalSetByVec2, DigitalSetByVec3,
    Domain2, Domain3, FreemanChain, GridCurve3, LatticePolygon, Mesh, Point2, Point3, SignedCell2,
    SignedCell3, SphericalAccumulator,
};

use crate::board2::Board2;
use crate::display3::Display3;
use crate::modifiers::{
    AddDomain2, AddTexturedImage2, AddTexturedImage3, ClippingPlane, CustomColors3, CustomStyle2,
    CustomStyle3, SetMode2, SetMode3, SurfelPrism, TranslateDomain, UpdateDomainPosition,
    UpdateImageData, UpdateImagePosition, UpdateLastImagePosition,
};
use crate::{factory2d, factory3d};

/// Whether a command run's style mutations persist on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleScope {
    /// Mutations stay on the canvas after the run.
    #[default]
    Retained,
    /// The canvas's dispatch state is restored after the run.
    Scoped,
}

/// One recorded 2D operation: a geometry draw or a style directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Command2 {
    Point(Point2),
    Arrow { a: Point2, b: Point2 },
    Domain(Domain2),
    SetBySet(DigitalSetBySet2),
    SetByVec(DigitalSetByVec2),
    FreemanChain(FreemanChain),
    Segment(DigitalSegment2),
    Object(DigitalObject2),
    Cell(Cell2),
    SignedCell(SignedCell2),
    AngleMinimizer(AngleMinimizer),
    Polygon(LatticePolygon),
    SetMode(SetMode2),
    CustomStyle(CustomStyle2),
}

impl Command2 {
    fn apply(&self, board: &mut Board2) -> Result<()> {
        match self {
            Command2::Point(p) => board.draw(p).map(drop),
            Command2::Arrow { a, b } => factory2d::draw_arrow(board, *a, *b),
            Command2::Domain(d) => board.draw(d).map(drop),
            Command2::SetBySet(s) => board.draw(s).map(drop),
            Command2::SetByVec(s) => board.draw(s).map(drop),
            Command2::FreemanChain(c) => board.draw(c).map(drop),
            Command2::Segment(s) => board.draw(s).map(drop),
            Command2::Object(o) => board.draw(o).map(drop),
            Command2::Cell(c) => board.draw(c).map(drop),
            Command2::SignedCell(c) => board.draw(c).map(drop),
            Command2::AngleMinimizer(m) => board.draw(m).map(drop),
            Command2::Polygon(p) => board.draw(p).map(drop),
            Command2::SetMode(m) => board.draw(m).map(drop),
            Command2::CustomStyle(s) => board.draw(s).map(drop),
        }
    }
}

/// One recorded 3D operation: a geometry draw or a style directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Command3 {
    Point(Point3),
    Arrow { a: Point3, b: Point3 },
    Domain(Domain3),
    SetBySet(DigitalSetBySet3),
    SetByVec(DigitalSetByVec3),
    Segment(DigitalSegment3),
    Object(DigitalObject3),
    Cell(Cell3),
    SignedCell(SignedCell3),
    Mesh(Mesh),
    Accumulator(SphericalAccumulator),
    GridCurve(GridCurve3),
    SetMode(SetMode3),
    CustomStyle(CustomStyle3),
    CustomColors(CustomColors3),
    ClippingPlane(ClippingPlane),
    AddImage2(AddTexturedImage2),
    AddImage3(AddTexturedImage3),
    UpdateImageData(UpdateImageData),
    UpdateImagePosition(UpdateImagePosition),
    UpdateLastImagePosition(UpdateLastImagePosition),
    AddDomain2(AddDomain2),
    UpdateDomainPosition(UpdateDomainPosition),
    TranslateDomain(TranslateDomain),
    SurfelPrism(SurfelPrism),
}

impl Command3 {
    fn apply(&self, display: &mut Display3) -> Result<()> {
        match self {
            Command3::Point(p) => display.draw(p).map(drop),
            Command3::Arrow { a, b } => factory3d::draw_arrow(display, *a, *b),
            Command3::Domain(d) => display.draw(d).map(drop),
            Command3::SetBySet(s) => display.draw(s).map(drop),
            Command3::SetByVec(s) => display.draw(s).map(drop),
            Command3::Segment(s) => display.draw(s).map(drop),
            Command3::Object(o) => display.draw(o).map(drop),
            Command3::Cell(c) => display.draw(c).map(drop),
            Command3::SignedCell(c) => display.draw(c).map(drop),
            Command3::Mesh(m) => display.draw(m).map(drop),
            Command3::Accumulator(a) => display.draw(a).map(drop),
            Command3::GridCurve(g) => display.draw(g).map(drop),
            Command3::SetMode(m) => display.draw(m).map(drop),
            Command3::CustomStyle(s) => display.draw(s).map(drop),
            Command3::CustomColors(c) => display.draw(c).map(drop),
            Command3::ClippingPlane(p) => display.draw(p).map(drop),
            Command3::AddImage2(i) => display.draw(i).map(drop),
            Command3::AddImage3(i) => display.draw(i).map(drop),
            Command3::UpdateImageData(u) => display.draw(u).map(drop),
            Command3::UpdateImagePosition(u) => display.draw(u).map(drop),
            Command3::UpdateLastImagePosition(u) => display.draw(u).map(drop),
            Command3::AddDomain2(d) => display.draw(d).map(drop),
            Command3::UpdateDomainPosition(u) => display.draw(u).map(drop),
            Command3::TranslateDomain(t) => display.draw(t).map(drop),
            Command3::SurfelPrism(p) => display.draw(p).map(drop),
        }
    }
}

/// Replays a 2D command stream onto the board, in order.
///
/// Stops at the first failing command; with `StyleScope::Scoped` the
/// board's dispatch state is restored either way.
pub fn run2(board: &mut Board2, commands: &[Command2], scope: StyleScope) -> Result<()> {
    let saved = (scope == StyleScope::Scoped).then(|| board.style_state());
    log::debug!("running {} 2D commands ({scope:?})", commands.len());
    let outcome = commands.iter().try_for_each(|command| command.apply(board));
    if let Some(state) = saved {
        board.restore_style_state(state);
    }
    outcome
}

/// Replays a 3D command stream onto the display, in order.
///
/// Stops at the first failing command; with `StyleScope::Scoped` the
/// display's dispatch state is restored either way.
pub fn run3(display: &mut Display3, commands: &[Command3], scope: StyleScope) -> Result<()> {
    let saved = (scope == StyleScope::Scoped).then(|| display.style_state());
    log::debug!("running {} 3D commands ({scope:?})", commands.len());
    let outcome = commands.iter().try_for_each(|command| command.apply(display));
    if let Some(state) = saved {
        display.restore_style_state(state);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use gridscope_core::{Color, GridscopeError, Style2, Style3};
    use gridscope_kernel::RealPoint3;

    use super::*;
    use crate::board2::Shape2;

    #[test]
    fn test_run2_preserves_order() {
        let mut board = Board2::new();
        run2(
            &mut board,
            &[
                Command2::Point(Point2::new(0, 0)),
                Command2::SetMode(SetMode2::new("Point", "Grid")),
                Command2::Point(Point2::new(1, 0)),
            ],
            StyleScope::Retained,
        )
        .unwrap();
        assert!(matches!(board.items()[0].shape, Shape2::Rectangle { .. }));
        assert!(matches!(board.items()[1].shape, Shape2::Circle { .. }));
        // Retained: the mode survives the run.
        assert_eq!(board.mode("Point"), "Grid");
    }

    #[test]
    fn test_run2_scoped_restores_dispatch_state() {
        let mut board = Board2::new();
        board.set_mode("Point", "Grid");
        run2(
            &mut board,
            &[
                Command2::SetMode(SetMode2::new("Point", "Paving")),
                Command2::CustomStyle(CustomStyle2::new(
                    "Domain",
                    Style2::default().with_pen_color(Color::RED),
                )),
                Command2::Point(Point2::new(2, 2)),
            ],
            StyleScope::Scoped,
        )
        .unwrap();
        // The paving drawn inside the run stays; the state does not.
        assert!(matches!(board.items()[0].shape, Shape2::Rectangle { .. }));
        assert_eq!(board.mode("Point"), "Grid");
        assert!(board.style_override("Domain").is_none());
    }

    #[test]
    fn test_run2_stops_at_first_error_but_restores() {
        let mut board = Board2::new();
        let err = run2(
            &mut board,
            &[
                Command2::SetMode(SetMode2::new("Point", "NoSuchMode")),
                Command2::Point(Point2::new(0, 0)),
                Command2::Point(Point2::new(1, 1)),
            ],
            StyleScope::Scoped,
        )
        .unwrap_err();
        assert!(matches!(err, GridscopeError::UnknownMode { .. }));
        assert!(board.is_empty());
        assert_eq!(board.mode("Point"), "");
    }

    #[test]
    fn test_run3_interleaves_directives_and_geometry() {
        let mut display = Display3::new();
        run3(
            &mut display,
            &[
                Command3::Point(Point3::ZERO),
                Command3::CustomColors(CustomColors3::new(Color::RED, Color::BLUE)),
                Command3::Point(Point3::new(1, 0, 0)),
                Command3::ClippingPlane(ClippingPlane::new(RealPoint3::Z, 0.0, false)),
            ],
            StyleScope::Retained,
        )
        .unwrap();
        let cubes = &display.cubes()[0];
        assert_ne!(cubes[0].color, Color::BLUE);
        assert_eq!(cubes[1].color, Color::BLUE);
        assert_eq!(display.clipping_planes().len(), 1);
        assert!(display.custom_colors().is_some());
    }

    #[test]
    fn test_run3_scoped_restores_colors_and_styles() {
        let mut display = Display3::new();
        display.set_style("Mesh", Style3::default().with_color(Color::GREEN));
        run3(
            &mut display,
            &[
                Command3::CustomColors(CustomColors3::new(Color::RED, Color::RED)),
                Command3::CustomStyle(CustomStyle3::new("Point", Style3::default())),
                Command3::SetMode(SetMode3::new("Domain", "Paving")),
            ],
            StyleScope::Scoped,
        )
        .unwrap();
        assert!(display.custom_colors().is_none());
        assert!(display.style_override("Point").is_none());
        assert_eq!(display.mode("Domain"), "");
        // Pre-existing overrides survive untouched.
        assert!(display.style_override("Mesh").is_some());
    }

    #[test]
    fn test_replaying_a_stream_is_deterministic() {
        let domain = Domain3::new(Point3::ZERO, Point3::new(2, 2, 2));
        let mut set = DigitalSetBySet3::new(domain);
        set.insert(Point3::new(1, 1, 1));
        set.insert(Point3::new(2, 0, 2));
        let stream = vec![
            Command3::Domain(domain),
            Command3::SetMode(SetMode3::new("DigitalSet", "Grid")),
            Command3::SetBySet(set),
        ];
        let render = |stream: &[Command3]| {
            let mut display = Display3::new();
            run3(&mut display, stream, StyleScope::Retained).unwrap();
            (display.lines().to_vec(), display.balls().to_vec())
        };
        assert_eq!(render(&stream), render(&stream));
    }
}
