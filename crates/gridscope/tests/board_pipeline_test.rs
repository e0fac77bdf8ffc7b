//! End-to-end tests of the 2D pipeline through the facade: dispatch,
//! style directives, command streams, and SVG export.

use gridscope::*;

#[test]
fn single_point_paving_is_one_filled_unit_square() {
    let mut board = Board2::new();
    board.draw(&Point2::new(3, 4)).unwrap();
    assert_eq!(board.len(), 1);
    match board.items()[0].shape {
        Shape2::Rectangle { center, half_extent } => {
            assert_eq!(center, RealPoint2::new(3.0, 4.0));
            assert_eq!(half_extent, RealPoint2::splat(0.5));
        }
        ref other => panic!("unexpected shape: {other:?}"),
    }
    assert!(board.items()[0].style.is_filled());
}

#[test]
fn empty_digital_set_draws_nothing_without_error() {
    let domain = Domain2::new(Point2::new(0, 0), Point2::new(9, 9));
    let mut board = Board2::new();
    board.draw(&DigitalSetBySet2::new(domain)).unwrap();
    board.draw(&DigitalSetByVec2::new(domain)).unwrap();
    assert!(board.is_empty());
}

#[test]
fn default_style_is_consistent_across_calls() {
    let mut board = Board2::new();
    board.draw(&Point2::new(0, 0)).unwrap();
    board.draw(&Point2::new(5, 5)).unwrap();
    assert_eq!(board.items()[0].style, board.items()[1].style);
}

#[test]
fn directives_affect_only_later_shapes() {
    let mut board = Board2::new();
    board.draw(&Point2::new(0, 0)).unwrap();
    board
        .draw(&CustomStyle2::new(
            "Point",
            Style2::default().with_fill_color(Color::RED),
        ))
        .unwrap();
    board.draw(&Point2::new(1, 0)).unwrap();
    assert_ne!(board.items()[0].style.fill_color, Some(Color::RED));
    assert_eq!(board.items()[1].style.fill_color, Some(Color::RED));
}

#[test]
fn mixed_scene_exports_svg() {
    let mut board = Board2::new();
    let domain = Domain2::new(Point2::new(0, 0), Point2::new(6, 6));
    board.draw(&domain).unwrap();

    let mut set = DigitalSetByVec2::new(domain);
    set.insert(Point2::new(1, 1));
    set.insert(Point2::new(2, 1));
    board.draw(&set).unwrap();

    let chain = FreemanChain::from_code_string(Point2::new(3, 3), "0123").unwrap();
    board.draw(&chain).unwrap();

    let minimizer = AngleMinimizer::new(vec![
        AngleEntry::new(0.4, 0.0, 1.0),
        AngleEntry::new(1.0, 0.5, 1.8),
    ]);
    board.draw(&minimizer).unwrap();

    let svg = board.to_svg();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<svg "));
    assert!(svg.contains("<rect "));
    assert!(svg.contains("<line "));
    assert!(svg.contains("<circle "));
    assert!(svg.contains("<path "));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn command_stream_replays_in_order_and_scopes_styles() {
    let chain = FreemanChain::from_code_string(Point2::new(0, 0), "00").unwrap();
    let stream = vec![
        Command2::SetMode(SetMode2::new("Point", "Grid")),
        Command2::Point(Point2::new(4, 4)),
        Command2::FreemanChain(chain),
        Command2::Arrow { a: Point2::new(0, 0), b: Point2::new(1, 1) },
    ];

    let mut board = Board2::new();
    run2(&mut board, &stream, StyleScope::Scoped).unwrap();
    // 1 disk + 2 chain segments + 1 arrow.
    assert_eq!(board.len(), 4);
    assert_eq!(board.mode("Point"), "");

    // The same stream drawn retained keeps the mode.
    let mut board = Board2::new();
    run2(&mut board, &stream, StyleScope::Retained).unwrap();
    assert_eq!(board.mode("Point"), "Grid");
}

#[test]
fn unknown_mode_fails_fast_with_nothing_drawn() {
    let mut board = Board2::new();
    board.set_mode("Domain", "Voxels");
    let err = board.draw(&Domain2::new(Point2::new(0, 0), Point2::new(2, 2))).unwrap_err();
    assert!(matches!(err, GridscopeError::UnknownMode { .. }));
    assert!(board.is_empty());
}
