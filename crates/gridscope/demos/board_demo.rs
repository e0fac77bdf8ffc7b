//! 2D board demo: domain grid, digital set paving, Freeman chain, and
//! a digital straight segment, exported as an SVG file.
//!
//! Run with `cargo run --example board_demo`; writes `board_demo.svg`
//! into the current directory.

use gridscope::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut board = Board2::new();

    // The ambient domain as a lattice grid.
    let domain = Domain2::new(Point2::new(-2, -2), Point2::new(12, 10));
    board.draw(&domain)?;

    // A small digital set, paved.
    let mut set = DigitalSetBySet2::new(domain);
    for p in [
        Point2::new(2, 2),
        Point2::new(3, 2),
        Point2::new(3, 3),
        Point2::new(4, 3),
        Point2::new(4, 4),
    ] {
        set.insert(p);
    }
    board.draw(&set)?;

    // A closed Freeman chain on the inter-pixel grid, drawn red.
    board.draw(&SetMode2::new("FreemanChain", "InterGrid"))?;
    board.draw(&CustomStyle2::new(
        "FreemanChain",
        Style2::default().with_pen_color(Color::RED),
    ))?;
    let chain = FreemanChain::from_code_string(Point2::new(7, 2), "001122033")?;
    board.draw(&chain)?;

    // A digital straight segment with its bounding strip and points.
    let points: Vec<Point2> = (0..=8).map(|x| Point2::new(x, (2 * x + 3) / 5)).collect();
    let segment = DigitalSegment2::new(2, 5, -3, Adjacency2::Four, points)?;
    board.draw(&segment)?;
    board.draw(&SetMode2::new("DigitalSegment", "Points"))?;
    board.draw(&segment)?;

    board.save_svg("board_demo.svg")?;
    println!("wrote board_demo.svg ({} shapes)", board.len());
    Ok(())
}
