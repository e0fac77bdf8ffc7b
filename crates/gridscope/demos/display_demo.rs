//! 3D display demo: a domain, a digital set, a grid curve with its
//! incident voxels, and a textured image slice, summarized on stdout.
//!
//! Run with `cargo run --example display_demo`. The display is an
//! in-memory scene; a viewer would consume its primitive lists.

use gridscope::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut display = Display3::new();

    // The ambient domain as a wire bounding box.
    let domain = Domain3::new(Point3::new(0, 0, 0), Point3::new(7, 7, 7));
    display.draw(&SetMode3::new("Domain", "BoundingBox"))?;
    display.draw(&domain)?;

    // A hand-made blob, paved transparently.
    let mut set = DigitalSetBySet3::new(domain);
    for p in [
        Point3::new(3, 3, 3),
        Point3::new(4, 3, 3),
        Point3::new(4, 4, 3),
        Point3::new(4, 4, 4),
        Point3::new(3, 4, 4),
    ] {
        set.insert(p);
    }
    display.draw(&SetMode3::new("DigitalSet", "PavingTransparent"))?;
    display.draw(&set)?;

    // A 4-connected staircase as a grid curve, plus its incident voxels.
    let curve = GridCurve3::from_lattice_points(&[
        Point3::new(0, 0, 0),
        Point3::new(1, 0, 0),
        Point3::new(1, 1, 0),
        Point3::new(1, 1, 1),
    ])?;
    display.draw(&curve)?;
    display.draw(&curve.points_range())?;

    // A scalar image drawn as a grayscale textured quad in the scene.
    let image_domain = Domain2::new(Point2::new(0, 0), Point2::new(15, 15));
    let image = Image2::from_fn(image_domain, |p| (p.x * p.y) as u16);
    display.draw(&image)?;
    display.draw(&UpdateLastImagePosition {
        origin: RealPoint3::new(-0.5, -0.5, 8.0),
        direction: ImageDirection::Z,
    })?;

    // A clipping plane through the middle of the scene.
    display.draw(&ClippingPlane::new(RealPoint3::Z, -3.5, true))?;

    println!(
        "scene: {} primitives, {} textured images, {} clipping planes",
        display.primitive_count(),
        display.images().len(),
        display.clipping_planes().len(),
    );
    Ok(())
}
