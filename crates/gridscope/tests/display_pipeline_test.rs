//! End-to-end tests of the 3D pipeline through the facade: dispatch,
//! the owned-style protocol, scene directives, images, and command
//! streams.

use gridscope::*;

#[test]
fn default_styles_are_stable_per_type() {
    let p = Point3::new(1, 2, 3);
    assert_eq!(p.default_style(""), p.default_style(""));
    assert_eq!(p.default_style("Grid"), Point3::ZERO.default_style("Grid"));

    let domain = Domain3::new(Point3::ZERO, Point3::new(1, 1, 1));
    assert_eq!(domain.default_style("Paving"), domain.default_style("Paving"));
    // Different modes may style differently, but never nondeterministically.
    assert_ne!(domain.default_style("Paving"), domain.default_style("Grid"));
}

#[test]
fn empty_set_draws_nothing_without_error() {
    let domain = Domain3::new(Point3::ZERO, Point3::new(4, 4, 4));
    let mut display = Display3::new();
    display.draw(&DigitalSetBySet3::new(domain)).unwrap();
    display.draw(&DigitalSetByVec3::new(domain)).unwrap();
    assert!(display.is_empty());
}

#[test]
fn custom_colors_apply_between_directive_and_reset() {
    let mut display = Display3::new();
    display.draw(&Point3::ZERO).unwrap();
    display.draw(&CustomColors3::new(Color::RED, Color::BLUE)).unwrap();
    display.draw(&Point3::new(1, 0, 0)).unwrap();
    display.reset_styles();
    display.draw(&Point3::new(2, 0, 0)).unwrap();

    let cubes = &display.cubes()[0];
    assert_eq!(cubes[0].color, cubes[2].color);
    assert_eq!(cubes[1].color, Color::BLUE);
}

#[test]
fn style_override_beats_custom_colors() {
    let mut display = Display3::new();
    display.draw(&CustomColors3::new(Color::RED, Color::RED)).unwrap();
    display
        .draw(&CustomStyle3::new("Point", Style3::default().with_color(Color::GREEN)))
        .unwrap();
    display.draw(&Point3::ZERO).unwrap();
    assert_eq!(display.cubes()[0][0].color, Color::GREEN);
}

#[test]
fn surfel_curve_full_tour() {
    let curve = GridCurve3::new(vec![
        SignedCell3::new(Cell3::surfel(Point3::ZERO, 2), true),
        SignedCell3::new(Cell3::surfel(Point3::new(1, 0, 0), 2), true),
        SignedCell3::new(Cell3::surfel(Point3::new(2, 0, 0), 2), false),
    ])
    .unwrap();

    let mut display = Display3::new();
    display.draw(&curve).unwrap();
    assert_eq!(display.quads()[0].len(), 3);

    display.draw(&curve.inner_points_range().unwrap()).unwrap();
    display.draw(&curve.outer_points_range().unwrap()).unwrap();
    display.draw(&curve.incident_points_range().unwrap()).unwrap();
    // 3 + 3 + 6 cubes.
    assert_eq!(display.cubes()[0].len(), 12);
}

#[test]
fn non_surfel_curve_rejects_incident_ranges() {
    let curve = GridCurve3::from_lattice_points(&[Point3::ZERO, Point3::new(1, 0, 0)]).unwrap();
    let err = curve.inner_points_range().unwrap_err();
    assert!(matches!(err, GridscopeError::InvalidCellDimension { expected: 2, .. }));
}

#[test]
fn image_adapter_draws_restricted_view() {
    let domain = Domain2::new(Point2::new(0, 0), Point2::new(9, 9));
    let image = Image2::from_fn(domain, |p| (p.x + p.y) as u8);
    let sub = Domain2::new(Point2::new(2, 2), Point2::new(4, 5));
    let adapter = ImageAdapter2::new(&image, sub, |p| p, |v| v);

    let mut display = Display3::new();
    draw_image(&mut display, &adapter);
    assert_eq!(display.images().len(), 1);
    let img = &display.images()[0];
    assert_eq!((img.width(), img.height()), (3, 4));
    assert_eq!(img.origin(), RealPoint3::new(1.5, 1.5, 0.0));
}

fn draw_image<I: ImageSource2<Value = u8>>(display: &mut Display3, image: &I) {
    factory3d::draw_image_2d(display, image, &|v: u8| Color::gray_level(v), TextureMode::Rgb)
        .unwrap();
}

#[test]
fn command_stream_drives_a_whole_scene() {
    let domain = Domain3::new(Point3::ZERO, Point3::new(3, 3, 3));
    let mut set = DigitalSetBySet3::new(domain);
    set.insert(Point3::new(1, 1, 1));

    let image_domain = Domain2::new(Point2::new(0, 0), Point2::new(3, 3));
    let image = Image2::from_fn(image_domain, |p| (16 * (p.x + p.y)) as u8);
    let add_image =
        AddTexturedImage2::new(&image, &|v: u8| Color::gray_level(v), TextureMode::GrayScale)
            .unwrap();

    let stream = vec![
        Command3::SetMode(SetMode3::new("Domain", "BoundingBox")),
        Command3::Domain(domain),
        Command3::SetBySet(set),
        Command3::AddImage2(add_image),
        Command3::UpdateLastImagePosition(UpdateLastImagePosition {
            origin: RealPoint3::new(0.0, 0.0, 5.0),
            direction: ImageDirection::Z,
        }),
        Command3::SurfelPrism(SurfelPrism::new(
            SignedCell3::new(Cell3::surfel(Point3::new(1, 1, 2), 2), true),
            0.3,
            0.7,
        )),
        Command3::ClippingPlane(ClippingPlane::new(RealPoint3::Y, -1.5, false)),
    ];

    let mut display = Display3::new();
    run3(&mut display, &stream, StyleScope::Scoped).unwrap();

    assert_eq!(display.lines()[0].len(), 12);
    assert_eq!(display.cubes()[0].len(), 1);
    assert_eq!(display.images().len(), 1);
    assert_eq!(display.images()[0].origin().z, 5.0);
    assert_eq!(display.prisms().len(), 1);
    assert_eq!(display.clipping_planes().len(), 1);
    // Scoped run: the Domain mode did not stick.
    assert_eq!(display.mode("Domain"), "");
}

#[test]
fn mesh_and_accumulator_share_a_scene() {
    let vertices = vec![
        RealPoint3::new(0.0, 0.0, 0.0),
        RealPoint3::new(1.0, 0.0, 0.0),
        RealPoint3::new(1.0, 1.0, 0.0),
        RealPoint3::new(0.0, 1.0, 0.0),
    ];
    let mesh = Mesh::new(vertices, vec![vec![0, 1, 2], vec![0, 2, 3]]).unwrap();

    let mut acc = SphericalAccumulator::new(4);
    acc.add_direction(RealPoint3::new(1.0, 0.0, 0.0));
    acc.add_direction(RealPoint3::new(0.0, 1.0, 0.0));

    let mut display = Display3::new();
    display.draw(&mesh).unwrap();
    display.draw(&acc).unwrap();
    assert_eq!(display.triangles()[0].len(), 2);
    assert_eq!(display.quads()[0].len(), 2);
}
