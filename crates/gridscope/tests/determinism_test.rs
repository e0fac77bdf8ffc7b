//! Property tests for the dispatch contract: primitive counts depend
//! only on the input's content, and equal inputs always produce equal
//! primitive sequences.

use gridscope::*;
use proptest::prelude::*;

const DOMAIN_MAX: i32 = 15;

fn arb_point2() -> impl Strategy<Value = Point2> {
    (0..=DOMAIN_MAX, 0..=DOMAIN_MAX).prop_map(|(x, y)| Point2::new(x, y))
}

fn arb_point3() -> impl Strategy<Value = Point3> {
    (0..=DOMAIN_MAX, 0..=DOMAIN_MAX, 0..=DOMAIN_MAX).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

proptest! {
    #[test]
    fn set_paving_count_equals_set_size(points in proptest::collection::vec(arb_point2(), 0..40)) {
        let domain = Domain2::new(Point2::new(0, 0), Point2::splat(DOMAIN_MAX));
        let mut set = DigitalSetBySet2::new(domain);
        for &p in &points {
            set.insert(p);
        }
        let mut board = Board2::new();
        board.draw(&set).unwrap();
        prop_assert_eq!(board.len(), set.len());
    }

    #[test]
    fn equal_sets_draw_equal_sequences(points in proptest::collection::vec(arb_point2(), 0..40)) {
        let domain = Domain2::new(Point2::new(0, 0), Point2::splat(DOMAIN_MAX));
        let render = |points: &[Point2]| {
            let mut set = DigitalSetBySet2::new(domain);
            for &p in points {
                set.insert(p);
            }
            let mut board = Board2::new();
            board.draw(&set).unwrap();
            board.items().to_vec()
        };
        // Insertion order never leaks into the sorted set's output.
        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert_eq!(render(&points), render(&reversed));
    }

    #[test]
    fn domain_grid_count_is_width_plus_height(
        (w, h) in (0..=DOMAIN_MAX, 0..=DOMAIN_MAX),
    ) {
        let domain = Domain2::new(Point2::new(0, 0), Point2::new(w, h));
        let mut board = Board2::new();
        board.draw(&domain).unwrap();
        prop_assert_eq!(board.len() as i32, (w + 1) + (h + 1));
    }

    #[test]
    fn chain_draws_one_segment_per_code(codes in "[0-3]{0,60}") {
        let chain = FreemanChain::from_code_string(Point2::new(0, 0), &codes).unwrap();
        let mut board = Board2::new();
        board.draw(&chain).unwrap();
        prop_assert_eq!(board.len(), codes.len());
    }

    #[test]
    fn vec_set_3d_pavings_follow_insertion_order(
        points in proptest::collection::vec(arb_point3(), 0..30),
    ) {
        let domain = Domain3::new(Point3::ZERO, Point3::splat(DOMAIN_MAX));
        let mut set = DigitalSetByVec3::new(domain);
        let mut expected = Vec::new();
        for &p in &points {
            if set.insert(p) {
                expected.push(p.as_vec3());
            }
        }
        let mut display = Display3::new();
        display.draw(&set).unwrap();
        let centers: Vec<RealPoint3> = display
            .cubes()
            .iter()
            .flatten()
            .map(|c| c.center)
            .collect();
        prop_assert_eq!(centers, expected);
    }

    #[test]
    fn point_3d_draw_is_repeatable(p in arb_point3(), mode in prop_oneof![
        Just(""), Just("Paving"), Just("PavingWired"), Just("Grid"),
    ]) {
        let render = || {
            let mut display = Display3::new();
            if !mode.is_empty() {
                display.set_mode("Point", mode);
            }
            display.draw(&p).unwrap();
            (
                display.lines().to_vec(),
                display.balls().to_vec(),
                display.cubes().to_vec(),
            )
        };
        prop_assert_eq!(render(), render());
    }
}
