//! End-to-end scenarios over a tagged point nested inside a labelled record.

use std::cell::Cell;

use optica::optics::{FunctionLens, Lens, Optional, Prism, nth, optional_then_lens};
use optica::{Lenses, Prisms, lens};
use rstest::{fixture, rstest};

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point2D {
    x: f64,
    y: f64,
}

#[derive(Clone, PartialEq, Debug)]
struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Point {
    Point2D(Point2D),
    Point3D(Point3D),
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Marker {
    label: String,
    point: Point,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Greeting {
    key: String,
    language: String,
}

#[fixture]
fn flat_marker() -> Marker {
    Marker {
        label: "origin".to_string(),
        point: Point::Point2D(Point2D { x: 1.0, y: 2.0 }),
    }
}

#[fixture]
fn greetings() -> Vec<Greeting> {
    vec![
        Greeting {
            key: "Hello".to_string(),
            language: "en".to_string(),
        },
        Greeting {
            key: "Bonjour".to_string(),
            language: "fr".to_string(),
        },
    ]
}

/// A total accessor for a vector index, for callers who know the index exists.
fn index_lens<T>(index: usize) -> impl Lens<Vec<T>, T> {
    FunctionLens::new(
        move |source: &Vec<T>| &source[index],
        move |mut source: Vec<T>, value: T| {
            source[index] = value;
            source
        },
    )
}

// =============================================================================
// Lens then Prism
// =============================================================================

#[rstest]
fn test_to_point2d_reads_the_flat_point(flat_marker: Marker) {
    let to_point2d = Marker::point_lens().compose_prism(Point::point2d_prism());
    assert_eq!(
        to_point2d.get_option(&flat_marker),
        Some(&Point2D { x: 1.0, y: 2.0 })
    );
}

#[rstest]
fn test_to_point3d_misses_the_flat_point(flat_marker: Marker) {
    let to_point3d = Marker::point_lens().compose_prism(Point::point3d_prism());
    assert_eq!(to_point3d.get_option(&flat_marker), None);
}

#[rstest]
fn test_set_through_to_point2d_keeps_label(flat_marker: Marker) {
    let to_point2d = Marker::point_lens().compose_prism(Point::point2d_prism());
    let moved = to_point2d.set(flat_marker, Point2D { x: 5.0, y: 6.0 });
    assert_eq!(moved.label, "origin");
    assert_eq!(moved.point, Point::Point2D(Point2D { x: 5.0, y: 6.0 }));
}

#[rstest]
fn test_set_through_absent_alternative_switches_variant(flat_marker: Marker) {
    let to_point3d = Marker::point_lens().compose_prism(Point::point3d_prism());
    let lifted = to_point3d.set(
        flat_marker,
        Point3D {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        },
    );

    assert_eq!(
        lifted.point,
        Point::Point3D(Point3D {
            x: 1.0,
            y: 2.0,
            z: 3.0
        })
    );
    assert_eq!(lifted.label, "origin");
}

#[rstest]
#[case(Point::Point2D(Point2D { x: 3.0, y: 4.0 }), Some(3.0))]
#[case(Point::Point3D(Point3D { x: 3.0, y: 4.0, z: 5.0 }), None)]
fn test_three_step_chain_reaches_x(#[case] point: Point, #[case] expected: Option<f64>) {
    let marker_x = Marker::point_lens()
        .compose_prism(Point::point2d_prism())
        .compose_lens(Point2D::x_lens());
    let marker = Marker {
        label: "beacon".to_string(),
        point,
    };
    assert_eq!(marker_x.get_option(&marker).copied(), expected);
}

#[rstest]
fn test_modify_through_chain_scales_flat_point(flat_marker: Marker) {
    let marker_y = Marker::point_lens()
        .compose_prism(Point::point2d_prism())
        .compose_lens(Point2D::y_lens());
    let scaled = marker_y.modify(flat_marker, |y| y * 10.0);
    assert_eq!(scaled.point, Point::Point2D(Point2D { x: 1.0, y: 20.0 }));
}

// =============================================================================
// Indexed access
// =============================================================================

#[rstest]
fn test_index_lens_then_key(greetings: Vec<Greeting>) {
    let first_key = index_lens::<Greeting>(0).compose(Greeting::key_lens());
    assert_eq!(first_key.get(&greetings), "Hello");

    let updated = first_key.set(greetings.clone(), "Salut".to_string());
    assert_eq!(first_key.get(&updated), "Salut");
    assert_eq!(updated[1], greetings[1]);
    assert_eq!(updated[0].language, "en");
}

#[rstest]
fn test_nth_then_key(greetings: Vec<Greeting>) {
    let first_key = nth::<Greeting>(0).compose_lens(Greeting::key_lens());
    assert_eq!(first_key.get_option(&greetings).map(String::as_str), Some("Hello"));

    let updated = first_key.set(greetings.clone(), "Salut".to_string());
    assert_eq!(first_key.get_option(&updated).map(String::as_str), Some("Salut"));
    assert_eq!(updated[1], greetings[1]);
}

#[rstest]
fn test_nth_then_key_out_of_bounds(greetings: Vec<Greeting>) {
    let missing_key = nth::<Greeting>(5).compose_lens(Greeting::key_lens());
    assert_eq!(missing_key.get_option(&greetings), None);
    assert_eq!(missing_key.set(greetings.clone(), "Hola".to_string()), greetings);
}

// =============================================================================
// Short-circuit
// =============================================================================

#[rstest]
fn test_optional_then_lens_skips_lens_when_absent() {
    let view_calls = Cell::new(0_usize);
    let rebuild_calls = Cell::new(0_usize);

    let counted_x = FunctionLens::new(
        |point: &Point2D| {
            view_calls.set(view_calls.get() + 1);
            &point.x
        },
        |point: Point2D, x: f64| {
            rebuild_calls.set(rebuild_calls.get() + 1);
            Point2D { x, ..point }
        },
    );
    let marker_x = optional_then_lens(
        Marker::point_lens().compose_prism(Point::point2d_prism()),
        counted_x,
    );

    let solid = Marker {
        label: "solid".to_string(),
        point: Point::Point3D(Point3D {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }),
    };

    assert_eq!(marker_x.get_option(&solid), None);
    assert_eq!(marker_x.set(solid.clone(), 9.0), solid);
    assert_eq!(marker_x.modify(solid.clone(), |x| x + 1.0), solid);
    assert_eq!(view_calls.get(), 0);
    assert_eq!(rebuild_calls.get(), 0);
}

#[rstest]
fn test_optional_then_lens_invokes_lens_when_present(flat_marker: Marker) {
    let view_calls = Cell::new(0_usize);

    let counted_x = FunctionLens::new(
        |point: &Point2D| {
            view_calls.set(view_calls.get() + 1);
            &point.x
        },
        |point: Point2D, x: f64| Point2D { x, ..point },
    );
    let marker_x = optional_then_lens(
        Marker::point_lens().compose_prism(Point::point2d_prism()),
        counted_x,
    );

    assert_eq!(marker_x.get_option(&flat_marker), Some(&1.0));
    assert_eq!(view_calls.get(), 1);
}

// =============================================================================
// Prism round trips through the derived accessors
// =============================================================================

#[rstest]
fn test_derived_prism_review_then_preview() {
    let point3d = Point::point3d_prism();
    let built = point3d.review(Point3D {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    });
    assert_eq!(point3d.preview(&built).map(|point| point.z), Some(1.0));
    assert!(Point::point2d_prism().matching(built).is_unmatched());
}

#[rstest]
fn test_macro_lens_agrees_with_derived_lens(flat_marker: Marker) {
    let by_macro = lens!(Marker, label);
    let derived = Marker::label_lens();
    assert_eq!(by_macro.get(&flat_marker), derived.get(&flat_marker));
}
