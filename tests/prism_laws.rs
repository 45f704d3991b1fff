//! Property-based tests for Prism laws.
//!
//! - **MatchBuild Law**: `prism.preview(&prism.review(value)) == Some(&value)`
//! - **NoMatchIdentity Law**: matching a source of another alternative hands
//!   it back unchanged, and `out_of` restores it.
//! - **MatchingAgreesWithPreview**: `matching` succeeds exactly when
//!   `preview` does, and with the same value.

use optica::optics::{FunctionPrism, Match, Prism, err, ok, some};
use optica::prism;
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point2D {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Point3D {
    x: i32,
    y: i32,
    z: i32,
}

#[derive(Clone, PartialEq, Debug)]
enum Point {
    Flat(Point2D),
    Solid(Point3D),
}

#[derive(Clone, PartialEq, Debug)]
enum Reading {
    Value(Option<i64>),
    Offline,
}

fn point_strategy() -> impl Strategy<Value = Point> {
    prop_oneof![
        (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point::Flat(Point2D { x, y })),
        (any::<i32>(), any::<i32>(), any::<i32>())
            .prop_map(|(x, y, z)| Point::Solid(Point3D { x, y, z })),
    ]
}

fn reading_strategy() -> impl Strategy<Value = Reading> {
    prop_oneof![
        proptest::option::of(any::<i64>()).prop_map(Reading::Value),
        Just(Reading::Offline),
    ]
}

// =============================================================================
// Leaf Prism Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_match_build_law(x in any::<i32>(), y in any::<i32>()) {
        let flat = prism!(Point, Flat);
        let value = Point2D { x, y };
        let built = flat.review(value.clone());
        prop_assert_eq!(flat.preview(&built), Some(&value));
    }

    #[test]
    fn prop_no_match_identity_law(point in point_strategy()) {
        let flat = prism!(Point, Flat);
        if flat.preview(&point).is_none() {
            prop_assert_eq!(flat.matching(point.clone()), Match::Unmatched(point.clone()));
            prop_assert_eq!(flat.out_of(flat.matching(point.clone())), point);
        }
    }

    #[test]
    fn prop_matching_agrees_with_preview(point in point_strategy()) {
        let solid = prism!(Point, Solid);
        let previewed = solid.preview(&point).cloned();
        prop_assert_eq!(solid.matching(point).matched(), previewed);
    }

    #[test]
    fn prop_out_of_after_matching_is_identity(point in point_strategy()) {
        let flat = prism!(Point, Flat);
        prop_assert_eq!(flat.out_of(flat.matching(point.clone())), point);
    }

    #[test]
    fn prop_function_prism_laws(value in any::<i64>(), source in proptest::option::of(any::<i64>())) {
        let present = FunctionPrism::new(
            |source: &Option<i64>| source.as_ref(),
            |value: i64| Some(value),
            |source: Option<i64>| match source {
                Some(value) => Match::Matched(value),
                None => Match::Unmatched(None),
            },
        );

        let built = present.review(value);
        prop_assert_eq!(present.preview(&built), Some(&value));
        prop_assert_eq!(present.out_of(present.matching(source)), source);
    }

    #[test]
    fn prop_result_prisms_partition(source in any::<Result<u8, i8>>()) {
        let ok_prism = ok::<u8, i8>();
        let err_prism = err::<u8, i8>();
        prop_assert!(ok_prism.preview(&source).is_some() != err_prism.preview(&source).is_some());
    }
}

// =============================================================================
// Composed Prism Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_match_build_law(value in any::<i64>()) {
        let reading_value = prism!(Reading, Value).compose(some::<i64>());
        let built = reading_value.review(value);
        prop_assert_eq!(&built, &Reading::Value(Some(value)));
        prop_assert_eq!(reading_value.preview(&built), Some(&value));
    }

    #[test]
    fn prop_composed_no_match_identity_law(reading in reading_strategy()) {
        let reading_value = prism!(Reading, Value).compose(some::<i64>());
        match reading_value.matching(reading.clone()) {
            Match::Matched(value) => {
                prop_assert_eq!(reading, Reading::Value(Some(value)));
            }
            Match::Unmatched(rest) => {
                prop_assert_eq!(reading_value.preview(&reading), None);
                prop_assert_eq!(rest, reading);
            }
        }
    }

    #[test]
    fn prop_composed_preview_is_sequential(reading in reading_strategy()) {
        let outer = prism!(Reading, Value);
        let inner = some::<i64>();
        let expected = outer.preview(&reading).and_then(|option| inner.preview(option));
        let composed = prism!(Reading, Value).compose(some::<i64>());
        prop_assert_eq!(composed.preview(&reading), expected);
    }

    #[test]
    fn prop_modify_or_identity_leaves_other_alternatives(reading in reading_strategy()) {
        let reading_value = prism!(Reading, Value).compose(some::<i64>());
        let modified = reading_value.modify_or_identity(reading.clone(), |value| value.wrapping_add(1));
        match reading {
            Reading::Value(Some(value)) => {
                prop_assert_eq!(modified, Reading::Value(Some(value.wrapping_add(1))));
            }
            other => {
                prop_assert_eq!(modified, other);
            }
        }
    }
}
