//! Optics composition functions.
//!
//! Each function names one cell of the closure table below, plus the two
//! lifts that turn a Lens or a Prism into an Optional. They are the same
//! operations as the `compose*` trait methods, spelled as free functions so a
//! chain can be read left to right without a receiver.
//!
//! ```text
//! left \ right | Lens     | Prism    | Optional
//! -------------+----------+----------+---------
//! Lens         | Lens     | Optional | Optional
//! Prism        | Optional | Prism    | Optional
//! Optional     | Optional | Optional | Optional
//! ```
//!
//! A result is total (Lens) only when both sides are total, and stays a Prism
//! only when both sides are prisms. Anything else may miss its focus and is
//! an Optional.
//!
//! # Example
//!
//! ```
//! use optica::optics::{Optional, compose_lenses, lens_then_prism, optional_then_lens};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Coordinates { x: f64, y: f64 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Location { Known(Coordinates), Unknown }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Ship { name: String, location: Location }
//!
//! let ship_x = optional_then_lens(
//!     lens_then_prism(lens!(Ship, location), prism!(Location, Known)),
//!     lens!(Coordinates, x),
//! );
//!
//! let ship = Ship {
//!     name: "Endurance".to_string(),
//!     location: Location::Known(Coordinates { x: 1.0, y: 2.0 }),
//! };
//! assert_eq!(ship_x.get_option(&ship), Some(&1.0));
//!
//! let lost = Ship { name: "Erebus".to_string(), location: Location::Unknown };
//! assert_eq!(ship_x.get_option(&lost), None);
//! ```

use super::lens::{ComposedLens, Lens, LensAsOptional};
use super::optional::{ComposedOptional, LensPrismComposition, Optional, PrismLensComposition};
use super::prism::{ComposedPrism, Prism, PrismAsOptional};

// =============================================================================
// Lifts
// =============================================================================

/// Lifts a lens into an Optional whose focus is always present.
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, Optional, from_lens};
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 1, y: 2 };
///
/// assert_eq!(from_lens(x_lens.clone()).get_option(&point), Some(x_lens.get(&point)));
/// ```
#[must_use]
pub const fn from_lens<L>(lens: L) -> LensAsOptional<L> {
    LensAsOptional::new(lens)
}

/// Lifts a prism into an Optional present exactly when the prism matches.
#[must_use]
pub const fn from_prism<P>(prism: P) -> PrismAsOptional<P> {
    PrismAsOptional::new(prism)
}

// =============================================================================
// Closure table
// =============================================================================

/// Lens then Lens, yielding a Lens.
pub fn compose_lenses<S, A, B, L1, L2>(first: L1, second: L2) -> ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    first.compose(second)
}

/// Prism then Prism, yielding a Prism.
pub fn compose_prisms<S, A, B, P1, P2>(first: P1, second: P2) -> ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    first.compose(second)
}

/// Lens then Prism, yielding an Optional.
pub fn lens_then_prism<S, A, B, L, P>(lens: L, prism: P) -> LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
{
    lens.compose_prism(prism)
}

/// Prism then Lens, yielding an Optional.
pub fn prism_then_lens<S, A, B, P, L>(prism: P, lens: L) -> PrismLensComposition<P, L, A>
where
    P: Prism<S, A>,
    L: Lens<A, B>,
{
    prism.compose_lens(lens)
}

/// Optional then Optional, yielding an Optional.
pub fn compose_optionals<S, A, B, O1, O2>(first: O1, second: O2) -> ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    first.compose(second)
}

/// Optional then Lens, yielding an Optional.
pub fn optional_then_lens<S, A, B, O, L>(
    optional: O,
    lens: L,
) -> ComposedOptional<O, LensAsOptional<L>, A>
where
    O: Optional<S, A>,
    L: Lens<A, B>,
{
    optional.compose_lens(lens)
}

/// Optional then Prism, yielding an Optional.
pub fn optional_then_prism<S, A, B, O, P>(
    optional: O,
    prism: P,
) -> ComposedOptional<O, PrismAsOptional<P>, A>
where
    O: Optional<S, A>,
    P: Prism<A, B>,
{
    optional.compose_prism(prism)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::Match;
    use crate::{lens, prism};

    #[derive(Clone, PartialEq, Debug)]
    struct Inner {
        value: i32,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Wrapper {
        Full(Inner),
        Blank,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Layer {
        Wrapped(Wrapper),
        Bare(i32),
    }

    #[test]
    fn test_from_prism_preserves_absence() {
        let optional = from_prism(prism!(Wrapper, Full));
        assert_eq!(optional.get_option(&Wrapper::Blank), None);
        assert_eq!(
            optional.get_option(&Wrapper::Full(Inner { value: 1 })),
            Some(&Inner { value: 1 })
        );
    }

    #[test]
    fn test_compose_prisms_rewraps_inner_miss() {
        let composed = compose_prisms(prism!(Layer, Wrapped), prism!(Wrapper, Full));

        let inner_miss = Layer::Wrapped(Wrapper::Blank);
        assert_eq!(
            composed.matching(inner_miss.clone()),
            Match::Unmatched(inner_miss)
        );

        let outer_miss = Layer::Bare(3);
        assert_eq!(
            composed.matching(outer_miss.clone()),
            Match::Unmatched(outer_miss)
        );
    }

    #[test]
    fn test_prism_then_lens_reaches_nested_field() {
        let composed = prism_then_lens(prism!(Wrapper, Full), lens!(Inner, value));
        assert_eq!(
            composed.set(Wrapper::Full(Inner { value: 1 }), 2),
            Wrapper::Full(Inner { value: 2 })
        );
    }

    #[test]
    fn test_optional_then_prism_builds_missing_variant() {
        let composed = optional_then_prism(from_prism(prism!(Layer, Wrapped)), prism!(Wrapper, Full));
        assert_eq!(
            composed.set(Layer::Wrapped(Wrapper::Blank), Inner { value: 4 }),
            Layer::Wrapped(Wrapper::Full(Inner { value: 4 }))
        );
        assert_eq!(
            composed.build(Inner { value: 5 }),
            Some(Layer::Wrapped(Wrapper::Full(Inner { value: 5 })))
        );
    }

    #[test]
    fn test_compose_optionals_matches_compose_prisms() {
        let as_optional = compose_optionals(
            from_prism(prism!(Layer, Wrapped)),
            from_prism(prism!(Wrapper, Full)),
        );
        let as_prism = compose_prisms(prism!(Layer, Wrapped), prism!(Wrapper, Full));

        let value = Inner { value: 9 };
        assert_eq!(
            as_optional.set(Layer::Bare(0), value.clone()),
            as_prism.review(value)
        );
    }
}
