//! Prism optics for focusing on enum variants.
//!
//! A Prism is a partial accessor: a source may or may not be built from the
//! focused alternative. Matching hands back either the alternative's payload
//! or the untouched source, and reviewing builds the alternative from a
//! payload alone, since an alternative fully determines the shape of its
//! source.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **MatchBuild Law**: Reviewing then previewing yields the original value.
//!    ```text
//!    prism.preview(&prism.review(value)) == Some(&value)
//!    ```
//!
//! 2. **NoMatchIdentity Law**: An unmatched source passes through unchanged.
//!    ```text
//!    if prism.matching(source) == Unmatched(rest) then
//!        rest == source && prism.out_of(Unmatched(rest)) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Prism, FunctionPrism};
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! let circle = Shape::Circle(5.0);
//! assert_eq!(circle_prism.preview(&circle), Some(&5.0));
//!
//! let rect = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(circle_prism.preview(&rect), None);
//!
//! let constructed = circle_prism.review(10.0);
//! assert_eq!(constructed, Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::lens::{Lens, LensAsOptional};
use super::matching::Match;
use super::optional::{ComposedOptional, Optional, PrismLensComposition};

/// A Prism focuses on a single variant of an enum.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the value inside the variant)
///
/// # Laws
///
/// 1. **MatchBuild Law**: `prism.preview(&prism.review(value)) == Some(&value)`
/// 2. **NoMatchIdentity Law**: `prism.matching(source)` is either `Matched(_)`
///    or `Unmatched(source)`, and `prism.out_of(Match::Unmatched(source)) == source`
pub trait Prism<S, A> {
    /// Attempts to borrow the payload from the source.
    ///
    /// Returns `Some` if the source is the expected variant, `None` otherwise.
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Builds the source for the focused variant from a payload.
    fn review(&self, value: A) -> S;

    /// Matches an owned source against the focused variant.
    ///
    /// Returns `Match::Matched(payload)` for the focused variant and
    /// `Match::Unmatched(source)`, with the source untouched, otherwise.
    fn matching(&self, source: S) -> Match<A, S>;

    /// Converts a match outcome back into a source.
    ///
    /// A matched payload is reviewed into its variant; an unmatched source is
    /// returned as it is.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Match, Prism};
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// assert_eq!(circle_prism.out_of(Match::Matched(1.0)), Shape::Circle(1.0));
    /// assert_eq!(
    ///     circle_prism.out_of(Match::Unmatched(Shape::Square(2.0))),
    ///     Shape::Square(2.0)
    /// );
    /// ```
    fn out_of(&self, outcome: Match<A, S>) -> S {
        match outcome {
            Match::Matched(value) => self.review(value),
            Match::Unmatched(source) => source,
        }
    }

    /// Extracts the payload from the source, taking ownership.
    fn preview_owned(&self, source: S) -> Option<A> {
        self.matching(source).matched()
    }

    /// Modifies the payload if the source is the expected variant.
    ///
    /// Returns `Some` with the rebuilt source if the variant matches,
    /// `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let doubled = circle_prism.modify_option(Shape::Circle(5.0), |r| r * 2.0);
    /// assert_eq!(doubled, Some(Shape::Circle(10.0)));
    ///
    /// let result = circle_prism.modify_option(Shape::Square(3.0), |r| r * 2.0);
    /// assert!(result.is_none());
    /// ```
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview_owned(source)
            .map(|value| self.review(function(value)))
    }

    /// Modifies the payload if the source is the expected variant, or returns
    /// the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let square = Shape::Square(3.0);
    /// let unchanged = circle_prism.modify_or_identity(square.clone(), |r| r * 2.0);
    /// assert_eq!(unchanged, square);
    /// ```
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.out_of(self.matching(source).map(function))
    }

    /// Composes this prism with another prism to focus on a nested variant.
    ///
    /// Both legs report a miss the same way, so the composite stays a Prism.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outer { Inner(Inner), Empty }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Inner { Value(i32), Nothing }
    ///
    /// let outer_value = prism!(Outer, Inner).compose(prism!(Inner, Value));
    ///
    /// let data = Outer::Inner(Inner::Value(42));
    /// assert_eq!(outer_value.preview(&data), Some(&42));
    /// assert_eq!(outer_value.review(7), Outer::Inner(Inner::Value(7)));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with a lens, yielding an Optional.
    ///
    /// The variant may be missing, in which case the lens is never reached.
    fn compose_lens<B, L>(self, lens: L) -> PrismLensComposition<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), LensAsOptional::new(lens))
    }

    /// Composes this prism with an Optional, yielding an Optional.
    fn compose_optional<B, O>(self, optional: O) -> ComposedOptional<PrismAsOptional<Self>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), optional)
    }

    /// Lifts this prism into an Optional.
    fn to_optional(self) -> PrismAsOptional<Self>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }
}

/// A prism implemented using preview, review, and matching functions.
///
/// This is the most common way to create a prism. The `prism!` macro and
/// `#[derive(Prisms)]` generate a `FunctionPrism` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `Pr`: The preview function type
/// - `Re`: The review function type
/// - `Ma`: The matching function type
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionPrism, Match, Prism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
/// }
///
/// let circle_prism = FunctionPrism::new(
///     |shape: &Shape| match shape {
///         Shape::Circle(radius) => Some(radius),
///         _ => None,
///     },
///     |radius: f64| Shape::Circle(radius),
///     |shape: Shape| match shape {
///         Shape::Circle(radius) => Match::Matched(radius),
///         other => Match::Unmatched(other),
///     },
/// );
///
/// let circle = Shape::Circle(5.0);
/// assert_eq!(circle_prism.preview(&circle), Some(&5.0));
/// ```
pub struct FunctionPrism<S, A, Pr, Re, Ma>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    Ma: Fn(S) -> Match<A, S>,
{
    preview_function: Pr,
    review_function: Re,
    matching_function: Ma,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Pr, Re, Ma> FunctionPrism<S, A, Pr, Re, Ma>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    Ma: Fn(S) -> Match<A, S>,
{
    /// Creates a new `FunctionPrism` from preview, review, and matching functions.
    ///
    /// # Arguments
    ///
    /// * `preview_function` - Borrows the payload when the variant matches
    /// * `review_function` - Builds the variant from a payload
    /// * `matching_function` - Takes the payload out of a matching source, or
    ///   hands a non-matching source back unchanged
    ///
    /// # Returns
    ///
    /// A prism that obeys the prism laws when the three functions agree on
    /// which sources match
    #[must_use]
    pub const fn new(preview_function: Pr, review_function: Re, matching_function: Ma) -> Self {
        Self {
            preview_function,
            review_function,
            matching_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, Ma> Prism<S, A> for FunctionPrism<S, A, Pr, Re, Ma>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    Ma: Fn(S) -> Match<A, S>,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn matching(&self, source: S) -> Match<A, S> {
        (self.matching_function)(source)
    }
}

impl<S, A, Pr, Re, Ma> Clone for FunctionPrism<S, A, Pr, Re, Ma>
where
    Pr: Fn(&S) -> Option<&A> + Clone,
    Re: Fn(A) -> S + Clone,
    Ma: Fn(S) -> Match<A, S> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            matching_function: self.matching_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, Ma> std::fmt::Debug for FunctionPrism<S, A, Pr, Re, Ma>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    Ma: Fn(S) -> Match<A, S>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// Matching runs the outer prism first. A miss there is a miss of the
/// composite on the original source. A miss of the inner prism rebuilds the
/// source from the unmatched intermediate through the outer prism, so the
/// source handed back is the one that came in.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `A`: The intermediate type (target of P1, source of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism from an outer and an inner prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
    A: 'static,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(intermediate))
    }

    fn review(&self, value: B) -> S {
        let intermediate = self.second.review(value);
        self.first.review(intermediate)
    }

    fn matching(&self, source: S) -> Match<B, S> {
        match self.first.matching(source) {
            Match::Matched(intermediate) => self
                .second
                .matching(intermediate)
                .map_unmatched(|intermediate| self.first.review(intermediate)),
            Match::Unmatched(source) => Match::Unmatched(source),
        }
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism lifted into an Optional.
///
/// Setting through it always builds the focused variant, whatever the source
/// was before, and `build` always succeeds.
#[derive(Clone, Debug)]
pub struct PrismAsOptional<P> {
    prism: P,
}

impl<P> PrismAsOptional<P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }

    /// Returns the wrapped prism.
    pub fn into_inner(self) -> P {
        self.prism
    }
}

impl<S, A, P> Optional<S, A> for PrismAsOptional<P>
where
    P: Prism<S, A>,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A> {
        self.prism.preview(source)
    }

    fn set(&self, _source: S, value: A) -> S {
        self.prism.review(value)
    }

    fn build(&self, value: A) -> Option<S> {
        Some(self.prism.review(value))
    }
}

/// Creates a prism for an enum variant.
///
/// This macro generates a `FunctionPrism` that focuses on the specified
/// single-field tuple variant of the given enum type.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Limitations
///
/// Only tuple variants holding exactly one value are supported. For other
/// shapes, wrap the payload in a struct or use `FunctionPrism::new` directly.
///
/// # Example
///
/// ```
/// use optica::optics::Prism;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = prism!(MyOption<i32>, Some);
///
/// assert_eq!(some_prism.preview(&MyOption::Some(42)), Some(&42));
/// assert_eq!(some_prism.preview(&MyOption::None), None);
/// assert_eq!(some_prism.review(100), MyOption::Some(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                $enum_type::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::optics::Match::Matched(value),
                #[allow(unreachable_patterns)]
                other => $crate::optics::Match::Unmatched(other),
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match *source {
                $enum_type::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::optics::Match::Matched(value),
                #[allow(unreachable_patterns)]
                other => $crate::optics::Match::Unmatched(other),
            },
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                <$enum_type>::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => $crate::optics::Match::Matched(value),
                #[allow(unreachable_patterns)]
                other => $crate::optics::Match::Unmatched(other),
            },
        )
    };
}
