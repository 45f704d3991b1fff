//! The outcome of matching a source against a prism.
//!
//! A prism either finds its alternative inside a source, or hands the whole
//! source back untouched. [`Match`] keeps those two outcomes apart from
//! genuine errors: an unmatched source is a normal result, not a failure.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Match, Prism};
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.matching(Shape::Circle(2.0)), Match::Matched(2.0));
//! assert_eq!(
//!     circle_prism.matching(Shape::Square(3.0)),
//!     Match::Unmatched(Shape::Square(3.0))
//! );
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of matching a source `S` against an alternative carrying `A`.
///
/// - `Matched(A)`: the source was built from the alternative; holds its payload
/// - `Unmatched(S)`: the source is some other alternative; holds the source unchanged
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Match<A, S> {
    /// The source was built from the focused alternative.
    Matched(A),
    /// The source is a different alternative, returned as it was.
    Unmatched(S),
}

impl<A, S> Match<A, S> {
    /// Returns `true` if this is `Matched`.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Returns `true` if this is `Unmatched`.
    #[must_use]
    pub const fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched(_))
    }

    /// Converts into the matched payload, discarding an unmatched source.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Match;
    ///
    /// let matched: Match<i32, String> = Match::Matched(7);
    /// assert_eq!(matched.matched(), Some(7));
    ///
    /// let unmatched: Match<i32, String> = Match::Unmatched("rest".to_string());
    /// assert_eq!(unmatched.matched(), None);
    /// ```
    #[must_use]
    pub fn matched(self) -> Option<A> {
        match self {
            Self::Matched(value) => Some(value),
            Self::Unmatched(_) => None,
        }
    }

    /// Converts into the unmatched source, discarding a matched payload.
    #[must_use]
    pub fn unmatched(self) -> Option<S> {
        match self {
            Self::Matched(_) => None,
            Self::Unmatched(source) => Some(source),
        }
    }

    /// Borrows the contents.
    #[must_use]
    pub const fn as_ref(&self) -> Match<&A, &S> {
        match self {
            Self::Matched(value) => Match::Matched(value),
            Self::Unmatched(source) => Match::Unmatched(source),
        }
    }

    /// Applies a function to the matched payload, leaving an unmatched source alone.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Match;
    ///
    /// let matched: Match<i32, ()> = Match::Matched(20);
    /// assert_eq!(matched.map(|value| value + 1), Match::Matched(21));
    /// ```
    pub fn map<B, F>(self, function: F) -> Match<B, S>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Matched(value) => Match::Matched(function(value)),
            Self::Unmatched(source) => Match::Unmatched(source),
        }
    }

    /// Applies a function to the unmatched source, leaving a matched payload alone.
    pub fn map_unmatched<T, F>(self, function: F) -> Match<A, T>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            Self::Matched(value) => Match::Matched(value),
            Self::Unmatched(source) => Match::Unmatched(function(source)),
        }
    }

    /// Returns the matched payload, or computes one from the unmatched source.
    pub fn unwrap_or_else<F>(self, function: F) -> A
    where
        F: FnOnce(S) -> A,
    {
        match self {
            Self::Matched(value) => value,
            Self::Unmatched(source) => function(source),
        }
    }
}

impl<A> Match<A, A> {
    /// Returns whichever value is held when both sides share a type.
    #[must_use]
    pub fn into_inner(self) -> A {
        match self {
            Self::Matched(value) | Self::Unmatched(value) => value,
        }
    }
}
