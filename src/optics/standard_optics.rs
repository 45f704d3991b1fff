//! Standard optics that are commonly used.
//!
//! This module provides pre-defined accessors over standard library types.

use std::marker::PhantomData;

use super::{FunctionLens, FunctionPrism, Lens, Match, Optional, Prism};

/// Creates a lens that focuses on the whole value.
///
/// The identity lens is the neutral element of lens composition.
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, identity_lens};
///
/// let identity = identity_lens::<i32>();
///
/// assert_eq!(*identity.get(&42), 42);
/// assert_eq!(identity.set(42, 7), 7);
/// ```
#[must_use]
pub fn identity_lens<T>() -> impl Lens<T, T> + Clone {
    FunctionLens::new(|source: &T| source, |_source: T, value: T| value)
}

/// Creates a lens focusing on the first element of a pair.
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, first};
///
/// let first_lens = first::<i32, String>();
/// let pair = (1, "one".to_string());
///
/// assert_eq!(*first_lens.get(&pair), 1);
/// assert_eq!(first_lens.set(pair, 2), (2, "one".to_string()));
/// ```
#[must_use]
pub fn first<A, B>() -> impl Lens<(A, B), A> + Clone {
    FunctionLens::new(
        |source: &(A, B)| &source.0,
        |(_, second): (A, B), value: A| (value, second),
    )
}

/// Creates a lens focusing on the second element of a pair.
#[must_use]
pub fn second<A, B>() -> impl Lens<(A, B), B> + Clone {
    FunctionLens::new(
        |source: &(A, B)| &source.1,
        |(first, _): (A, B), value: B| (first, value),
    )
}

/// Creates a prism focusing on the `Some` variant of an `Option`.
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, some};
///
/// let some_prism = some::<i32>();
///
/// assert_eq!(some_prism.preview(&Some(3)), Some(&3));
/// assert_eq!(some_prism.preview(&None), None);
/// assert_eq!(some_prism.review(5), Some(5));
/// ```
#[must_use]
pub fn some<T>() -> impl Prism<Option<T>, T> + Clone {
    FunctionPrism::new(
        |source: &Option<T>| source.as_ref(),
        |value: T| Some(value),
        |source: Option<T>| match source {
            Some(value) => Match::Matched(value),
            None => Match::Unmatched(None),
        },
    )
}

/// Creates a prism focusing on the `Ok` variant of a `Result`.
#[must_use]
pub fn ok<T, E>() -> impl Prism<Result<T, E>, T> + Clone {
    FunctionPrism::new(
        |source: &Result<T, E>| source.as_ref().ok(),
        |value: T| Ok(value),
        |source: Result<T, E>| match source {
            Ok(value) => Match::Matched(value),
            Err(error) => Match::Unmatched(Err(error)),
        },
    )
}

/// Creates a prism focusing on the `Err` variant of a `Result`.
///
/// # Example
///
/// ```
/// use optica::optics::{Match, Prism, err};
///
/// let err_prism = err::<i32, String>();
///
/// assert_eq!(err_prism.preview(&Err("boom".to_string())), Some(&"boom".to_string()));
/// assert_eq!(err_prism.matching(Ok(1)), Match::Unmatched(Ok(1)));
/// ```
#[must_use]
pub fn err<T, E>() -> impl Prism<Result<T, E>, E> + Clone {
    FunctionPrism::new(
        |source: &Result<T, E>| source.as_ref().err(),
        |error: E| Err(error),
        |source: Result<T, E>| match source {
            Err(error) => Match::Matched(error),
            Ok(value) => Match::Unmatched(Ok(value)),
        },
    )
}

/// An Optional for `Vec<T>` that focuses on an element at a specific index.
///
/// If the index is out of bounds, `get_option` returns `None` and `set` is a
/// no-op. An element cannot be built without the rest of its vector, so
/// `build` always returns `None`.
///
/// # Examples
///
/// ```
/// use optica::optics::{Optional, nth};
///
/// let third = nth::<i32>(2);
/// let numbers = vec![1, 2, 3, 4, 5];
///
/// assert_eq!(third.get_option(&numbers), Some(&3));
/// assert_eq!(third.set(numbers, 30), vec![1, 2, 30, 4, 5]);
///
/// assert_eq!(nth::<i32>(10).get_option(&vec![1]), None);
/// ```
///
/// # Index then field
///
/// A vector index can miss, so chaining `nth` with a field lens gives an
/// Optional. Reading the first greeting's key yields `Some("Hello")` rather
/// than a bare `"Hello"`, and setting it leaves every other element as it
/// was:
///
/// ```
/// use optica::optics::{Optional, nth};
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Greeting { key: String, language: &'static str }
///
/// let greetings = vec![
///     Greeting { key: "Hello".to_string(), language: "en" },
///     Greeting { key: "Bonjour".to_string(), language: "fr" },
/// ];
/// let first_key = nth::<Greeting>(0).compose_lens(lens!(Greeting, key));
///
/// assert_eq!(first_key.get_option(&greetings).map(String::as_str), Some("Hello"));
///
/// let updated = first_key.set(greetings.clone(), "Salut".to_string());
/// assert_eq!(first_key.get_option(&updated).map(String::as_str), Some("Salut"));
/// assert_eq!(updated[1], greetings[1]);
///
/// assert_eq!(nth::<Greeting>(5).compose_lens(lens!(Greeting, key)).get_option(&updated), None);
/// ```
#[derive(Debug)]
pub struct Nth<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Nth<T> {
    /// Creates a new `Nth` for the given index.
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based position of the focused element
    ///
    /// # Returns
    ///
    /// An Optional that finds its focus only in vectors longer than `index`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Returns the focused index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for Nth<T> {
    fn clone(&self) -> Self {
        Self::new(self.index)
    }
}

impl<T> Optional<Vec<T>, T> for Nth<T> {
    fn get_option<'a>(&self, source: &'a Vec<T>) -> Option<&'a T> {
        source.get(self.index)
    }

    fn set(&self, mut source: Vec<T>, value: T) -> Vec<T> {
        if let Some(slot) = source.get_mut(self.index) {
            *slot = value;
        }
        source
    }
}

/// Creates an Optional focusing on the element at `index` of a `Vec`.
#[must_use]
pub const fn nth<T>(index: usize) -> Nth<T> {
    Nth::new(index)
}
