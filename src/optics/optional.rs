//! Optional optics for focusing on elements that may or may not exist.
//!
//! An Optional is the general accessor: a Lens is an Optional whose focus is
//! always present, a Prism is an Optional whose focus is present for one
//! variant. Mixing the two in a chain yields an Optional.
//!
//! # Laws
//!
//! Every Optional must satisfy two laws (when the element is present):
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if optional.get_option(&source).is_some() then
//!        optional.set(source.clone(), optional.get_option(&source).unwrap().clone()) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.get_option(&source).is_some() then
//!        optional.get_option(&optional.set(source, value)) == Some(&value)
//!    ```
//!
//! # Setting an absent focus
//!
//! Setting into an absent focus makes it present whenever the missing part
//! of the path can be rebuilt from the new value alone, which is the case for
//! steps contributed by prisms. A lens followed by a prism therefore switches
//! the variant held by the field:
//!
//! ```
//! use optica::optics::{Lens, Optional};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum MyOption<T> { Some(T), None }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { maybe_value: MyOption<i32> }
//!
//! let optional = lens!(Container, maybe_value).compose_prism(prism!(MyOption<i32>, Some));
//!
//! let none_container = Container { maybe_value: MyOption::None };
//! assert_eq!(optional.get_option(&none_container), None);
//!
//! let updated = optional.set(none_container, 42);
//! assert_eq!(updated.maybe_value, MyOption::Some(42));
//! ```
//!
//! When a step cannot be rebuilt (a lens behind a missing variant), `set`
//! leaves the source unchanged.

use std::marker::PhantomData;

use super::lens::{Lens, LensAsOptional};
use super::prism::{Prism, PrismAsOptional};

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
///
/// # Laws
///
/// 1. **`GetOptionSet` Law**: If present, getting and setting back yields the original.
/// 2. **`SetGetOption` Law**: If present, setting then getting yields the set value.
pub trait Optional<S, A> {
    /// Attempts to get a reference to the focused element.
    ///
    /// Returns `Some` if the element is present, `None` otherwise.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Sets the focused element to a new value.
    ///
    /// If the element was not present it is made present when the path
    /// allows it (see the module documentation); otherwise the source is
    /// returned unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Builds a whole source from the focused element alone.
    ///
    /// Succeeds only when every step of the path can be rebuilt without an
    /// existing source, which holds for prism steps and never for lens steps.
    fn build(&self, _value: A) -> Option<S> {
        None
    }

    /// Rebuilds the source from an optional focus.
    ///
    /// `Some(value)` behaves like [`set`](Optional::set); `None` returns the
    /// source unchanged.
    fn rebuild(&self, source: S, value: Option<A>) -> S {
        match value {
            Some(value) => self.set(source, value),
            None => source,
        }
    }

    /// Modifies the focused element if present.
    ///
    /// Returns `Some` with the modified source if the element is present,
    /// `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let maybe_value = self.get_option(&source).cloned();
        maybe_value.map(|value| {
            let new_value = function(value);
            self.set(source, new_value)
        })
    }

    /// Modifies the focused element if present, otherwise returns the
    /// original source.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        self.modify_ref(source, |value| function(value.clone()))
    }

    /// Like [`modify`](Optional::modify), computing the new element from a
    /// borrow of the current one.
    ///
    /// `function` is only called when the element is present.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = self.get_option(&source).map(function);
        match new_value {
            Some(value) => self.set(source, value),
            None => source,
        }
    }

    /// Checks if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with another optional.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, Optional};
    /// use optica::optics::nth;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inventory { items: Vec<Vec<u32>> }
    ///
    /// let items = lens!(Inventory, items).to_optional();
    /// let first_row_second = items.compose(nth(0)).compose(nth(1));
    ///
    /// let inventory = Inventory { items: vec![vec![1, 2], vec![3]] };
    /// assert_eq!(first_row_second.get_option(&inventory), Some(&2));
    /// ```
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Composes this optional with a lens.
    ///
    /// When the focus of this optional is absent the lens is never invoked.
    fn compose_lens<B, L>(self, lens: L) -> ComposedOptional<Self, LensAsOptional<L>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedOptional::new(self, LensAsOptional::new(lens))
    }

    /// Composes this optional with a prism.
    fn compose_prism<B, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, PrismAsOptional::new(prism))
    }
}

/// The result of composing a Lens with a Prism.
pub type LensPrismComposition<L, P, A> = ComposedOptional<LensAsOptional<L>, PrismAsOptional<P>, A>;

/// The result of composing a Prism with a Lens.
pub type PrismLensComposition<P, L, A> = ComposedOptional<PrismAsOptional<P>, LensAsOptional<L>, A>;

/// The result of composing two Optionals.
///
/// Every mixed composition of lenses and prisms is one of these, with the
/// leaves lifted through [`LensAsOptional`] and [`PrismAsOptional`].
///
/// # Type Parameters
///
/// - `O1`: The type of the outer optional
/// - `O2`: The type of the inner optional
/// - `A`: The intermediate type (target of O1, source of O2)
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<fn() -> A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new `ComposedOptional` from an outer and an inner optional.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer optional, focusing the intermediate value
    /// * `second` - The inner optional, focusing inside the intermediate value
    ///
    /// # Returns
    ///
    /// An Optional whose focus is present only when both parts find theirs
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
    A: Clone + 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_option(&source).cloned() {
            Some(intermediate) => {
                let new_intermediate = self.second.set(intermediate, value);
                self.first.set(source, new_intermediate)
            }
            None => match self.second.build(value) {
                Some(new_intermediate) => self.first.set(source, new_intermediate),
                None => source,
            },
        }
    }

    fn build(&self, value: B) -> Option<S> {
        self.second
            .build(value)
            .and_then(|intermediate| self.first.build(intermediate))
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
