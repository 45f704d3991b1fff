//! Lenses: total accessors into product types.
//!
//! A lens pairs a *view*, which borrows one field out of a source, with a
//! *rebuild*, which puts a new value for that field back into the source and
//! hands the whole source back. Every value of the source type has the field,
//! so neither half can fail.
//!
//! [`Lens::focus`] exposes the two halves together: it keeps the source and
//! offers the field for reading, then rebuilds the source once a new value is
//! known. Composition is built on it: the outer lens focuses the intermediate
//! value, the inner lens rewrites it, and the outer focus rebuilds the source.
//!
//! # Laws
//!
//! For every source `s` and values `a`, `b`:
//!
//! ```text
//! lens.set(s, lens.get(&s).clone())          == s                   (get-set)
//! lens.get(&lens.set(s, a))                  == &a                  (set-get)
//! lens.set(lens.set(s, a), b)                == lens.set(s, b)      (set-set)
//! ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Tank { label: String, litres: u32 }
//!
//! let litres = lens!(Tank, litres);
//! let tank = Tank { label: "north".to_string(), litres: 40 };
//!
//! assert_eq!(*litres.get(&tank), 40);
//!
//! let topped_up = litres.modify(tank, |litres| litres + 10);
//! assert_eq!(topped_up, Tank { label: "north".to_string(), litres: 50 });
//! ```

use std::any::type_name;
use std::marker::PhantomData;

use super::optional::{ComposedOptional, LensPrismComposition, Optional};
use super::prism::{Prism, PrismAsOptional};

/// A total accessor focusing one part `A` of a whole `S`.
///
/// Implementors provide [`get`](Lens::get) and [`set`](Lens::set); every
/// other method is derived from those two.
pub trait Lens<S, A> {
    /// Borrows the focused part of `source`.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focused part of `source` with `value`.
    ///
    /// Every part of `source` other than the focus is carried over.
    fn set(&self, source: S, value: A) -> S;

    /// Takes ownership of `source` and keeps it ready to be rebuilt.
    ///
    /// The returned [`Focus`] borrows the focused part through
    /// [`Focus::get`] and produces the new source through
    /// [`Focus::rebuild`] or [`Focus::update`].
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Reading { sensor: &'static str, value: f64 }
    ///
    /// let value = lens!(Reading, value);
    /// let focus = value.focus(Reading { sensor: "t1", value: 20.0 });
    ///
    /// let calibrated = *focus.get() + 0.5;
    /// assert_eq!(focus.rebuild(calibrated), Reading { sensor: "t1", value: 20.5 });
    /// ```
    fn focus(&self, source: S) -> Focus<'_, Self, S, A> {
        Focus {
            lens: self,
            source,
            _marker: PhantomData,
        }
    }

    /// Replaces the focused part with `function` applied to a copy of it.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        self.focus(source).update(|current| function(current.clone()))
    }

    /// Replaces the focused part with `function` applied to a borrow of it.
    ///
    /// Nothing is cloned, so this is the cheaper form when the new value can
    /// be computed from a reference.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Tag { text: String }
    ///
    /// let shouted = lens!(Tag, text).modify_ref(Tag { text: "hi".into() }, |text| text.to_uppercase());
    /// assert_eq!(shouted.text, "HI");
    /// ```
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        self.focus(source).update(function)
    }

    /// Chains `inner` after this lens, reaching `B` inside `A`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Engine { rpm: u32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Car { model: &'static str, engine: Engine }
    ///
    /// let rpm = lens!(Car, engine).compose(lens!(Engine, rpm));
    /// let car = Car { model: "roadster", engine: Engine { rpm: 800 } };
    ///
    /// assert_eq!(*rpm.get(&car), 800);
    /// assert_eq!(rpm.set(car, 3000).engine.rpm, 3000);
    /// ```
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }

    /// Chains a prism after this lens.
    ///
    /// The field is always there but the variant inside it may not be, so
    /// the chain is an [`Optional`]. Setting through it switches the field
    /// to the prism's variant.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, Optional};
    /// use optica::{lens, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Reading { Celsius(f64), Missing }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Sensor { reading: Reading }
    ///
    /// let celsius = lens!(Sensor, reading).compose_prism(prism!(Reading, Celsius));
    ///
    /// assert_eq!(celsius.get_option(&Sensor { reading: Reading::Celsius(21.5) }), Some(&21.5));
    /// assert_eq!(celsius.get_option(&Sensor { reading: Reading::Missing }), None);
    ///
    /// let repaired = celsius.set(Sensor { reading: Reading::Missing }, 19.0);
    /// assert_eq!(repaired.reading, Reading::Celsius(19.0));
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), PrismAsOptional::new(prism))
    }

    /// Chains an Optional after this lens.
    fn compose_optional<B, O>(self, optional: O) -> ComposedOptional<LensAsOptional<Self>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), optional)
    }

    /// Views this lens as an Optional that always finds its focus.
    fn to_optional(self) -> LensAsOptional<Self>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }
}

/// A source held by a lens, waiting for its focused part to be replaced.
///
/// Created by [`Lens::focus`]. Dropping it without rebuilding loses nothing:
/// [`into_source`](Focus::into_source) returns the source untouched.
pub struct Focus<'l, L: ?Sized, S, A> {
    lens: &'l L,
    source: S,
    _marker: PhantomData<fn() -> A>,
}

impl<L, S, A> Focus<'_, L, S, A>
where
    L: Lens<S, A> + ?Sized,
{
    /// Borrows the focused part.
    pub fn get(&self) -> &A {
        self.lens.get(&self.source)
    }

    /// Borrows the whole source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Puts `value` in place of the focused part and returns the source.
    pub fn rebuild(self, value: A) -> S {
        self.lens.set(self.source, value)
    }

    /// Rebuilds with the value `function` computes from the current part.
    pub fn update<F>(self, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let value = function(self.get());
        self.rebuild(value)
    }

    /// Gives the source back unchanged.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<L: ?Sized, S: std::fmt::Debug, A> std::fmt::Debug for Focus<'_, L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Focus")
            .field("source", &self.source)
            .field("focus", &type_name::<A>())
            .finish()
    }
}

/// A lens made of a view function and a rebuild function.
///
/// Both `lens!` and `#[derive(Lenses)]` expand to one of these.
///
/// # Type Parameters
///
/// - `S`: The whole value
/// - `A`: The focused part
/// - `V`: The view function, `Fn(&S) -> &A`
/// - `R`: The rebuild function, `Fn(S, A) -> S`
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Window { width: u32, height: u32 }
///
/// let width = FunctionLens::new(
///     |window: &Window| &window.width,
///     |window: Window, width: u32| Window { width, ..window },
/// );
///
/// assert_eq!(width.set(Window { width: 640, height: 480 }, 800).width, 800);
/// ```
pub struct FunctionLens<S, A, V, R>
where
    V: Fn(&S) -> &A,
    R: Fn(S, A) -> S,
{
    view: V,
    rebuild: R,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, V, R> FunctionLens<S, A, V, R>
where
    V: Fn(&S) -> &A,
    R: Fn(S, A) -> S,
{
    /// Creates a lens from its two halves.
    ///
    /// # Arguments
    ///
    /// * `view` - Borrows the focused part out of a source
    /// * `rebuild` - Takes a source and a new part, and returns the source
    ///   with that part replaced
    ///
    /// # Returns
    ///
    /// A lens that obeys the lens laws exactly when `view` and `rebuild` do.
    /// Nothing here checks that.
    #[must_use]
    pub const fn new(view: V, rebuild: R) -> Self {
        Self {
            view,
            rebuild,
            _marker: PhantomData,
        }
    }
}

impl<S, A, V, R> Lens<S, A> for FunctionLens<S, A, V, R>
where
    V: Fn(&S) -> &A,
    R: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.view)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.rebuild)(source, value)
    }
}

impl<S, A, V, R> Clone for FunctionLens<S, A, V, R>
where
    V: Fn(&S) -> &A + Clone,
    R: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.view.clone(), self.rebuild.clone())
    }
}

impl<S, A, V, R> std::fmt::Debug for FunctionLens<S, A, V, R>
where
    V: Fn(&S) -> &A,
    R: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "FunctionLens<{}, {}>", type_name::<S>(), type_name::<A>())
    }
}

/// An outer lens followed by an inner lens.
///
/// `A` is the value the outer lens focuses and the inner lens starts from.
/// It is fixed when the chain is built and does not show in the
/// `Lens<S, B>` the chain implements.
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains `inner` after `outer`.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        self.outer
            .focus(source)
            .update(|intermediate| self.inner.set(intermediate.clone(), value))
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_tuple("ComposedLens")
            .field(&self.outer)
            .field(&self.inner)
            .finish()
    }
}

/// A lens seen as an Optional.
///
/// The focus is always found. `build` is always `None`, since a part alone
/// says nothing about the rest of its source.
#[derive(Clone, Debug)]
pub struct LensAsOptional<L> {
    lens: L,
}

impl<L> LensAsOptional<L> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }

    /// Returns the wrapped lens.
    pub fn into_inner(self) -> L {
        self.lens
    }
}

impl<S, A, L> Optional<S, A> for LensAsOptional<L>
where
    L: Lens<S, A>,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

/// Builds a [`FunctionLens`] for a named field.
///
/// The first argument is the source type, generic arguments and module path
/// included; the second is the field.
///
/// ```
/// use optica::optics::Lens;
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Slot<T> { id: u8, item: T }
///
/// let item = lens!(Slot<char>, item);
/// let slot = item.set(Slot { id: 3, item: '-' }, 'x');
///
/// assert_eq!(slot, Slot { id: 3, item: 'x' });
/// ```
#[macro_export]
macro_rules! lens {
    ($source:ty, $field:ident $(,)?) => {
        $crate::optics::FunctionLens::new(
            |whole: &$source| &whole.$field,
            |mut whole: $source, part| {
                whole.$field = part;
                whole
            },
        )
    };
}
