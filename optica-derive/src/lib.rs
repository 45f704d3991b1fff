//! Procedural macros that write optica accessors for your types.
//!
//! optica never looks inside a type on its own. A lens needs a view and a
//! rebuild function, a prism needs preview, review and matching functions.
//! These derives generate those functions once per field or variant and
//! return them as ordinary `optica::optics` values.
//!
//! | Derive | Input | Generates |
//! |---|---|---|
//! | [`Lenses`] | struct with named fields | `{field}_lens()` for every field |
//! | [`Prisms`] | enum | `{variant}_prism()` for every unit or single-field variant |
//!
//! The macros expand to paths under `::optica`, so use them through the
//! `optica` crate (its `derive` feature re-exports both).
//!
//! ```rust,ignore
//! use optica::optics::{Lens, Optional};
//! use optica::{Lenses, Prisms};
//!
//! #[derive(Clone, Debug, PartialEq, Prisms)]
//! enum Reading {
//!     Celsius(f64),
//!     Offline,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Sensor {
//!     id: u32,
//!     reading: Reading,
//! }
//!
//! let celsius = Sensor::reading_lens().compose_prism(Reading::celsius_prism());
//! let sensor = Sensor { id: 7, reading: Reading::Offline };
//!
//! assert_eq!(celsius.get_option(&sensor), None);
//! assert_eq!(celsius.set(sensor, 18.5).reading, Reading::Celsius(18.5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Generates one lens constructor per named field.
///
/// A field `level: T` on `Gauge` becomes
///
/// ```rust,ignore
/// impl Gauge {
///     pub fn level_lens() -> impl optica::optics::Lens<Gauge, T> + Clone {
///         optica::optics::FunctionLens::new(/* view */, /* rebuild */)
///     }
/// }
/// ```
///
/// The rebuild moves the source and overwrites one field, so the struct needs
/// no trait bounds of its own. Composing the lens with another one needs the
/// field type to be `Clone`.
///
/// Generic structs keep their parameters, and the constructor is called on
/// the concrete type, as in `Slot::<char>::item_lens()`.
///
/// # Errors
///
/// Tuple structs, unit structs, enums and unions are rejected with a compile
/// error pointing at the type.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Generates one prism constructor per variant that carries at most one
/// value.
///
/// The constructor is named after the variant in snake case with a `_prism`
/// suffix: `Celsius` gives `celsius_prism()`, `Point2D` gives
/// `point2d_prism()`.
///
/// | Variant | Focus type |
/// |---|---|
/// | `Offline` | `()` |
/// | `Celsius(f64)` | `f64` |
/// | `Fault { code: u16 }` | `u16` |
///
/// ```rust,ignore
/// use optica::optics::Prism;
/// use optica::Prisms;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Reading {
///     Celsius(f64),
///     Fault { code: u16 },
///     Offline,
/// }
///
/// assert_eq!(Reading::fault_prism().preview(&Reading::Fault { code: 3 }), Some(&3));
/// assert_eq!(Reading::offline_prism().review(()), Reading::Offline);
/// assert!(Reading::celsius_prism().matching(Reading::Offline).is_unmatched());
/// ```
///
/// # Errors
///
/// A variant with two or more fields has no single stored value a prism could
/// borrow, so it is a compile error. Gather its fields into a struct and carry
/// that struct instead. Deriving on a struct or union is also an error.
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
