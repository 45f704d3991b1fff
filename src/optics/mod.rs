//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics allow you to focus on specific parts of a data
//! structure, enabling type-safe reading and updating of deeply nested fields.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens  <: Optional
//! Prism <: Optional
//! Lens + Prism = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on a variant of an enum (preview/review/matching access)
//! - [`Optional`]: Focus on a value that may or may not exist
//!
//! Leaves are built from plain functions ([`FunctionLens`], [`FunctionPrism`]),
//! from the [`lens!`](crate::lens) and [`prism!`](crate::prism) macros, or from
//! `#[derive(Lenses)]` / `#[derive(Prisms)]`. Composites are ordinary generic
//! structs, so the intermediate type of a chain never shows up in the
//! accessor type a caller names, and a composed call costs the calls of its
//! parts.
//!
//! # Example with Lens
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(*person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use optica::optics::{Match, Prism};
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
//! assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Some(&5.0));
//! assert_eq!(circle_prism.preview(&Shape::Rectangle(3.0, 4.0)), None);
//! assert_eq!(circle_prism.review(10.0), Shape::Circle(10.0));
//! assert!(circle_prism.matching(Shape::Rectangle(1.0, 1.0)).is_unmatched());
//! ```
//!
//! # Example with Optional (Lens + Prism)
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
//! let some_container = Container { maybe_value: MyOption::Some(42) };
//! assert_eq!(optional.get_option(&some_container), Some(&42));
//!
//! let none_container = Container { maybe_value: MyOption::None };
//! assert_eq!(optional.get_option(&none_container), None);
//! ```
//!
//! # Lens Laws
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Prism Laws
//!
//! 1. **MatchBuild Law**: `prism.preview(&prism.review(value)) == Some(&value)`
//! 2. **NoMatchIdentity Law**: an unmatched source is handed back unchanged,
//!    and `prism.out_of(Match::Unmatched(source)) == source`
//!
//! # Optional Laws
//!
//! When the element is present:
//!
//! 1. **`GetOptionSet` Law**: setting back the current value yields the original
//! 2. **`SetGetOption` Law**: setting then getting yields the set value

mod lens;
mod matching;
mod optics_compose;
mod optional;
mod prism;
mod standard_optics;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::Focus;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::LensAsOptional;

// Re-export all prism-related types and traits
pub use matching::Match;
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::PrismAsOptional;

// Re-export all optional-related types and traits
pub use optional::ComposedOptional;
pub use optional::LensPrismComposition;
pub use optional::Optional;
pub use optional::PrismLensComposition;

// Re-export the composition functions
pub use optics_compose::compose_lenses;
pub use optics_compose::compose_optionals;
pub use optics_compose::compose_prisms;
pub use optics_compose::from_lens;
pub use optics_compose::from_prism;
pub use optics_compose::lens_then_prism;
pub use optics_compose::optional_then_lens;
pub use optics_compose::optional_then_prism;
pub use optics_compose::prism_then_lens;

// Re-export standard optics
pub use standard_optics::Nth;
pub use standard_optics::err;
pub use standard_optics::first;
pub use standard_optics::identity_lens;
pub use standard_optics::nth;
pub use standard_optics::ok;
pub use standard_optics::second;
pub use standard_optics::some;
