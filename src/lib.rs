//! # optica
//!
//! Composable accessors for immutable data.
//!
//! ## Overview
//!
//! An accessor focuses on a sub-part of an aggregate value, reads it, and
//! rebuilds the aggregate with a new value in its place. Accessors chain, so a
//! deeply nested field or variant is reached without hand-written traversal
//! code. Three kinds are provided:
//!
//! - **Lens**: a field of a product type, always present
//! - **Prism**: an alternative of a sum type, present only for one variant
//! - **Optional**: a focus that may be absent, the common ground of the two
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Lenses)]` and `#[derive(Prisms)]` (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`optics::Match`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Point {
//!     Flat(f64),
//!     Solid(f64),
//! }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Marker { point: Point }
//!
//! let flat = lens!(Marker, point).compose_prism(prism!(Point, Flat));
//!
//! let marker = Marker { point: Point::Flat(1.5) };
//! assert_eq!(flat.get_option(&marker), Some(&1.5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the accessor traits, their function-backed constructors and
/// the composition functions.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use optica_derive::{Lenses, Prisms};
}

pub mod optics;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};
