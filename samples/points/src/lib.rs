//! Points sample application.
//!
//! A labelled marker holds either a flat or a solid point. The accessors in
//! [`domain`] reach into it with lenses and prisms composed into optionals,
//! and [`walk`] drives a marker through them while logging each step.

pub mod domain;
pub mod parse;
pub mod walk;

pub use domain::{Marker, Point, Point2D, Point3D};
pub use parse::PointParseError;
