//! A scripted walk of a marker through composed accessors.
//!
//! Each step reads or writes through one accessor and logs what it saw.

use optica::optics::{Lens, Optional};
use tracing::debug;

use crate::domain::{Marker, Point2D, Point3D, raise, shift_x, to_point2d, to_point3d};

/// Depth given to a flat marker when it is raised.
pub const RAISE_DEPTH: f64 = 1.0;

/// What the walk observed.
#[derive(Clone, PartialEq, Debug)]
pub struct Walk {
    /// The flat point, read before any change
    pub flat: Option<Point2D>,
    /// The solid point, read before any change
    pub solid: Option<Point3D>,
    /// The marker after the shift
    pub shifted: Marker,
    /// The shifted marker after being raised
    pub raised: Marker,
}

/// Reads both alternatives of `marker`, shifts it along x, relabels it and
/// raises it into a solid point.
pub fn walk(marker: &Marker, shift: f64) -> Walk {
    let flat = to_point2d().get_option(marker).copied();
    debug!(label = %marker.label, ?flat, "read flat point");

    let solid = to_point3d().get_option(marker).copied();
    debug!(label = %marker.label, ?solid, "read solid point");

    let shifted = shift_x(marker.clone(), shift);
    debug!(point = ?shifted.point, shift, "shifted along x");

    let relabelled = Marker::label_lens().modify_ref(shifted.clone(), |label| format!("{label}'"));
    debug!(label = %relabelled.label, "relabelled");

    let raised = raise(relabelled, RAISE_DEPTH);
    debug!(point = ?raised.point, "raised");

    Walk {
        flat,
        solid,
        shifted,
        raised,
    }
}
