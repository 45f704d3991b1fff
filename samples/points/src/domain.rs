//! Labelled markers holding a flat or a solid point, and their accessors.

use optica::optics::{Lens, Optional};
use optica::{Lenses, Prisms};

/// A point on the plane.
#[derive(Clone, Copy, PartialEq, Debug, Lenses)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// A point in space.
#[derive(Clone, Copy, PartialEq, Debug, Lenses)]
pub struct Point3D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Depth coordinate
    pub z: f64,
}

/// Either a flat or a solid point.
#[derive(Clone, Copy, PartialEq, Debug, Prisms)]
pub enum Point {
    /// A point on the plane
    Point2D(Point2D),
    /// A point in space
    Point3D(Point3D),
}

/// A named point.
#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Marker {
    /// Display name
    pub label: String,
    /// Position
    pub point: Point,
}

impl Marker {
    /// Creates a marker.
    pub fn new(label: impl Into<String>, point: Point) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Focuses the flat point of a marker, if it has one.
pub fn to_point2d() -> impl Optional<Marker, Point2D> + Clone {
    Marker::point_lens().compose_prism(Point::point2d_prism())
}

/// Focuses the solid point of a marker, if it has one.
pub fn to_point3d() -> impl Optional<Marker, Point3D> + Clone {
    Marker::point_lens().compose_prism(Point::point3d_prism())
}

/// Focuses the x coordinate of a flat marker.
pub fn flat_x() -> impl Optional<Marker, f64> + Clone {
    to_point2d().compose_lens(Point2D::x_lens())
}

/// Focuses the x coordinate of a solid marker.
pub fn solid_x() -> impl Optional<Marker, f64> + Clone {
    to_point3d().compose_lens(Point3D::x_lens())
}

/// Moves a marker along the x axis, whichever kind of point it holds.
pub fn shift_x(marker: Marker, delta: f64) -> Marker {
    let marker = flat_x().modify(marker, |x| x + delta);
    solid_x().modify(marker, |x| x + delta)
}

/// Turns a flat marker into a solid one at depth `z`.
///
/// Solid markers are returned unchanged.
pub fn raise(marker: Marker, z: f64) -> Marker {
    match to_point2d().get_option(&marker).copied() {
        Some(Point2D { x, y }) => to_point3d().set(marker, Point3D { x, y, z }),
        None => marker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optica::optics::Prism;
    use rstest::rstest;

    fn flat(x: f64, y: f64) -> Marker {
        Marker::new("flat", Point::Point2D(Point2D { x, y }))
    }

    fn solid(x: f64, y: f64, z: f64) -> Marker {
        Marker::new("solid", Point::Point3D(Point3D { x, y, z }))
    }

    #[rstest]
    fn test_to_point2d_on_flat_marker() {
        assert_eq!(
            to_point2d().get_option(&flat(1.0, 2.0)),
            Some(&Point2D { x: 1.0, y: 2.0 })
        );
        assert_eq!(to_point3d().get_option(&flat(1.0, 2.0)), None);
    }

    #[rstest]
    #[case(flat(1.0, 2.0), flat(3.5, 2.0))]
    #[case(solid(1.0, 2.0, 3.0), solid(3.5, 2.0, 3.0))]
    fn test_shift_x(#[case] marker: Marker, #[case] expected: Marker) {
        assert_eq!(shift_x(marker, 2.5), expected);
    }

    #[rstest]
    fn test_raise_switches_variant() {
        let raised = raise(flat(1.0, 2.0), 9.0);
        assert_eq!(raised.point, Point::Point3D(Point3D { x: 1.0, y: 2.0, z: 9.0 }));
        assert_eq!(raised.label, "flat");
    }

    #[rstest]
    fn test_raise_keeps_solid_marker() {
        let marker = solid(1.0, 2.0, 3.0);
        assert_eq!(raise(marker.clone(), 9.0), marker);
    }

    #[rstest]
    fn test_label_lens() {
        let renamed = Marker::label_lens().set(flat(0.0, 0.0), "home".to_string());
        assert_eq!(renamed.label, "home");
        assert!(Point::point2d_prism().preview(&renamed.point).is_some());
    }
}
