//! Parsing points from the command line.

use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::{Point, Point2D, Point3D};

/// Error raised when a point cannot be read from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PointParseError {
    /// The text held neither two nor three coordinates.
    #[error("expected 2 or 3 comma-separated coordinates, found {count}")]
    WrongArity {
        /// Number of coordinates found
        count: usize,
    },
    /// One coordinate was not a number.
    #[error("coordinate {position} ({text:?}) is not a number")]
    InvalidCoordinate {
        /// Zero-based position of the coordinate
        position: usize,
        /// The offending text
        text: String,
        /// Underlying float parse failure
        #[source]
        source: ParseFloatError,
    },
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Reads `x,y` as a flat point and `x,y,z` as a solid one.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let coordinates = text
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(position, part)| {
                part.parse::<f64>()
                    .map_err(|source| PointParseError::InvalidCoordinate {
                        position,
                        text: part.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match coordinates.as_slice() {
            &[x, y] => Ok(Self::Point2D(Point2D { x, y })),
            &[x, y, z] => Ok(Self::Point3D(Point3D { x, y, z })),
            other => Err(PointParseError::WrongArity { count: other.len() }),
        }
    }
}
