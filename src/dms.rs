//! Utilities for dealing with degrees/minutes/seconds coordinates.

use std::convert::TryFrom;

/// Compass direction suffix of a DMS coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl Direction {
    /// Southern and western coordinates are negative in decimal degrees.
    pub fn is_negative(self) -> bool {
        matches!(self, Direction::S | Direction::W)
    }
}

impl TryFrom<char> for Direction {
    type Error = &'static str;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Direction::N),
            'S' => Ok(Direction::S),
            'E' => Ok(Direction::E),
            'W' => Ok(Direction::W),
            _ => Err("Direction must be one of N, S, E or W"),
        }
    }
}

/// Convert a coordinate from degrees/minutes/seconds to decimal degrees. No range clamping is
/// applied.
pub fn to_decimal(degrees: u32, minutes: u32, seconds: f64, direction: Direction) -> f64 {
    let decimal = degrees as f64 + minutes as f64 / 60. + seconds / 3600.;
    if direction.is_negative() {
        -decimal
    } else {
        decimal
    }
}
