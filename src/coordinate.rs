//! The decimal-degree coordinate produced by every grammar.

use crate::{error::CoordinateError, link};
use std::{fmt, ops::RangeInclusive};

/// A latitude/longitude pair in decimal degrees.
///
/// Both values are always finite. Coordinates built with [`Coordinate::new`] also lie within the
/// planetary bounds; the URL and DMS grammars don't check bounds unless the extractor runs in
/// strict mode, so use [`Coordinate::in_range`] when that matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
    pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let c = Self::from_finite(lat, lng).ok_or(CoordinateError::NotFinite)?;
        if c.in_range() {
            Ok(c)
        } else {
            Err(CoordinateError::OutOfRange { lat, lng })
        }
    }

    /// Build a coordinate without checking the planetary bounds.
    pub(crate) fn from_finite(lat: f64, lng: f64) -> Option<Self> {
        if lat.is_finite() && lng.is_finite() {
            Some(Coordinate { lat, lng })
        } else {
            None
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns `true` if the latitude is within ±90 and the longitude within ±180.
    pub fn in_range(&self) -> bool {
        Self::LATITUDE_RANGE.contains(&self.lat) && Self::LONGITUDE_RANGE.contains(&self.lng)
    }

    /// The Waze navigation link for this coordinate.
    pub fn to_link(&self) -> String {
        link::build_link(self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}
