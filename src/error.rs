//! Error types.

use thiserror::Error;

/// Returned by [`crate::extract`] when no grammar matched.
///
/// Malformed URLs and numbers inside individual grammars never show up here; they only make that
/// grammar step aside for the next one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Could not extract valid coordinates from input")]
    NotFound,
}

/// Errors raised when constructing a [`crate::Coordinate`] directly.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("Coordinates must be finite numbers")]
    NotFinite,

    #[error("Coordinates out of range: {lat}, {lng} (latitude must be within ±90, longitude within ±180)")]
    OutOfRange { lat: f64, lng: f64 },
}
