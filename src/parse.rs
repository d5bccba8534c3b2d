//! Shared nom primitives for the coordinate grammars.

use crate::coordinate::Coordinate;
use nom::error::VerboseError;

pub type Input<'a> = &'a str;
pub type Result<'a, O> = nom::IResult<Input<'a>, O, VerboseError<Input<'a>>>;

/// Recognize a signed decimal number: an optional minus sign, at least one ASCII digit, then an
/// optional dot followed by any number of fractional digits. Returns the matched text without
/// converting it.
pub fn signed_decimal(i: Input) -> Result<&str> {
    use nom::{
        character::complete::{char, digit0, digit1},
        combinator::{opt, recognize},
        error::context,
        sequence::tuple,
    };

    context(
        "Signed decimal",
        recognize(tuple((opt(char('-')), digit1, opt(char('.')), digit0))),
    )(i)
}

/// Consume any amount of whitespace, including none.
pub fn whitespace0(i: Input) -> Result<&str> {
    use nom::bytes::complete::take_while;
    take_while(|c: char| c.is_whitespace())(i)
}

/// Run `parser` at every character boundary of `i`, left to right, and return the output of the
/// first position where it succeeds.
///
/// Grammars only ever look at the leftmost match. Callers convert the returned captures
/// afterwards; if that conversion fails, the attempt fails rather than resuming the search.
pub fn search<'a, O, F>(i: Input<'a>, mut parser: F) -> Option<O>
where
    F: FnMut(Input<'a>) -> Result<'a, O>,
{
    i.char_indices()
        .find_map(|(offset, _)| parser(&i[offset..]).ok().map(|(_, out)| out))
}

/// Parse a number captured by one of the grammars. Surrounding whitespace is ignored and the
/// result must be finite.
pub fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// The raw text of a latitude/longitude pair, as captured by a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPair<'a> {
    pub lat: &'a str,
    pub lng: &'a str,
}

impl<'a> RawPair<'a> {
    pub fn new((lat, lng): (&'a str, &'a str)) -> Self {
        RawPair { lat, lng }
    }

    /// Convert both halves to finite floating-point values.
    pub fn to_f64(&self) -> Option<(f64, f64)> {
        Some((parse_finite(self.lat)?, parse_finite(self.lng)?))
    }

    /// Convert the pair into a coordinate, checking only that both values are finite.
    pub fn to_coordinate(&self) -> Option<Coordinate> {
        let (lat, lng) = self.to_f64()?;
        Coordinate::from_finite(lat, lng)
    }
}
