//! Degrees/minutes/seconds pairs such as `31°44'49.8"N 35°01'46.6"E`.

use crate::{
    coordinate::Coordinate,
    dms::{self, Direction},
    grammar::{Grammar, GrammarKind},
    parse,
};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, one_of},
    combinator::map_res,
    error::context,
    sequence::tuple,
};
use std::convert::TryFrom;

/// The raw text of a single `D°M'S"H` group.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RawDms<'a> {
    degrees: &'a str,
    minutes: &'a str,
    seconds: &'a str,
    direction: Direction,
}

impl RawDms<'_> {
    fn to_decimal(&self) -> Option<f64> {
        let degrees = self.degrees.parse::<u32>().ok()?;
        let minutes = self.minutes.parse::<u32>().ok()?;
        let seconds = parse::parse_finite(self.seconds)?;
        Some(dms::to_decimal(degrees, minutes, seconds, self.direction))
    }
}

/// The first group is taken as the latitude and the second as the longitude, whatever their
/// direction letters say. Results aren't checked against the planetary bounds.
pub struct DmsGrammar;

impl DmsGrammar {
    fn direction(i: parse::Input) -> parse::Result<Direction> {
        context("DMS direction", map_res(one_of("NSEW"), Direction::try_from))(i)
    }

    fn group(i: parse::Input) -> parse::Result<RawDms> {
        let (i, (degrees, _, minutes, _, seconds, _, direction)) = context(
            "DMS group",
            tuple((
                digit1,
                char('°'),
                digit1,
                char('\''),
                take_while1(|c: char| c.is_ascii_digit() || c == '.'),
                char('"'),
                Self::direction,
            )),
        )(i)?;

        let raw = RawDms {
            degrees,
            minutes,
            seconds,
            direction,
        };
        Ok((i, raw))
    }

    fn pair(i: parse::Input) -> parse::Result<(RawDms, RawDms)> {
        let (i, (lat, _, lng)) = context(
            "DMS pair",
            tuple((Self::group, parse::whitespace0, Self::group)),
        )(i)?;
        Ok((i, (lat, lng)))
    }
}

impl Grammar for DmsGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Dms
    }

    fn extract(&self, text: &str) -> Option<Coordinate> {
        let (lat, lng) = parse::search(text, Self::pair)?;
        Coordinate::from_finite(lat.to_decimal()?, lng.to_decimal()?)
    }
}
