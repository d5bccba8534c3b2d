//! Plain decimal pairs such as `40.7128, -74.0060`.

use crate::{
    coordinate::Coordinate,
    grammar::{Grammar, GrammarKind},
    parse::{self, RawPair},
};
use nom::{character::complete::char, error::context, sequence::tuple};

/// The most permissive grammar, and the only one that always enforces the latitude/longitude
/// bounds. An out-of-range pair is a failed match.
pub struct DecimalGrammar;

impl DecimalGrammar {
    /// `NUM,NUM` with optional whitespace after the comma.
    fn decimal_pair(i: parse::Input) -> parse::Result<RawPair> {
        let (i, (lat, _, _, lng)) = context(
            "Decimal pair",
            tuple((
                parse::signed_decimal,
                char(','),
                parse::whitespace0,
                parse::signed_decimal,
            )),
        )(i)?;
        Ok((i, RawPair::new((lat, lng))))
    }
}

impl Grammar for DecimalGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Decimal
    }

    fn extract(&self, text: &str) -> Option<Coordinate> {
        let pair = parse::search(text, Self::decimal_pair)?;
        let (lat, lng) = pair.to_f64()?;
        match Coordinate::new(lat, lng) {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::trace!(%e, "Rejected decimal pair");
                None
            }
        }
    }
}
