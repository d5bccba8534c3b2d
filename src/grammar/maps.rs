//! Coordinates embedded in Google Maps URLs.

use crate::{
    coordinate::Coordinate,
    grammar::{Grammar, GrammarKind},
    parse::{self, RawPair},
};
use nom::{
    bytes::complete::tag,
    character::complete::char,
    combinator::opt,
    error::context,
    sequence::{preceded, separated_pair, tuple},
};
use url::Url;

/// Hosts that serve shortened map links. These redirect to a full URL, but carry no
/// coordinates themselves.
const SHORT_LINK_MARKERS: [&str; 2] = ["maps.app.goo.gl", "goo.gl/maps"];

/// Returns `true` if `text` looks like a shortened Google Maps link, which has to be expanded
/// (by following its redirect) before coordinates can be extracted from it.
pub fn is_short_link(text: &str) -> bool {
    SHORT_LINK_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Coordinates are taken, in order of preference, from:
///
/// 1. an `@lat,lng` segment, as in `/maps/place/Foo/@40.7128,-74.0060,15z`;
/// 2. a `!3dlat!4dlng` pair from the `data=` blob of a place URL;
/// 3. a `/search/lat,lng` path, where the longitude may carry a leading `+`;
/// 4. the `ll`, `q` and `continue` query parameters, if the text parses as a URL.
///
/// None of these forms are checked against the planetary bounds.
pub struct UrlGrammar;

impl UrlGrammar {
    fn number_pair(i: parse::Input) -> parse::Result<RawPair> {
        let (i, pair) = separated_pair(parse::signed_decimal, char(','), parse::signed_decimal)(i)?;
        Ok((i, RawPair::new(pair)))
    }

    /// `@NUM,NUM`
    fn at_pair(i: parse::Input) -> parse::Result<RawPair> {
        context("@lat,lng segment", preceded(char('@'), Self::number_pair))(i)
    }

    /// `!3dNUM!4dNUM`
    fn place_data_pair(i: parse::Input) -> parse::Result<RawPair> {
        let (i, (_, lat, _, lng)) = context(
            "!3d/!4d place data",
            tuple((
                tag("!3d"),
                parse::signed_decimal,
                tag("!4d"),
                parse::signed_decimal,
            )),
        )(i)?;
        Ok((i, RawPair::new((lat, lng))))
    }

    /// `/search/NUM,NUM` or `/search/NUM,+NUM`
    fn search_path_pair(i: parse::Input) -> parse::Result<RawPair> {
        let (i, (_, lat, _, _, lng)) = context(
            "/search/ path",
            tuple((
                tag("/search/"),
                parse::signed_decimal,
                char(','),
                opt(char('+')),
                parse::signed_decimal,
            )),
        )(i)?;
        Ok((i, RawPair::new((lat, lng))))
    }

    fn from_patterns(text: &str) -> Option<Coordinate> {
        let patterns: [fn(parse::Input) -> parse::Result<RawPair>; 3] =
            [Self::at_pair, Self::place_data_pair, Self::search_path_pair];

        patterns
            .iter()
            .find_map(|pattern| parse::search(text, *pattern)?.to_coordinate())
    }

    fn from_query(text: &str) -> Option<Coordinate> {
        let url = match Url::parse(text) {
            Ok(url) => url,
            Err(e) => {
                tracing::trace!(%e, "Input is not an absolute URL");
                return None;
            }
        };

        query_param(&url, "ll")
            .and_then(|ll| Self::from_ll(&ll))
            .or_else(|| {
                let q = query_param(&url, "q")?;
                parse::search(&q, Self::number_pair)?.to_coordinate()
            })
            .or_else(|| {
                // Consent interstitials wrap the real maps URL
                let target = query_param(&url, "continue")?;
                Self::from_url(&target)
            })
    }

    /// The `ll` parameter must hold exactly two comma-separated numbers.
    fn from_ll(ll: &str) -> Option<Coordinate> {
        let fields: Vec<&str> = ll.split(',').collect();
        match fields.as_slice() {
            [lat, lng] => RawPair::new((*lat, *lng)).to_coordinate(),
            _ => None,
        }
    }

    fn from_url(text: &str) -> Option<Coordinate> {
        Self::from_patterns(text).or_else(|| Self::from_query(text))
    }
}

/// The decoded value of the first `key` query parameter, if it's present and non-empty.
fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

impl Grammar for UrlGrammar {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Url
    }

    fn extract(&self, text: &str) -> Option<Coordinate> {
        Self::from_url(text)
    }
}
