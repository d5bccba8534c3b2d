#![forbid(unsafe_code)]

//! Extract coordinates from Google Maps links, DMS strings and decimal pairs, and turn them into
//! Waze navigation links.
//!
//! ```
//! let c = libwazer::extract("https://www.google.com/maps/place/NYC/@40.7128,-74.0060,15z").unwrap();
//! assert_eq!(c.to_string(), "40.712800, -74.006000");
//! assert_eq!(c.to_link(), "https://waze.com/ul?ll=40.7128,-74.006&navigate=yes");
//! ```

pub mod config;
pub mod coordinate;
pub mod dms;
pub mod error;
pub mod grammar;
pub mod link;
pub mod parse;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::Config;
pub use coordinate::Coordinate;
pub use error::{CoordinateError, ExtractError};
pub use grammar::{is_short_link, GrammarKind};
pub use link::build_link;
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// A successful extraction, along with the grammar that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub coordinate: Coordinate,
    pub grammar: GrammarKind,
}

impl Serialize for Match {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = ser.serialize_struct("Match", 4)?;
        st.serialize_field("lat", &self.coordinate.lat())?;
        st.serialize_field("lng", &self.coordinate.lng())?;
        st.serialize_field("grammar", &self.grammar)?;
        st.serialize_field("link", &self.coordinate.to_link())?;
        st.end()
    }
}

/// Runs the configured grammars over some text, in order, and keeps the first coordinate found.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: Config,
}

impl Extractor {
    pub fn new(config: Config) -> Self {
        Extractor { config }
    }

    pub fn extract(&self, text: &str) -> Result<Coordinate, ExtractError> {
        self.extract_match(text).map(|m| m.coordinate)
    }

    pub fn extract_match(&self, text: &str) -> Result<Match, ExtractError> {
        let text = text.trim();
        match self.config.grammars.iter().find_map(|&kind| self.attempt(kind, text)) {
            Some(m) => {
                tracing::debug!(grammar = %m.grammar, coordinate = %m.coordinate, "Extracted coordinates");
                Ok(m)
            }
            None => Err(ExtractError::NotFound),
        }
    }

    fn attempt(&self, kind: GrammarKind, text: &str) -> Option<Match> {
        let coordinate = match kind.grammar().extract(text) {
            Some(c) => c,
            None => {
                tracing::trace!(grammar = %kind, "No match");
                return None;
            }
        };

        if self.config.strict_ranges && !coordinate.in_range() {
            tracing::trace!(grammar = %kind, %coordinate, "Match out of range");
            return None;
        }

        Some(Match {
            coordinate,
            grammar: kind,
        })
    }
}

/// Extract a coordinate from `text` with the default configuration.
pub fn extract(text: &str) -> Result<Coordinate, ExtractError> {
    Extractor::default().extract(text)
}

#[cfg(test)]
mod test {
    use super::{build_link, dms, extract, Config, Extractor, ExtractError, GrammarKind};
    use proptest::prelude::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!((actual.0 - expected.0).abs() < 1e-6, "{:?} != {:?}", actual, expected);
        assert!((actual.1 - expected.1).abs() < 1e-6, "{:?} != {:?}", actual, expected);
    }

    fn latlng(text: &str) -> Result<(f64, f64), ExtractError> {
        extract(text).map(|c| (c.lat(), c.lng()))
    }

    #[test]
    fn test_each_grammar() {
        let extractor = Extractor::default();
        let cases = [
            ("https://maps.google.com/maps?@40.7128,-74.0060,15z", GrammarKind::Url),
            ("https://maps.google.com/?ll=40.7128,-74.0060", GrammarKind::Url),
            ("40°26'46\"N 79°58'56\"W", GrammarKind::Dms),
            ("40.7128, -74.0060", GrammarKind::Decimal),
        ];
        for (text, grammar) in cases.iter() {
            let m = extractor.extract_match(text).unwrap();
            assert_eq!(m.grammar, *grammar, "{}", text);
        }

        assert_eq!(latlng("https://maps.google.com/maps?@40.7128,-74.0060,15z"), Ok((40.7128, -74.006)));
        assert_eq!(latlng("https://maps.google.com/?ll=40.7128,-74.0060"), Ok((40.7128, -74.006)));
        assert_close(
            latlng("40°26'46\"N 79°58'56\"W").unwrap(),
            (
                dms::to_decimal(40, 26, 46., dms::Direction::N),
                dms::to_decimal(79, 58, 56., dms::Direction::W),
            ),
        );
    }

    #[test]
    fn test_dms_is_tried_before_decimal() {
        // The decimal pair further along is never looked at
        let m = Extractor::default()
            .extract_match("40°26'46.5\"N 79°58'56\"W, then 1,2")
            .unwrap();
        assert_eq!(m.grammar, GrammarKind::Dms);
    }

    #[test]
    fn test_failures() {
        assert_eq!(latlng("not a coordinate"), Err(ExtractError::NotFound));
        assert_eq!(latlng("95.0, 10.0"), Err(ExtractError::NotFound));
        assert_eq!(latlng("https://www.google.com/maps/search/Tallinn"), Err(ExtractError::NotFound));

        // Every failure is reported the same way, whatever the input looked like
        assert_eq!(latlng(""), Err(ExtractError::NotFound));
        assert_eq!(latlng(" \n\t"), Err(ExtractError::NotFound));
        assert_eq!(latlng("https://maps.app.goo.gl/7Kbykswh6r89ybX78"), Err(ExtractError::NotFound));
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(latlng("  https://maps.google.com/?ll=40.7128,-74.0060\n"), Ok((40.7128, -74.006)));
    }

    #[test]
    fn test_strict_ranges() {
        let strict = Extractor::new(Config::strict());

        // Out-of-range results from the URL and DMS grammars are accepted by default...
        assert_eq!(latlng("https://www.google.com/maps/@95.5,10,15z"), Ok((95.5, 10.)));
        assert!(extract("100°0'0\"N 10°0'0\"E").is_ok());

        // ...but not in strict mode
        assert_eq!(strict.extract("https://www.google.com/maps/@95.5,10,15z"), Err(ExtractError::NotFound));
        assert_eq!(strict.extract("100°0'0\"N 10°0'0\"E"), Err(ExtractError::NotFound));

        // A strict-mode rejection lets later grammars have a go
        let m = strict.extract_match("!3d95.5!4d10 or 45.5, 10").unwrap();
        assert_eq!(m.grammar, GrammarKind::Decimal);
        assert_eq!((m.coordinate.lat(), m.coordinate.lng()), (45.5, 10.));
    }

    #[test]
    fn test_custom_grammar_order() {
        let config = Config {
            grammars: vec![GrammarKind::Decimal],
            ..Config::default()
        };
        let extractor = Extractor::new(config);
        assert_eq!(
            extractor.extract("40°26'46\"N 79°58'56\"W"),
            Err(ExtractError::NotFound)
        );
        assert_eq!(
            extractor.extract_match("https://maps.google.com/?ll=40.7128,-74.0060").unwrap().grammar,
            GrammarKind::Decimal
        );
    }

    #[test]
    fn test_serialize_match() {
        let m = Extractor::default().extract_match("40.7128, -74.0060").unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "lat": 40.7128,
                "lng": -74.006,
                "grammar": "decimal",
                "link": "https://waze.com/ul?ll=40.7128,-74.006&navigate=yes",
            })
        );
    }

    proptest! {
        #[test]
        fn prop_decimal_pairs_in_range_extract(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let (x, y) = latlng(&format!("{}, {}", lat, lng)).unwrap();
            prop_assert!((x - lat).abs() < 1e-9);
            prop_assert!((y - lng).abs() < 1e-9);
        }

        #[test]
        fn prop_decimal_pairs_out_of_range_fail(
            lat in prop_oneof![90.0001f64..1e6, -1e6f64..-90.0001],
            lng in -180.0f64..=180.0,
        ) {
            prop_assert_eq!(latlng(&format!("{}, {}", lat, lng)), Err(ExtractError::NotFound));
            prop_assert_eq!(latlng(&format!("{}, {}", lng / 2.0, lat * 2.0)), Err(ExtractError::NotFound));
        }

        #[test]
        fn prop_display_then_extract_round_trips(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let c = super::Coordinate::new(lat, lng).unwrap();
            let (x, y) = latlng(&c.to_string()).unwrap();
            prop_assert!((x - lat).abs() < 1e-6);
            prop_assert!((y - lng).abs() < 1e-6);
        }

        #[test]
        fn prop_link_then_extract_round_trips(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert_eq!(latlng(&build_link(lat, lng)), Ok((lat, lng)));
        }

        #[test]
        fn prop_never_panics(text in "\\PC{0,64}") {
            let _ = extract(&text);
        }
    }
}
