//! The text grammars that coordinates can be extracted with.

mod decimal;
mod dms;
mod maps;

pub use self::decimal::DecimalGrammar;
pub use self::dms::DmsGrammar;
pub use self::maps::{is_short_link, UrlGrammar};
use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait Grammar {
    /// Which grammar this is, for configuration and logging.
    fn kind(&self) -> GrammarKind;

    /// Try to extract a coordinate from `text`. Returns `None` if the grammar doesn't match, or
    /// if it matches but the captured numbers don't convert.
    fn extract(&self, text: &str) -> Option<Coordinate>;
}

/// Identifies one of the supported grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarKind {
    /// Coordinates embedded in a Google Maps URL.
    Url,
    /// A degrees/minutes/seconds pair such as `40°26'46"N 79°58'56"W`.
    Dms,
    /// A plain `lat, lng` pair of decimal numbers.
    Decimal,
}

impl GrammarKind {
    /// All grammars, most specific first. Decimal pairs come last since DMS strings and URLs
    /// contain substrings that look like them.
    pub const ALL: [GrammarKind; 3] = [GrammarKind::Url, GrammarKind::Dms, GrammarKind::Decimal];

    pub fn grammar(self) -> &'static dyn Grammar {
        match self {
            GrammarKind::Url => &UrlGrammar,
            GrammarKind::Dms => &DmsGrammar,
            GrammarKind::Decimal => &DecimalGrammar,
        }
    }
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarKind::Url => write!(f, "url"),
            GrammarKind::Dms => write!(f, "dms"),
            GrammarKind::Decimal => write!(f, "decimal"),
        }
    }
}
