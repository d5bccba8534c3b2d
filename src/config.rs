//! Extractor configuration.

use crate::grammar::GrammarKind;
use serde::{Deserialize, Serialize};

/// Settings for an [`crate::Extractor`].
///
/// Deserializes from a partial object: missing fields take their default value, so `{}` and
/// `{"strict_ranges": true}` are both valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Apply the latitude/longitude bounds to every grammar instead of only the decimal pair
    /// grammar.
    pub strict_ranges: bool,

    /// Grammars to try, in priority order.
    pub grammars: Vec<GrammarKind>,
}

impl Config {
    pub fn strict() -> Self {
        Config {
            strict_ranges: true,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict_ranges: false,
            grammars: GrammarKind::ALL.to_vec(),
        }
    }
}
