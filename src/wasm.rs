//! WebAssembly bindings for the `libwazer` crate.

use crate::{is_short_link, link, Config, Coordinate, Extractor};
use wasm_bindgen::prelude::*;

/// Read the optional configuration object passed in from JavaScript. `undefined` and `null` select
/// the defaults.
fn config_from_js(config: &JsValue) -> Result<Config, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(Config::default());
    }
    config
        .into_serde()
        .map_err(|e| JsValue::from_str(&format!("Invalid extractor configuration: {}", e)))
}

/// Extract coordinates from a Google Maps link, DMS string or decimal pair. On success, returns an
/// object of the form `{lat, lng, grammar, link}`.
#[wasm_bindgen]
pub fn extract_coordinates(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    if text.trim().is_empty() {
        return Err(JsValue::from_str("Please enter a Google Maps link or coordinates"));
    }

    let extractor = Extractor::new(config_from_js(&config)?);
    match extractor.extract_match(text) {
        Ok(m) => match JsValue::from_serde(&m) {
            Ok(v) => Ok(v),
            Err(_) => Err(JsValue::from_str("Unable to convert result to JSON!")),
        },
        Err(_) if is_short_link(text) => Err(JsValue::from_str(
            "Short links must be opened in a browser first; paste the full Google Maps link instead",
        )),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

/// Build the Waze navigation link for a coordinate.
#[wasm_bindgen]
pub fn waze_link(lat: f64, lng: f64) -> String {
    link::build_link(lat, lng)
}

/// Format a coordinate for display, with six decimal places.
#[wasm_bindgen]
pub fn format_coordinates(lat: f64, lng: f64) -> Result<String, JsValue> {
    match Coordinate::new(lat, lng) {
        Ok(c) => Ok(c.to_string()),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}
