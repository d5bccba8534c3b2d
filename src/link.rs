//! Waze deep-link generation.

pub const WAZE_BASE_URL: &str = "https://waze.com/ul";

/// Build a Waze link that starts navigation to `lat`, `lng` as soon as it's opened. Both values
/// are written in their shortest round-trip form, e.g. `-74.006` rather than `-74.006000`.
pub fn build_link(lat: f64, lng: f64) -> String {
    format!("{}?ll={},{}&navigate=yes", WAZE_BASE_URL, lat, lng)
}
