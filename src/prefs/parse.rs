//! Free-text parsing rules shared by every preference front end.
//!
//! All functions are total: malformed input resolves to a documented default
//! instead of an error, so nothing unparsed reaches the ranking engine.

use super::types::{RideType, UNBOUNDED_BUDGET};

/// Displacement range used when the rider gives no usable engine preference
pub const DEFAULT_ENGINE_RANGE: (f64, f64) = (0.0, 5000.0);

/// Bike types the prompt accepts; anything else means "any type"
const KNOWN_BIKE_TYPES: &[&str] = &["sport", "sports", "commuter", "adventure", "cruiser"];

/// Parse an integer, accepting decimal text and truncating it ("170.8" -> 170).
pub fn parse_int(s: &str) -> Option<i64> {
    parse_float(s)
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
}

pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Fill in whichever budget bound is missing.
///
/// Neither given: the full range. Only a max: min is half of it. Only a min:
/// max is one and a half times it.
pub fn resolve_budget(min: Option<i64>, max: Option<i64>) -> (f64, f64) {
    match (min, max) {
        (None, None) => (0.0, UNBOUNDED_BUDGET),
        (None, Some(max)) => (((max as f64) * 0.5).max(0.0).trunc(), max as f64),
        (Some(min), None) => (min as f64, ((min as f64) * 1.5).trunc()),
        (Some(min), Some(max)) => (min as f64, max as f64),
    }
}

/// Parse an engine displacement preference.
///
/// Accepted forms (case-insensitive, "cc" ignored):
/// - "125-200": inclusive range
/// - "below 125" or "<125": upper bound only
/// - "above 200" or ">200": lower bound only
/// - "150": exactly that displacement
///
/// Anything else, including empty input, resolves to `DEFAULT_ENGINE_RANGE`.
pub fn parse_engine_range(s: &str) -> (Option<f64>, Option<f64>) {
    let text = s.trim().to_lowercase().replace("cc", "");

    let (min, max) = if text.trim().is_empty() {
        (None, None)
    } else if text.contains('-') {
        let mut parts = text.split('-');
        match (
            parts.next().and_then(|p| p.trim().parse::<i64>().ok()),
            parts.next().and_then(|p| p.trim().parse::<i64>().ok()),
        ) {
            (Some(low), Some(high)) => (Some(low as f64), Some(high as f64)),
            _ => (None, None),
        }
    } else if text.contains("below") || text.contains('<') {
        (None, digits(&text))
    } else if text.contains("above") || text.contains('>') {
        (digits(&text), None)
    } else {
        let value = digits(&text);
        (value, value)
    };

    if min.is_none() && max.is_none() {
        let (default_min, default_max) = DEFAULT_ENGINE_RANGE;
        (Some(default_min), Some(default_max))
    } else {
        (min, max)
    }
}

/// Collect every ASCII digit in `s` into one number ("below 1,000" -> 1000).
fn digits(s: &str) -> Option<f64> {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().ok().map(|v| v as f64)
}

/// Yes/no answer: empty keeps the default, otherwise anything starting with 'y' is yes.
pub fn parse_yes_no(s: &str, default: bool) -> bool {
    let s = s.trim().to_lowercase();
    match s.chars().next() {
        None => default,
        Some(c) => c == 'y',
    }
}

pub fn parse_ride_type(s: &str) -> RideType {
    match s.trim().to_lowercase().as_str() {
        "city" => RideType::City,
        "highway" => RideType::Highway,
        _ => RideType::Both,
    }
}

/// Known bike types only; "sports" is folded into "sport" so it still
/// substring-matches a "sport" category.
pub fn parse_bike_type(s: &str) -> Option<String> {
    let s = s.trim().to_lowercase();
    if !KNOWN_BIKE_TYPES.contains(&s.as_str()) {
        return None;
    }
    if s == "sports" {
        Some("sport".to_string())
    } else {
        Some(s)
    }
}

pub fn parse_brand(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_lowercase())
    }
}
