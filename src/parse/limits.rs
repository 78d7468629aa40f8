use crate::types::{Number, Units};
use once_cell::sync::Lazy;
use regex::Regex;

static FLIGHT_LEVEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^FL\s*(\d{1,3})$").expect("valid flight level regex"));

static HEIGHT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*(?:FT|M)(?:\s+(?:AMSL|AGL|MSL|SFC|GND))?$").expect("valid height regex")
});

/// Decode an `F)` or `G)` vertical limit
///
/// Handles `SFC`, `GND`, `FL100`, `3000FT AMSL` and bare numbers. Anything
/// else returns `None` and is left to the caller as unparsed text.
pub fn parse_limit(text: &str, units: &Units) -> Option<Number> {
    let text = text.trim();
    match text {
        "SFC" => return Some(Number::new(text, 0, "surface")),
        "GND" => return Some(Number::new(text, 0, "ground")),
        _ => {}
    }

    if let Some(captures) = FLIGHT_LEVEL_REGEX.captures(text) {
        let level: i32 = captures[1].parse().ok()?;
        let spoken = format!("flight level {}", units.spoken_digits(level));
        return Some(Number::new(text, level, spoken));
    }

    if let Some(captures) = HEIGHT_REGEX.captures(text) {
        let height: i32 = captures[1].parse().ok()?;
        return Some(Number::new(text, height, units.spoken_digits(height)));
    }

    units.make_number(text)
}
