use crate::types::{Coordinate, Number, Units};

/// Length of the fixed-width `DDMM[N|S]DDDMM[E|W]` token
const COORD_LEN: usize = 11;

/// Parse a compact `DDMM[N|S]DDDMM[E|W]` coordinate token
///
/// Returns `None` if a digit or hemisphere letter is missing or the
/// minutes/degrees are out of range.
pub fn parse_rear_coord(text: &str) -> Option<Coordinate> {
    let text = text.trim();
    if text.len() != COORD_LEN || !text.is_ascii() {
        return None;
    }

    let latitude = parse_angle(&text[0..2], &text[2..4], 90)?;
    let latitude = match &text[4..5] {
        "N" => latitude,
        "S" => -latitude,
        _ => return None,
    };

    let longitude = parse_angle(&text[5..8], &text[8..10], 180)?;
    let longitude = match &text[10..11] {
        "E" => longitude,
        "W" => -longitude,
        _ => return None,
    };

    let coord = Coordinate::new(latitude, longitude, text);
    coord.is_valid().then_some(coord)
}

/// Parse a Q-line tail: a coordinate token followed by an optional radius
///
/// `4038N07346W005` yields the coordinate and a radius of `5`. A tail with
/// anything but digits after the coordinate is rejected as a whole.
pub fn parse_coord_radius(text: &str, units: &Units) -> Option<(Coordinate, Option<Number>)> {
    let text = text.trim();
    if text.len() < COORD_LEN || !text.is_ascii() {
        return None;
    }

    let (coord, radius) = text.split_at(COORD_LEN);
    let coord = parse_rear_coord(coord)?;
    if radius.is_empty() {
        return Some((coord, None));
    }

    let radius = units.make_number(radius)?;
    Some((coord, Some(radius)))
}

/// Convert degree and minute digit groups to decimal degrees
fn parse_angle(degrees: &str, minutes: &str, max_degrees: u32) -> Option<f64> {
    if !degrees.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let degrees: u32 = degrees.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 || degrees > max_degrees || (degrees == max_degrees && minutes > 0) {
        return None;
    }

    Some(degrees as f64 + minutes as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn rear_coord_hemispheres() {
        let cases = [
            ("5126N00036W", 51.0 + 26.0 / 60.0, -(36.0 / 60.0)),
            ("1234S14321E", -(12.0 + 34.0 / 60.0), 143.0 + 21.0 / 60.0),
            ("2413N01234W", 24.0 + 13.0 / 60.0, -(12.0 + 34.0 / 60.0)),
        ];

        for (text, lat, lon) in cases {
            let coord = assert_some!(parse_rear_coord(text));
            assert_close(coord.latitude, lat);
            assert_close(coord.longitude, lon);
            assert_eq!(coord.raw, text);
        }
    }

    #[test]
    fn rear_coord_round_trip() {
        for text in ["5126N00036W", "1234S14321E", "0000S00000W", "9000N18000E", "4537N00843E"] {
            let coord = assert_some!(parse_rear_coord(text));
            assert_eq!(coord.to_compact(), text);
        }
    }

    #[test]
    fn bad_rear_coord() {
        assert_none!(parse_rear_coord("latNlongE"));
        assert_none!(parse_rear_coord("5126X00036W"));
        assert_none!(parse_rear_coord("5126N00036Q"));
        assert_none!(parse_rear_coord("5166N00036W"));
        assert_none!(parse_rear_coord("9130N00036W"));
        assert_none!(parse_rear_coord("5126N18100W"));
        assert_none!(parse_rear_coord("5126N0036W"));
        assert_none!(parse_rear_coord("5126N00036WÄ"));
    }

    #[test]
    fn coord_with_radius() {
        let units = Units::default();
        let (coord, radius) = assert_some!(parse_coord_radius("4038N07346W005", &units));
        assert_eq!(coord.raw, "4038N07346W");
        assert_eq!(radius, Some(Number::new("005", 5, "five")));
    }

    #[test]
    fn coord_without_radius() {
        let units = Units::default();
        let (coord, radius) = assert_some!(parse_coord_radius("5125N00028W", &units));
        assert_eq!(coord.raw, "5125N00028W");
        assert_none!(radius);
    }

    #[test]
    fn coord_with_bad_radius() {
        let units = Units::default();
        assert_none!(parse_coord_radius("4038N07346W0X5", &units));
        assert_none!(parse_coord_radius("", &units));
    }
}
