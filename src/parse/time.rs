use crate::types::{PERMANENT, Timestamp};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Timezone abbreviations and their UTC offsets in minutes
const TIMEZONES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("WET", 0),
    ("BST", 60),
    ("CET", 60),
    ("CEST", 120),
    ("EET", 120),
    ("EEST", 180),
    ("MSK", 180),
    ("IST", 330),
    ("JST", 540),
    ("KST", 540),
    ("AWST", 480),
    ("ACST", 570),
    ("AEST", 600),
    ("AEDT", 660),
    ("NZST", 720),
    ("NZDT", 780),
    ("NST", -210),
    ("NDT", -150),
    ("AST", -240),
    ("ADT", -180),
    ("EST", -300),
    ("EDT", -240),
    ("CST", -360),
    ("CDT", -300),
    ("MST", -420),
    ("MDT", -360),
    ("PST", -480),
    ("PDT", -420),
    ("AKST", -540),
    ("AKDT", -480),
    ("HST", -600),
    ("SST", -660),
    ("CHST", 600),
];

/// Resolve a timezone abbreviation like `EST` to its fixed UTC offset
pub fn timezone_offset(abbreviation: &str) -> Option<FixedOffset> {
    let (_, minutes) = TIMEZONES
        .iter()
        .find(|(name, _)| *name == abbreviation)?;
    FixedOffset::east_opt(minutes * 60)
}

/// Split `2205241452EST` into its digit run and trailing timezone token
///
/// The token is `None` if absent. Returns `None` overall if something other
/// than a 2-4 letter uppercase token follows the digits.
fn split_timezone(text: &str) -> Option<(&str, Option<&str>)> {
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, rest) = text.split_at(digits_end);

    let rest = rest.trim();
    if rest.is_empty() {
        return Some((digits, None));
    }

    let is_abbreviation =
        (2..=4).contains(&rest.len()) && rest.bytes().all(|b| b.is_ascii_uppercase());
    is_abbreviation.then_some((digits, Some(rest)))
}

/// Return the explicit timezone abbreviation of a timestamp field, if any
///
/// Only a known abbreviation following a full 10-digit timestamp counts.
pub fn explicit_timezone(text: &str) -> Option<&str> {
    let (digits, timezone) = split_timezone(text.trim())?;
    let timezone = timezone?;
    (digits.len() == 10 && timezone_offset(timezone).is_some()).then_some(timezone)
}

/// Convert a `YYMMDDHHMM[TZ]` string or the `PERM` sentinel to a [`Timestamp`]
///
/// A trailing timezone abbreviation wins over `default_timezone`, which in
/// turn wins over UTC. Blank, malformed or out-of-range input yields `None`.
pub fn make_year_timestamp(text: &str, default_timezone: Option<&str>) -> Option<Timestamp> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text == PERMANENT {
        return Some(Timestamp::new(text, Timestamp::permanent_instant()));
    }

    let (digits, timezone) = split_timezone(text)?;
    if digits.len() != 10 {
        return None;
    }

    let field = |range: std::ops::Range<usize>| digits[range].parse::<u32>().ok();
    let year = 2000 + field(0..2)? as i32;
    let naive = NaiveDate::from_ymd_opt(year, field(2..4)?, field(4..6)?)?
        .and_hms_opt(field(6..8)?, field(8..10)?, 0)?;

    let offset = match timezone.or(default_timezone) {
        Some(abbreviation) => timezone_offset(abbreviation)?,
        None => FixedOffset::east_opt(0)?,
    };
    let instant = offset.from_local_datetime(&naive).single()?;

    Some(Timestamp::new(text, instant))
}

/// Resolve the start (`B)`) and end (`C)`) times of a NOTAM
///
/// When only one side states a timezone, the other side is resolved in that
/// same timezone.
pub fn parse_linked_times(start: &str, end: &str) -> (Option<Timestamp>, Option<Timestamp>) {
    let start_timezone = explicit_timezone(start);
    let end_timezone = explicit_timezone(end);

    let (start_default, end_default) = match (start_timezone, end_timezone) {
        (Some(timezone), None) => (None, Some(timezone)),
        (None, Some(timezone)) => (Some(timezone), None),
        _ => (None, None),
    };

    (
        make_year_timestamp(start, start_default),
        make_year_timestamp(end, end_default),
    )
}

/// Parse the FAA `CREATED:` trailer value, e.g. `08 Jan 2021 13:30:00`
pub fn parse_created(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    let naive = NaiveDateTime::parse_from_str(text, "%d %b %Y %H:%M:%S").ok()?;
    let instant = Utc.from_utc_datetime(&naive).fixed_offset();
    Some(Timestamp::new(text, instant))
}
