use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Literal token meaning the NOTAM is in force permanently
pub const PERMANENT: &str = "PERM";

/// A report time resolved to an absolute instant
///
/// `instant` always carries a concrete UTC offset. Permanent NOTAMs map to
/// [`Timestamp::permanent_instant`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Timestamp {
    pub raw: String,
    pub instant: DateTime<FixedOffset>,
}

impl Timestamp {
    pub fn new(raw: impl Into<String>, instant: DateTime<FixedOffset>) -> Self {
        Self {
            raw: raw.into(),
            instant,
        }
    }

    /// Fixed far-future instant used for the `PERM` sentinel (2100-01-01 UTC)
    pub fn permanent_instant() -> DateTime<FixedOffset> {
        let utc = FixedOffset::east_opt(0).expect("zero offset is always valid");
        let midnight = NaiveDate::from_ymd_opt(2100, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("2100-01-01 is a valid date");
        utc.from_utc_datetime(&midnight)
    }

    /// Check if this timestamp stands for the `PERM` sentinel
    pub fn is_permanent(&self) -> bool {
        self.raw.trim() == PERMANENT
    }
}
