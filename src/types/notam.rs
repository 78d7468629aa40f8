use crate::types::{Code, Number, Qualifiers, Timestamp};

/// A fully decoded NOTAM report
///
/// Created once per successfully parsed report and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NotamData {
    // Source text
    pub raw: String,
    pub sanitized: String,

    // Header
    pub station: String,
    pub number: String,
    pub notam_type: Code,
    pub replaces: Option<String>,

    // Times
    pub issued: Option<Timestamp>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub schedule: Option<String>,

    // Decoded fields
    pub qualifiers: Option<Qualifiers>,
    pub body: String,
    pub lower: Option<Number>,
    pub upper: Option<Number>,
}

impl NotamData {
    /// Check if the NOTAM never expires
    pub fn is_permanent(&self) -> bool {
        self.end_time.as_ref().is_some_and(Timestamp::is_permanent)
    }
}

/// Part of a report that the decoder did not turn into a [`NotamData`] field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Residual {
    /// Untagged line before the first field, other than the header
    Preamble(String),
    /// Tagged field kept verbatim or not decodable
    Field { tag: char, text: String },
    /// Line after the body, e.g. `SOURCE: KJFK`
    Trailer(String),
}
