use crate::types::{Code, Coordinate, Number};

/// Decoded contents of a NOTAM `Q)` line
///
/// Subfields that could not be decoded are `None` (or empty for the code
/// lists); `repr` always keeps the original payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Qualifiers {
    pub repr: String,
    pub fir: String,
    pub subject: Option<Code>,
    pub condition: Option<Code>,
    pub traffic: Option<Code>,
    pub purpose: Vec<Code>,
    pub scope: Vec<Code>,
    pub lower: Number,
    pub upper: Number,
    pub coord: Option<Coordinate>,
    pub radius: Option<Number>,
}
