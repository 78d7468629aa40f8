/// A decoded short classifier, e.g. a Q-code subject or a traffic flag
///
/// `raw` holds the code exactly as it appeared in the report, `description`
/// is the human-readable meaning from the matching code table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Code {
    pub raw: String,
    pub description: &'static str,
}

impl Code {
    pub fn new(raw: impl Into<String>, description: &'static str) -> Self {
        Self {
            raw: raw.into(),
            description,
        }
    }
}

/// A numeric report field
///
/// Keeps the original text next to its integer value and a word-form
/// rendering for speech output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Number {
    pub raw: String,
    pub value: i32,
    pub spoken: String,
}

impl Number {
    pub fn new(raw: impl Into<String>, value: i32, spoken: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            value,
            spoken: spoken.into(),
        }
    }
}
