use crate::types::Number;

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Measurement-unit context used when building [`Number`] values
///
/// NOTAM vertical limits are given in hundreds of feet and the Q-line radius
/// in nautical miles, which is what the default describes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Units {
    pub altitude: String,
    pub distance: String,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            altitude: "ft".to_string(),
            distance: "nm".to_string(),
        }
    }
}

impl Units {
    /// Render a non-negative value digit by digit, e.g. `25` as `"two five"`
    pub fn spoken_digits(&self, value: i32) -> String {
        let digits = value.unsigned_abs().to_string();
        let words = digits
            .bytes()
            .map(|b| DIGIT_WORDS[(b - b'0') as usize])
            .collect::<Vec<_>>()
            .join(" ");

        if value < 0 {
            format!("minus {words}")
        } else {
            words
        }
    }

    /// Build a [`Number`] from an all-digit field like `"025"`
    ///
    /// Returns `None` for empty or non-numeric input.
    pub fn make_number(&self, raw: &str) -> Option<Number> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let value = raw.parse().ok()?;
        Some(Number::new(raw, value, self.spoken_digits(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn spoken_digits() {
        let units = Units::default();
        assert_eq!(units.spoken_digits(0), "zero");
        assert_eq!(units.spoken_digits(1), "one");
        assert_eq!(units.spoken_digits(25), "two five");
        assert_eq!(units.spoken_digits(999), "nine nine nine");
        assert_eq!(units.spoken_digits(-3), "minus three");
    }

    #[test]
    fn make_number_strips_leading_zeros_from_value_only() {
        let units = Units::default();
        assert_some_eq!(units.make_number("025"), Number::new("025", 25, "two five"));
        assert_some_eq!(units.make_number("000"), Number::new("000", 0, "zero"));
    }

    #[test]
    fn make_number_rejects_non_digits() {
        let units = Units::default();
        assert_none!(units.make_number(""));
        assert_none!(units.make_number("FL1"));
        assert_none!(units.make_number("-12"));
    }
}
