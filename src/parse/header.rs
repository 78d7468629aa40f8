use crate::error::{Error, Result};
use crate::types::{Code, NotamType};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<number> NOTAM<char>[ <replaces>]`, optionally opened by `(` as in ICAO
/// formatted messages. Must cover the whole line.
pub(crate) static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\(?(?P<number>[A-Z0-9]*\d+/\d+)\s+NOTAM(?P<kind>[A-Z])(?:\s+(?P<replaces>[A-Z0-9]*\d+/\d+))?\s*$",
    )
    .expect("valid header regex")
});

/// Parse the NOTAM header line
///
/// Returns the NOTAM number, the type code (raw `NOTAM<char>`) and the
/// number of the NOTAM being replaced or cancelled, if any.
pub fn parse_header(line: &str) -> Result<(String, Code, Option<String>)> {
    let line = line.trim();
    let captures = HEADER_REGEX
        .captures(line)
        .ok_or_else(|| Error::header_format(line))?;

    let kind = NotamType::from_raw(&captures["kind"]);
    let description = kind
        .description()
        .ok_or_else(|| Error::header_format(line))?;
    let notam_type = Code::new(format!("NOTAM{}", kind.raw()), description);

    let replaces = match kind {
        NotamType::New => None,
        _ => captures.name("replaces").map(|m| m.as_str().to_string()),
    };

    Ok((captures["number"].to_string(), notam_type, replaces))
}

/// Check if a line opens a new report
pub(crate) fn is_header_line(line: &str) -> bool {
    HEADER_REGEX.is_match(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok, assert_some_eq};
    use insta::assert_snapshot;

    #[test]
    fn new_notam() {
        let (number, notam_type, replaces) = assert_ok!(parse_header("01/113 NOTAMN"));
        assert_eq!(number, "01/113");
        assert_eq!(notam_type, Code::new("NOTAMN", "New"));
        assert_none!(replaces);
    }

    #[test]
    fn trailing_whitespace() {
        let (number, _, _) = assert_ok!(parse_header("A3475/22 NOTAMN \t"));
        assert_eq!(number, "A3475/22");
    }

    #[test]
    fn replacement_notam() {
        let (number, notam_type, replaces) =
            assert_ok!(parse_header("A1234/22 NOTAMR A1200/22"));
        assert_eq!(number, "A1234/22");
        assert_eq!(notam_type, Code::new("NOTAMR", "Replace"));
        assert_some_eq!(replaces, "A1200/22");
    }

    #[test]
    fn cancel_notam() {
        let (_, notam_type, replaces) = assert_ok!(parse_header("(B0042/23 NOTAMC B0040/23"));
        assert_eq!(notam_type, Code::new("NOTAMC", "Cancel"));
        assert_some_eq!(replaces, "B0040/23");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = assert_err!(parse_header("01/113 NOTAMX"));
        assert_snapshot!(err, @r#"Invalid NOTAM header: "01/113 NOTAMX""#);
    }

    #[test]
    fn trailing_type_letters_are_rejected() {
        let err = assert_err!(parse_header("01/113 NOTAMNX"));
        assert_snapshot!(err, @r#"Invalid NOTAM header: "01/113 NOTAMNX""#);
        assert_err!(parse_header("01/113 NOTAMNEW"));
    }

    #[test]
    fn extra_tokens_are_rejected() {
        assert_err!(parse_header("A1234/22 NOTAMR A1200/22 EXTRA"));
        assert_err!(parse_header("A1234/22 NOTAMR SOON"));
        assert_err!(parse_header("A1200/22 NOTAMN ISSUED EARLIER"));
    }

    #[test]
    fn missing_notam_token() {
        let err = assert_err!(parse_header("Q) ZNY/QMXLC/IV/NBO/A/000/999/4038N07346W005"));
        assert!(err.is_structural());
        assert_err!(parse_header(""));
    }

    #[test]
    fn header_line_detection() {
        assert!(is_header_line("01/113 NOTAMN "));
        assert!(is_header_line("A3475/22 NOTAMR A3400/22"));
        assert!(!is_header_line("E) NOTAMN TEXT"));
        assert!(!is_header_line("A1200/22 NOTAMN ISSUED EARLIER"));
    }
}
