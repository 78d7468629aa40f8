use std::borrow::Cow;

/// Decode a fetched report payload to text
///
/// Report feeds are mostly UTF-8, but some still deliver Extended ASCII
/// (CP1252). Valid UTF-8 is borrowed as-is, anything else is decoded as
/// Windows-1252, which maps every byte and therefore always succeeds.
pub fn decode_report_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.into(),
        Err(error) => {
            tracing::debug!(
                valid_up_to = error.valid_up_to(),
                "report payload is not UTF-8, decoding as Windows-1252"
            );
            encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes).0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_borrowed() {
        let text = decode_report_bytes(b"01/113 NOTAMN");
        assert!(matches!(text, Cow::Borrowed("01/113 NOTAMN")));
    }

    #[test]
    fn utf8_with_special_chars() {
        assert_eq!(decode_report_bytes("E) ZÜRICH TWR".as_bytes()), "E) ZÜRICH TWR");
    }

    #[test]
    fn cp1252_fallback() {
        // 0xC9 is É in CP1252 and not valid UTF-8 on its own
        let bytes = b"E) ESPACE A\xC9RIEN";
        assert_eq!(decode_report_bytes(bytes), "E) ESPACE AÉRIEN");
    }

    #[test]
    fn empty() {
        assert_eq!(decode_report_bytes(b""), "");
    }
}
