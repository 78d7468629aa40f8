//! Splitting of a sanitized report into its lettered fields

/// Field tags in the order they appear in a NOTAM
const TAG_ORDER: &[u8] = b"QABCDEFG";

/// Trailer lines some authorities append after the last field
const TRAILER_KEYS: &[&str] = &["CREATED:", "SOURCE:"];

/// A sanitized report split into preamble, tagged fields and trailer
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Fields<'a> {
    /// Text before the first tag (the header line, usually)
    pub preamble: &'a str,
    /// `(tag, text)` pairs in source order, text trimmed
    pub tagged: Vec<(char, &'a str)>,
    /// Lines after the last field such as `CREATED: ...`
    pub trailer: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn get(&self, tag: char) -> Option<&'a str> {
        self.tagged
            .iter()
            .find(|(field_tag, _)| *field_tag == tag)
            .map(|(_, text)| *text)
    }
}

fn tag_rank(byte: u8) -> Option<usize> {
    TAG_ORDER.iter().position(|&tag| tag == byte)
}

/// Split a sanitized report into its `Q)` .. `G)` fields
///
/// A tag is an uppercase letter followed by `)` at the start of the text or
/// after whitespace. It only opens a new field if it comes later in the tag
/// order than the field currently open, so `POINT C)` inside an `E)` body
/// stays body text. While `E)` is open, only tags at the start of a line
/// are considered.
pub(crate) fn split_fields(text: &str) -> Fields<'_> {
    let bytes = text.as_bytes();
    let mut starts: Vec<(usize, u8)> = Vec::new();
    let mut current_rank: Option<usize> = None;

    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i + 1] != b')' {
            continue;
        }
        let Some(rank) = tag_rank(bytes[i]) else {
            continue;
        };

        let at_line_start = i == 0 || bytes[i - 1] == b'\n';
        let after_space = i == 0 || bytes[i - 1].is_ascii_whitespace();
        if !after_space || current_rank.is_some_and(|current| rank <= current) {
            continue;
        }
        if current_rank == tag_rank(b'E') && !at_line_start {
            continue;
        }

        tracing::trace!(tag = %(bytes[i] as char), offset = i, "found field tag");
        starts.push((i, bytes[i]));
        current_rank = Some(rank);
    }

    let preamble_end = starts.first().map_or(text.len(), |&(start, _)| start);
    let mut fields = Fields {
        preamble: text[..preamble_end].trim(),
        ..Fields::default()
    };

    for (index, &(start, tag)) in starts.iter().enumerate() {
        let end = starts.get(index + 1).map_or(text.len(), |&(next, _)| next);
        fields.tagged.push((tag as char, text[start + 2..end].trim()));
    }

    if let Some((_, last)) = fields.tagged.last_mut() {
        let (content, trailer) = split_trailer(*last);
        *last = content;
        fields.trailer = trailer;
    }

    fields
}

/// Cut trailer lines off the end of the last field's text
fn split_trailer(text: &str) -> (&str, Vec<&str>) {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if TRAILER_KEYS.iter().any(|key| trimmed.starts_with(key)) {
            let trailer = text[offset..]
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            return (text[..offset].trim(), trailer);
        }
        offset += line.len();
    }
    (text, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_field_per_line() {
        let text = "01/113 NOTAMN \nQ) ZNY/QMXLC/IV/NBO/A/000/999/4038N07346W005 \nA) KJFK \nB) 2101081328 \nC) 2209301100 \n\nE) TWY TB CLSD";
        let fields = split_fields(text);

        assert_eq!(fields.preamble, "01/113 NOTAMN");
        assert_eq!(
            fields.tagged,
            vec![
                ('Q', "ZNY/QMXLC/IV/NBO/A/000/999/4038N07346W005"),
                ('A', "KJFK"),
                ('B', "2101081328"),
                ('C', "2209301100"),
                ('E', "TWY TB CLSD"),
            ]
        );
        assert!(fields.trailer.is_empty());
    }

    #[test]
    fn several_fields_on_one_line() {
        let fields = split_fields("A1/22 NOTAMN\nA) LIMC B) 2205182200 C) PERM\nE) TEXT");
        assert_eq!(fields.get('A'), Some("LIMC"));
        assert_eq!(fields.get('B'), Some("2205182200"));
        assert_eq!(fields.get('C'), Some("PERM"));
        assert_eq!(fields.get('E'), Some("TEXT"));
    }

    #[test]
    fn out_of_order_tag_stays_in_body() {
        let fields = split_fields(
            "A1/22 NOTAMN\nC) PERM\nE) INDENT 4 POINT C) 'FOLLOW-ME'\nPROVIDED",
        );
        assert_eq!(fields.get('C'), Some("PERM"));
        assert_eq!(
            fields.get('E'),
            Some("INDENT 4 POINT C) 'FOLLOW-ME'\nPROVIDED")
        );
    }

    #[test]
    fn limits_after_body_need_line_start() {
        let fields = split_fields("A1/22 NOTAMN\nE) SEE ITEM F) BELOW\nF) SFC G) FL100");
        assert_eq!(fields.get('E'), Some("SEE ITEM F) BELOW"));
        assert_eq!(fields.get('F'), Some("SFC"));
        assert_eq!(fields.get('G'), Some("FL100"));
    }

    #[test]
    fn tag_must_follow_whitespace() {
        let fields = split_fields("A1/22 NOTAMN\nE) RWY(A) CLSD");
        assert_eq!(fields.get('E'), Some("RWY(A) CLSD"));
        assert_eq!(fields.get('A'), None);
    }

    #[test]
    fn trailer_is_split_off() {
        let fields = split_fields(
            "01/113 NOTAMN\nE) TWY A CLSD\nCREATED: 08 Jan 2021 13:30:00 \nSOURCE: KJFK",
        );
        assert_eq!(fields.get('E'), Some("TWY A CLSD"));
        assert_eq!(
            fields.trailer,
            vec!["CREATED: 08 Jan 2021 13:30:00", "SOURCE: KJFK"]
        );
    }

    #[test]
    fn no_tags_at_all() {
        let fields = split_fields("01/113 NOTAMN");
        assert_eq!(fields.preamble, "01/113 NOTAMN");
        assert!(fields.tagged.is_empty());
        assert_eq!(split_fields(""), Fields::default());
    }
}
