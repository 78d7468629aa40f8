use crate::parse::fields::split_fields;

/// Extract the free text of the `E)` field from a sanitized report
///
/// `qualifiers` is the `Q)` payload; see [`strip_copied_tag`].
pub fn extract_body(sanitized: &str, qualifiers: Option<&str>) -> Option<String> {
    let fields = split_fields(sanitized);
    fields
        .get('E')
        .map(|body| strip_copied_tag(body, qualifiers).to_string())
}

/// Remove a verbatim copy of the `Q)` payload from the start of a body
///
/// Some authorities repeat the qualifier line, with or without its `Q)` tag,
/// as the first thing in the free text.
pub fn strip_copied_tag<'a>(body: &'a str, qualifiers: Option<&str>) -> &'a str {
    let body = body.trim();
    let Some(qualifiers) = qualifiers.map(str::trim).filter(|q| !q.is_empty()) else {
        return body;
    };

    let untagged = body
        .strip_prefix("Q)")
        .map(str::trim_start)
        .unwrap_or(body);

    match untagged.strip_prefix(qualifiers) {
        Some(rest) => rest.trim_start(),
        None => body,
    }
}
