/// Normalize line endings and drop leading/trailing blank lines
///
/// `\r\n` and lone `\r` become `\n`. Line content, including trailing
/// spaces and casing, is left untouched.
pub fn sanitize(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);

    lines[first..=last].join("\n")
}
