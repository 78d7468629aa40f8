use crate::error::{Error, Result};
use crate::parse::body::strip_copied_tag;
use crate::parse::fields::split_fields;
use crate::parse::header::{is_header_line, parse_header};
use crate::parse::limits::parse_limit;
use crate::parse::qualifiers::parse_qualifiers;
use crate::parse::sanitize::sanitize;
use crate::parse::time::{parse_created, parse_linked_times};
use crate::types::{NotamData, Residual, Units};

/// Decode a single raw NOTAM report with the default [`Units`]
///
/// See [`parse_with_units`].
pub fn parse(report: &str) -> Result<(NotamData, Vec<Residual>)> {
    parse_with_units(report, &Units::default())
}

/// Decode a single raw NOTAM report
///
/// Returns the decoded record together with everything that was not turned
/// into a record field. Only a broken header or `Q)` line is an error; any
/// other missing or undecodable field is left empty and, where there was
/// text, returned as a [`Residual`].
pub fn parse_with_units(report: &str, units: &Units) -> Result<(NotamData, Vec<Residual>)> {
    let sanitized = sanitize(report);
    let fields = split_fields(&sanitized);
    let mut residuals = Vec::new();

    let mut preamble = fields.preamble.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = preamble.next().ok_or_else(|| Error::header_format(""))?;
    let (number, notam_type, replaces) = parse_header(header)?;
    residuals.extend(preamble.map(|line| Residual::Preamble(line.to_string())));

    let qualifiers = fields
        .get('Q')
        .map(|payload| parse_qualifiers(payload, units))
        .transpose()?;

    let start = fields.get('B').unwrap_or_default();
    let end = fields.get('C').unwrap_or_default();
    let (start_time, end_time) = parse_linked_times(start, end);

    let body = fields
        .get('E')
        .map(|body| strip_copied_tag(body, qualifiers.as_ref().map(|q| q.repr.as_str())))
        .unwrap_or_default()
        .to_string();

    let mut lower = None;
    let mut upper = None;
    for &(tag, text) in &fields.tagged {
        let decoded = match tag {
            'B' => start_time.is_some(),
            'C' => end_time.is_some(),
            'D' => false,
            'F' => {
                lower = parse_limit(text, units);
                lower.is_some()
            }
            'G' => {
                upper = parse_limit(text, units);
                upper.is_some()
            }
            _ => true,
        };
        if !decoded && !text.is_empty() {
            residuals.push(Residual::Field {
                tag,
                text: text.to_string(),
            });
        }
    }

    let mut issued = None;
    for line in &fields.trailer {
        match line.strip_prefix("CREATED:").and_then(parse_created) {
            Some(created) if issued.is_none() => issued = Some(created),
            _ => residuals.push(Residual::Trailer(line.to_string())),
        }
    }

    tracing::debug!(
        %number,
        station = fields.get('A').unwrap_or_default(),
        residuals = residuals.len(),
        "decoded NOTAM"
    );

    let data = NotamData {
        raw: report.to_string(),
        station: fields.get('A').unwrap_or_default().to_string(),
        number,
        notam_type,
        replaces,
        issued,
        start_time,
        end_time,
        schedule: fields.get('D').map(str::to_string),
        qualifiers,
        body,
        lower,
        upper,
        sanitized,
    };

    Ok((data, residuals))
}

/// Split a text blob holding several NOTAMs into one string per report
///
/// A new report starts at every header line (`<number> NOTAM<char>`). Text
/// before the first header is dropped.
pub fn split_reports(text: &str) -> Vec<String> {
    let sanitized = sanitize(text);
    let mut reports: Vec<Vec<&str>> = Vec::new();

    for line in sanitized.lines() {
        if is_header_line(line) {
            reports.push(vec![line]);
        } else if let Some(report) = reports.last_mut() {
            report.push(line);
        } else if !line.trim().is_empty() {
            tracing::trace!(line, "dropping text before first NOTAM header");
        }
    }

    reports
        .into_iter()
        .map(|lines| sanitize(&lines.join("\n")))
        .collect()
}
