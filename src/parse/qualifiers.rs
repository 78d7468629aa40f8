use crate::error::{Error, Result};
use crate::parse::coord::parse_coord_radius;
use crate::types::{Code, Condition, Purpose, Qualifiers, Scope, Subject, Traffic, Units};

/// Minimum number of slash-delimited groups: FIR, code, scope and both limits
const MIN_GROUPS: usize = 5;

/// Check if a group is a 3-digit vertical limit like `000` or `999`
fn is_limit(group: &str) -> bool {
    group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit())
}

/// Split a `Q`-prefixed code like `QMXLC` into subject and condition
fn parse_q_code(group: &str) -> (Option<Code>, Option<Code>) {
    let Some(code) = group.strip_prefix('Q') else {
        return (None, None);
    };

    let subject = code
        .get(0..2)
        .and_then(|raw| Subject::from_raw(raw).to_code());
    let condition = code
        .get(2..4)
        .and_then(|raw| Condition::from_raw(raw).to_code());
    (subject, condition)
}

/// Decode one code per character, skipping characters that are not in the table
fn parse_code_run(group: &str, lookup: impl Fn(&str) -> Option<Code>) -> Vec<Code> {
    let mut buf = [0u8; 4];
    group
        .chars()
        .filter_map(|c| lookup(c.encode_utf8(&mut buf)))
        .collect()
}

/// Decode the payload of a NOTAM `Q)` line
///
/// The payload looks like `ZNY/QPIXX/I/NBO/A/000/999/4038N07346W025`:
/// FIR, Q-code, traffic, purpose, scope, lower and upper limit and the
/// coordinate/radius tail. Traffic and purpose may be left out, in which
/// case the groups between the Q-code and the limits are read as
/// `purpose/scope` or `scope` only.
///
/// Unknown codes decode to `None` or are skipped. Only a payload that is
/// too short or lacks the two limit groups is an error.
pub fn parse_qualifiers(payload: &str, units: &Units) -> Result<Qualifiers> {
    let repr = payload.trim();
    let groups: Vec<&str> = repr
        .trim_matches(|c: char| c == '/' || c.is_whitespace())
        .split('/')
        .map(str::trim)
        .collect();

    if groups.len() < MIN_GROUPS {
        return Err(Error::qualifier_format(repr));
    }

    let limits = (2..groups.len() - 1)
        .find(|&i| is_limit(groups[i]) && is_limit(groups[i + 1]))
        .ok_or_else(|| Error::qualifier_format(repr))?;

    let (traffic, purpose, scope) = match &groups[2..limits] {
        [traffic, purpose, scope] => (Some(*traffic), *purpose, *scope),
        [purpose, scope] => (None, *purpose, *scope),
        [scope] => (None, "", *scope),
        [] => (None, "", ""),
        _ => return Err(Error::qualifier_format(repr)),
    };

    let (subject, condition) = parse_q_code(groups[1]);
    let lower = units
        .make_number(groups[limits])
        .ok_or_else(|| Error::qualifier_format(repr))?;
    let upper = units
        .make_number(groups[limits + 1])
        .ok_or_else(|| Error::qualifier_format(repr))?;

    let (coord, radius) = match groups.get(limits + 2) {
        Some(tail) => match parse_coord_radius(tail, units) {
            Some((coord, radius)) => (Some(coord), radius),
            None => (None, None),
        },
        None => (None, None),
    };

    Ok(Qualifiers {
        repr: repr.to_string(),
        fir: groups[0].to_string(),
        subject,
        condition,
        traffic: traffic.and_then(|raw| Traffic::from_raw(raw).to_code()),
        purpose: parse_code_run(purpose, |raw| Purpose::from_raw(raw).to_code()),
        scope: parse_code_run(scope, |raw| Scope::from_raw(raw).to_code()),
        lower,
        upper,
        coord,
        radius,
    })
}
