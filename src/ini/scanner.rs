//! Line classification and token extraction for the INI text format.

use super::error::{IniError, Result};

/// A single key = value association extracted from one line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct KeyPair {
    pub key: String,
    pub value: String,
}

/// True iff the line is entirely a comment: its first non-whitespace
/// character is `;`. Such a line never yields a group or key-pair,
/// whatever else it contains.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(';')
}

/// Extract a group name, if the line is a group header.
///
/// A non-comment line containing `[` is a header; the name is the text
/// strictly between the first `[` and the first `]` after it, untrimmed.
/// Anything past the `]` is ignored.
///
/// # Errors
/// [`IniError::MalformedGroup`] when the `[` has no `]` after it on the
/// same line.
pub(crate) fn extract_group_name(line: &str, line_number: usize) -> Result<Option<String>> {
    let Some(open) = line.find('[') else {
        return Ok(None);
    };

    let name_onward = &line[open + 1..];
    match name_onward.find(']') {
        Some(close) => Ok(Some(name_onward[..close].to_string())),
        None => Err(IniError::MalformedGroup {
            line_number,
            line: line.to_string(),
        }),
    }
}

/// Extract a key-pair from a line already known to be neither a full-line
/// comment nor a group header.
///
/// Span scan, on character positions:
/// - key: first alphabetic character up to the last alphanumeric one
///   before the `=`
/// - value: first alphanumeric character after the `=` up to (not
///   including) the first `;` from there, or end of line
///
/// Leading junk is stripped from both spans and trailing junk from the
/// key; trailing whitespace of the value ahead of the comment marker is
/// kept. Returns `None` when the line has no `=`, when a span has no
/// qualifying character, or when the key span collapses (a
/// single-character key does not survive the `start < end` guard).
pub(crate) fn extract_key_pair(line: &str) -> Option<KeyPair> {
    let chars: Vec<char> = line.chars().collect();

    let eq = chars.iter().position(|&c| c == '=')?;
    let start_key = chars[..eq].iter().position(|c| c.is_alphabetic())?;
    let end_key = chars[..eq].iter().rposition(|c| c.is_alphanumeric())?;

    let start_value = eq + 1 + chars[eq + 1..].iter().position(|c| c.is_alphanumeric())?;
    let end_value = chars[start_value..]
        .iter()
        .position(|&c| c == ';')
        .map_or(chars.len(), |offset| start_value + offset);

    if start_key >= end_key || start_value >= end_value {
        return None;
    }

    Some(KeyPair {
        key: chars[start_key..=end_key].iter().collect(),
        value: chars[start_value..end_value].iter().collect(),
    })
}
