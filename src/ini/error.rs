//! Custom error types for the ini-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum IniError {
    /// A group header opened with `[` but never closed with `]` on the same line.
    /// This is the only condition that aborts a parse; everything else is a line skip.
    #[error("Malformed group header at line {line_number}: missing ']' in {line:?}")]
    MalformedGroup { line_number: usize, line: String },

    /// A typed accessor was asked for a group that does not exist.
    #[error("The group {group:?} does not exist")]
    GroupNotFound { group: String },

    /// A typed accessor was asked for a key that does not exist in its group.
    #[error("The group {group:?} does not contain the key {key:?}")]
    KeyNotFound { group: String, key: String },

    /// A stored value could not be fully parsed as the requested type.
    /// Trailing non-whitespace content after a valid prefix also lands here.
    #[error("Cannot convert the value {value:?} of key {key:?} in group {group:?} to {target}")]
    Conversion {
        group: String,
        key: String,
        value: String,
        target: &'static str,
    },
}

/// A convenience `Result` type alias using the crate's `IniError` type.
pub type Result<T> = std::result::Result<T, IniError>;
