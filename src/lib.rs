//! # ini-reader
//!
//! A reader for INI-style configuration text: named `[group]` sections of
//! `key=value` lines, with `;` comments, parsed into a queryable store
//! with typed access.
//!
//! Tolerant by design: lines that are not a header, a key-pair, or a
//! comment are skipped. The one fatal input condition is a group header
//! opened with `[` and never closed on its line.
pub mod ini;

// Re-export the main types for convenience
pub use ini::{
    error::{IniError, Result},
    source::FileLines,
    store::IniStore,
    IniReader,
};
