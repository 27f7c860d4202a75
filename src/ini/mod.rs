//! Core INI reader module

pub mod error;
pub mod source;
pub mod store;
mod scanner;

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use scanner::KeyPair;
use source::FileLines;
use store::IniStore;
pub use error::{IniError, Result};

/// The main reader for INI-style configuration text.
///
/// Scans the input one line at a time, classifying each as a group header
/// (`[name]`), a `key=value` pair, or ignorable (blank, comment, junk),
/// and populates an [`IniStore`] with the result. Pairs are buffered per
/// group and committed when the group is closed by the next header or by
/// the end of input.
///
/// ```no_run
/// use ini_reader::IniReader;
///
/// let reader = IniReader::from_path("settings.ini")?;
/// let port: u16 = reader.get_key_as("Server", "port")?;
/// # Ok::<(), ini_reader::IniError>(())
/// ```
#[derive(Debug, Default)]
pub struct IniReader {
    store: IniStore,
}

impl IniReader {
    /// Create a reader with nothing parsed yet; its store is invalid
    /// until a parse or a direct write instantiates it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an INI file from the given path.
    ///
    /// A path that cannot be opened behaves as empty input and yields an
    /// empty reader, not an error.
    ///
    /// # Errors
    /// Returns an error if the file contains a malformed group header.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = Self::new();
        reader.parse_path(path)?;
        Ok(reader)
    }

    /// Parse a reader out of any sequence of text lines.
    ///
    /// # Errors
    /// Returns an error if the input contains a malformed group header.
    pub fn from_lines<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut reader = Self::new();
        reader.parse_lines(lines)?;
        Ok(reader)
    }

    /// Parse the file at `path` into this reader's store.
    ///
    /// May be called repeatedly; later input adds to and overwrites what
    /// is already stored.
    pub fn parse_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Parsing INI file: {}", path.display());
        self.parse_lines(FileLines::open(path))
    }

    /// Parse a sequence of text lines (no terminators) into the store.
    ///
    /// Single pass. Group headers close the group before them: its
    /// buffered pairs are committed and a new group context begins.
    /// Key-pairs seen before any header have no group to live in and are
    /// discarded. Lines that are neither are skipped silently.
    ///
    /// # Errors
    /// [`IniError::MalformedGroup`] on a `[` with no closing `]`; parsing
    /// stops there. Groups committed earlier stay in the store, the
    /// still-open group and its buffered pairs are lost.
    pub fn parse_lines<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut pending: Vec<KeyPair> = Vec::new();
        let mut current: Option<String> = None;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_number = index + 1;

            if line.trim().is_empty() || scanner::is_comment(line) {
                continue;
            }

            if let Some(group) = scanner::extract_group_name(line, line_number)? {
                match current.replace(group) {
                    Some(closed) => self.flush(&closed, &mut pending),
                    // Pairs ahead of the first header have no group to live in.
                    None => pending.clear(),
                }
            } else if let Some(pair) = scanner::extract_key_pair(line) {
                pending.push(pair);
            } else {
                debug!("Skipping unrecognized line {}: {:?}", line_number, line);
            }
        }

        if let Some(group) = current {
            self.flush(&group, &mut pending);
        }

        info!("Parse finished: {} group(s) in store", self.store.size());
        Ok(())
    }

    /// Commit the buffered pairs under `group` and clear the buffer.
    ///
    /// The group is created even when nothing is buffered, so a header
    /// followed by no keys still exists. Pairs are committed in file
    /// order; a duplicate key keeps its last occurrence.
    fn flush(&mut self, group: &str, pending: &mut Vec<KeyPair>) {
        debug!("Closing group {:?} with {} pair(s)", group, pending.len());
        self.store.add_group(group);
        for pair in pending.drain(..) {
            self.store.add_key_pair(group, &pair.key, &pair.value);
        }
    }

    /// True once the store has been instantiated by a parse or a write.
    pub fn is_valid(&self) -> bool {
        self.store.is_valid()
    }

    /// True iff no groups are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of groups.
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// Number of keys in `group` (0 if absent).
    pub fn group_size(&self, group: &str) -> usize {
        self.store.group_size(group)
    }

    /// True iff `group` exists.
    pub fn contains_group(&self, group: &str) -> bool {
        self.store.contains_group(group)
    }

    /// True iff `group` exists and contains `key`.
    pub fn contains_key(&self, group: &str, key: &str) -> bool {
        self.store.contains_key(group, key)
    }

    /// Create `group` if absent. See [`IniStore::add_group`].
    pub fn add_group(&mut self, group: &str) {
        self.store.add_group(group);
    }

    /// Insert or overwrite `key` = `value` in `group`. See
    /// [`IniStore::add_key_pair`].
    pub fn add_key_pair<T: Display>(&mut self, group: &str, key: &str, value: T) -> bool {
        self.store.add_key_pair(group, key, value)
    }

    /// Typed retrieval. See [`IniStore::get_key_as`].
    pub fn get_key_as<T: FromStr>(&self, group: &str, key: &str) -> Result<T> {
        self.store.get_key_as(group, key)
    }

    /// Raw string accessor, `None` when the group or key is absent.
    pub fn get(&self, group: &str, key: &str) -> Option<&str> {
        self.store.get(group, key)
    }

    /// Iterate over group names, in order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.store.groups()
    }

    /// Iterate over the (key, value) pairs of `group`, in key order.
    pub fn entries(&self, group: &str) -> impl Iterator<Item = (&str, &str)> {
        self.store.entries(group)
    }

    /// Discard everything; the store returns to the invalid state.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &IniStore {
        &self.store
    }

    /// Consume the reader, keeping only the populated store.
    pub fn into_store(self) -> IniStore {
        self.store
    }
}
