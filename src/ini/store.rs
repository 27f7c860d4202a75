//! The in-memory group → key → value store populated by the parser.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use super::error::{IniError, Result};

type GroupMap = BTreeMap<String, String>;

/// Ordered mapping from group name to that group's key-value pairs.
///
/// The store starts out uninstantiated ("invalid"): no allocation has
/// happened and every query answers benignly (false, zero, `None`). The
/// first write instantiates it; [`IniStore::clear`] returns it to the
/// fresh state.
#[derive(Debug, Default)]
pub struct IniStore {
    values: Option<BTreeMap<String, GroupMap>>,
}

impl IniStore {
    /// Create a fresh, uninstantiated store.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the internal structure has been instantiated by a write.
    pub fn is_valid(&self) -> bool {
        self.values.is_some()
    }

    /// True iff the store holds no groups (including the invalid state).
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of groups (0 if invalid).
    pub fn size(&self) -> usize {
        self.values.as_ref().map_or(0, |values| values.len())
    }

    /// Number of keys in `group` (0 if the group is absent or the store invalid).
    pub fn group_size(&self, group: &str) -> usize {
        self.group(group).map_or(0, |entries| entries.len())
    }

    /// True iff `group` exists. Never fails.
    pub fn contains_group(&self, group: &str) -> bool {
        self.group(group).is_some()
    }

    /// True iff `group` exists and contains `key`. Never fails.
    pub fn contains_key(&self, group: &str, key: &str) -> bool {
        self.group(group).is_some_and(|entries| entries.contains_key(key))
    }

    /// Create `group` if absent, instantiating the store if needed.
    /// A no-op for a group that already exists; its keys are untouched.
    pub fn add_group(&mut self, group: &str) {
        self.instantiate().entry(group.to_string()).or_default();
    }

    /// Insert `key` = `value` into `group`, creating the group if needed.
    ///
    /// The value is stored as its textual representation. An existing key
    /// is overwritten. Returns whether the key is present afterwards
    /// (always true on success).
    pub fn add_key_pair<T: Display>(&mut self, group: &str, key: &str, value: T) -> bool {
        self.instantiate()
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.contains_key(group, key)
    }

    /// Retrieve `key` from `group`, parsed as `T`.
    ///
    /// The stored text is trimmed of surrounding whitespace before the
    /// conversion, so a value that kept whitespace ahead of an inline
    /// comment still parses. The conversion is strict full-string:
    /// trailing non-whitespace content after a valid `T` prefix fails.
    ///
    /// # Errors
    /// - [`IniError::GroupNotFound`] if `group` is absent
    /// - [`IniError::KeyNotFound`] if `key` is absent in `group`
    /// - [`IniError::Conversion`] if the text does not parse as `T`
    pub fn get_key_as<T: FromStr>(&self, group: &str, key: &str) -> Result<T> {
        let entries = self.group(group).ok_or_else(|| IniError::GroupNotFound {
            group: group.to_string(),
        })?;
        let raw = entries.get(key).ok_or_else(|| IniError::KeyNotFound {
            group: group.to_string(),
            key: key.to_string(),
        })?;

        raw.trim().parse::<T>().map_err(|_| IniError::Conversion {
            group: group.to_string(),
            key: key.to_string(),
            value: raw.clone(),
            target: std::any::type_name::<T>(),
        })
    }

    /// Raw string accessor: the stored text of `key` in `group`, if any.
    ///
    /// Replacement for the historical blind-index accessor; a missing
    /// group or key is reported as `None` instead of being undefined.
    pub fn get(&self, group: &str, key: &str) -> Option<&str> {
        self.group(group)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Iterate over group names, in order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .flat_map(|values| values.keys())
            .map(String::as_str)
    }

    /// Iterate over the (key, value) pairs of `group`, in key order.
    /// Empty if the group is absent.
    pub fn entries(&self, group: &str) -> impl Iterator<Item = (&str, &str)> {
        self.group(group)
            .into_iter()
            .flat_map(|entries| entries.iter())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Discard all groups and keys; the store returns to the invalid state.
    pub fn clear(&mut self) {
        self.values = None;
    }

    fn group(&self, name: &str) -> Option<&GroupMap> {
        self.values.as_ref().and_then(|values| values.get(name))
    }

    fn instantiate(&mut self) -> &mut BTreeMap<String, GroupMap> {
        self.values.get_or_insert_with(BTreeMap::new)
    }
}
