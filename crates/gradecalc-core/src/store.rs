//! Ordered, editable list of form rows.
//!
//! `EntryList` is the state behind one tab of the form. Rows are addressed by
//! position; positions are always the contiguous range `0..len()`. Edits that
//! address a row past the end are rejected and leave the list untouched.

use tracing::{debug, warn};

use crate::entry::{Entry, Field};

/// Error type for list edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No row exists at this position.
    #[error("row {index} is out of range (list has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The row's variant has no such field.
    #[error("a {kind} row has no {field} field")]
    FieldMismatch { field: Field, kind: &'static str },
}

/// Ordered sequence of entries. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding one copy of `template`, the way a fresh form
    /// tab starts out.
    #[must_use]
    pub fn seeded(template: Entry) -> Self {
        Self {
            entries: vec![template],
        }
    }

    /// Append `template` and return its position.
    pub fn add(&mut self, template: Entry) -> usize {
        self.entries.push(template);
        let index = self.entries.len() - 1;
        debug!(index, len = self.entries.len(), "row added");
        index
    }

    /// Replace one field of the row at `index`.
    ///
    /// The row is rebuilt as a new value; every other row is left as it was.
    pub fn update(&mut self, index: usize, field: Field, value: &str) -> Result<(), StoreError> {
        let current = self.get(index).ok_or_else(|| self.out_of_range(index))?;
        let next = current.with_field(field, value).inspect_err(|e| {
            warn!(index, %e, "rejected field update");
        })?;
        self.entries[index] = next;
        debug!(index, %field, "row updated");
        Ok(())
    }

    /// Remove and return the row at `index`; later rows shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Entry, StoreError> {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.entries.remove(index);
        debug!(index, len = self.entries.len(), "row removed");
        Ok(removed)
    }

    /// Row at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current rows, in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    fn out_of_range(&self, index: usize) -> StoreError {
        let err = StoreError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        };
        warn!(%err, "rejected row edit");
        err
    }
}

impl From<Vec<Entry>> for EntryList {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for EntryList {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
