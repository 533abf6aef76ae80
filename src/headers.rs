//! Header name to column index mapping.

use foldhash::{HashMap, HashMapExt};

use crate::error::{Error, Result};

/// Maps trimmed, non-blank header names to 0-based column positions.
///
/// Names are unique. Blank headers take up a column but are not indexed, so
/// they can only be reached by position.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    /// Indexed names with their columns, in column order.
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Build an index from raw header strings.
    ///
    /// Each name is trimmed before indexing. Fails with
    /// [`Error::DuplicateHeader`] on the first trimmed name seen twice.
    pub fn build<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let mut entries = Vec::with_capacity(raw.len());
        let mut positions = HashMap::with_capacity(raw.len());

        for (column, name) in raw.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if positions.insert(name.to_string(), column).is_some() {
                return Err(Error::DuplicateHeader(name.to_string()));
            }
            entries.push((name.to_string(), column));
        }

        Ok(Self { entries, positions })
    }

    /// Column of the given header name.
    #[inline]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Indexed names in column order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, column)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, col)| (name.as_str(), *col))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
