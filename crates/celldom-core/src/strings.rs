//! Shared string resolution
//!
//! Spreadsheet documents store repeated text once, in a document-wide
//! table, and reference it from cells by integer index. Cell values only
//! ever *read* the table; building and deduplicating it is the document
//! writer's concern.

/// Read access to a document's shared-string table
pub trait SharedStrings {
    /// The string stored at `index`, if in range
    fn resolve(&self, index: usize) -> Option<&str>;

    /// Number of strings in the table
    fn len(&self) -> usize;

    /// Whether the table holds no strings
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed shared-string table
///
/// Population is append-only; `add` does not deduplicate.
#[derive(Debug, Clone, Default)]
pub struct SharedStringTable {
    strings: Vec<String>,
}

impl SharedStringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string, returning its index
    pub fn add<S: Into<String>>(&mut self, s: S) -> usize {
        self.strings.push(s.into());
        self.strings.len() - 1
    }
}

impl From<Vec<String>> for SharedStringTable {
    fn from(strings: Vec<String>) -> Self {
        SharedStringTable { strings }
    }
}

impl SharedStrings for SharedStringTable {
    fn resolve(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    fn len(&self) -> usize {
        self.strings.len()
    }
}
