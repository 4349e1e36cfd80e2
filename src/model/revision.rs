//! Revision (change-set) data model

use chrono::NaiveDateTime;

/// One file's change within a revision
///
/// A file recorded without numeric stats (the binary-file marker in
/// numstat output) carries 0 for both counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDelta {
    /// Repository-relative path, verbatim from the export
    pub path: String,

    /// Lines added
    pub added: u64,

    /// Lines removed
    pub removed: u64,
}

impl FileDelta {
    /// Net line change for this file
    pub fn net(&self) -> i64 {
        self.added as i64 - self.removed as i64
    }
}

/// One committed change-set from the export
///
/// Built once by the parser and immutable afterwards. Merge commits never
/// become `Revision` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    /// Full 40-hex revision identifier
    pub id: String,

    /// Raw author identity (name + contact), unparsed
    pub author: String,

    /// Authored time with the export's timezone offset discarded
    /// (dropped, not converted to UTC)
    pub timestamp: NaiveDateTime,

    /// Free-form message, trimmed as a whole, may span multiple lines
    pub message: String,

    /// Per-file changes in the order they appear in the export
    pub deltas: Vec<FileDelta>,
}

impl Revision {
    /// Sum of net line changes across all deltas (0 when there are none)
    pub fn net_change(&self) -> i64 {
        self.deltas.iter().map(FileDelta::net).sum()
    }

    /// Short id for display (first 8 chars)
    pub fn short_id(&self) -> &str {
        &self.id[..8.min(self.id.len())]
    }
}
