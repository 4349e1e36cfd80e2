//! Time window for range-bounded queries

use chrono::NaiveDateTime;

/// Date range with strict comparisons on both edges
///
/// `None` on either edge means unbounded. There are no implicit defaults:
/// an unbounded upper edge admits every parsed revision, which for an
/// already-ingested export is the same as resolving "now" freshly at each
/// call. A window whose edges cross simply contains nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    after: Option<NaiveDateTime>,
    before: Option<NaiveDateTime>,
}

impl TimeWindow {
    /// Window admitting every revision
    pub fn all() -> Self {
        Self::default()
    }

    /// Revisions strictly earlier than `limit`
    pub fn up_to(limit: NaiveDateTime) -> Self {
        Self {
            after: None,
            before: Some(limit),
        }
    }

    /// Revisions strictly later than `start`
    pub fn since(start: NaiveDateTime) -> Self {
        Self {
            after: Some(start),
            before: None,
        }
    }

    /// Revisions strictly between `start` and `limit`
    pub fn between(start: NaiveDateTime, limit: NaiveDateTime) -> Self {
        Self {
            after: Some(start),
            before: Some(limit),
        }
    }

    /// Lower edge, if bounded
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.after
    }

    /// Upper edge, if bounded
    pub fn limit(&self) -> Option<NaiveDateTime> {
        self.before
    }

    /// True if `at` lies strictly inside the window
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.after.is_none_or(|start| at > start) && self.before.is_none_or(|limit| at < limit)
    }
}
