//! Time-sorted revision store and its query operations
//!
//! All queries are read-only over an immutable, ascending-by-timestamp
//! sequence built once at construction. Pattern queries degrade to empty
//! results and crossed date edges yield empty ranges; neither is an error.

mod pattern;
mod window;

pub use pattern::PathPattern;
pub use window::TimeWindow;


use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::gitlog::{self, GitLogError, Parser};
use crate::model::{ChangePoint, FileDelta, Revision, SizePoint};

/// Immutable store of parsed revisions, sorted ascending by timestamp
///
/// Ties between equal timestamps keep their original parse order. The
/// ordering is the one invariant every query relies on; nothing mutates
/// the sequence after construction, so a shared `&History` can serve
/// concurrent readers without coordination.
#[derive(Debug, Clone, Default)]
pub struct History {
    revisions: Vec<Revision>,
}

impl History {
    /// Build a store from parsed revisions, sorting once
    pub fn new(mut revisions: Vec<Revision>) -> Self {
        // Stable sort: equal timestamps keep parse order
        revisions.sort_by_key(|revision| revision.timestamp);
        Self { revisions }
    }

    /// Parse an export and build the store in one step
    pub fn from_export(text: &str) -> Result<Self, GitLogError> {
        Ok(Self::new(Parser::parse_export(text)?))
    }

    /// Read and parse an export file
    pub fn from_export_file(path: impl AsRef<Path>) -> Result<Self, GitLogError> {
        Self::from_export(&gitlog::read_export(path)?)
    }

    /// All revisions, ascending by timestamp
    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    /// Revisions strictly inside `window`, as a contiguous subslice
    ///
    /// Every range-bounded query narrows through here. The subslice keeps
    /// the store's ordering untouched, and a crossed window yields an
    /// empty slice.
    pub fn in_window(&self, window: TimeWindow) -> &[Revision] {
        let start = match window.start() {
            Some(after) => self
                .revisions
                .partition_point(|revision| revision.timestamp <= after),
            None => 0,
        };
        let end = match window.limit() {
            Some(before) => self
                .revisions
                .partition_point(|revision| revision.timestamp < before),
            None => self.revisions.len(),
        };

        if start >= end {
            &[]
        } else {
            &self.revisions[start..end]
        }
    }

    /// Revisions with at least one delta matching `pattern`, once each,
    /// in ascending time order
    pub fn commits_touching(&self, pattern: &PathPattern, window: TimeWindow) -> Vec<&Revision> {
        self.in_window(window)
            .iter()
            .filter(|revision| {
                revision
                    .deltas
                    .iter()
                    .any(|delta| pattern.matches(&delta.path))
            })
            .collect()
    }

    /// Best-estimate line count of the matched path(s) just before `as_of`
    ///
    /// Recomputed from scratch on every call. The result can go negative
    /// when the export starts mid-history; that signals truncation and is
    /// deliberately not clamped.
    pub fn size_at(&self, pattern: &PathPattern, as_of: NaiveDateTime) -> i64 {
        self.in_window(TimeWindow::up_to(as_of))
            .iter()
            .flat_map(|revision| &revision.deltas)
            .filter(|delta| pattern.matches(&delta.path))
            .map(FileDelta::net)
            .sum()
    }

    /// One point per matching delta per revision, time-ordered
    ///
    /// A revision with two matching deltas contributes two points.
    pub fn change_history(&self, pattern: &PathPattern, window: TimeWindow) -> Vec<ChangePoint> {
        self.in_window(window)
            .iter()
            .flat_map(|revision| {
                revision
                    .deltas
                    .iter()
                    .filter(move |delta| pattern.matches(&delta.path))
                    .map(move |delta| ChangePoint {
                        timestamp: revision.timestamp,
                        added: delta.added,
                        removed: delta.removed,
                    })
            })
            .collect()
    }

    /// Net line count per path over every revision before `as_of`
    ///
    /// Single sweep over the store; agrees with [`History::size_at`] for
    /// every path observed before `as_of`.
    pub fn file_sizes(&self, as_of: NaiveDateTime) -> BTreeMap<String, i64> {
        let mut sizes = BTreeMap::new();
        for revision in self.in_window(TimeWindow::up_to(as_of)) {
            for delta in &revision.deltas {
                *sizes.entry(delta.path.clone()).or_insert(0) += delta.net();
            }
        }
        sizes
    }

    /// Count of deltas per path (not per revision) before `as_of`
    pub fn commit_counts(&self, as_of: NaiveDateTime) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for revision in self.in_window(TimeWindow::up_to(as_of)) {
            for delta in &revision.deltas {
                *counts.entry(delta.path.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Count of revisions per author before `as_of`
    pub fn revisions_by_author(&self, as_of: NaiveDateTime) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for revision in self.in_window(TimeWindow::up_to(as_of)) {
            *counts.entry(revision.author.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Cumulative tree size at each in-window revision
    ///
    /// The running total is seeded with the accumulated net change of
    /// every revision at or before the window's lower edge, so each point
    /// is the absolute estimated size, consistent with
    /// [`History::size_at`] at the same instant. Pass an unbounded lower
    /// edge for a zero baseline.
    pub fn cumulative_size_series(&self, window: TimeWindow) -> Vec<SizePoint> {
        let mut total: i64 = match window.start() {
            Some(after) => self
                .revisions
                .iter()
                .take_while(|revision| revision.timestamp <= after)
                .map(Revision::net_change)
                .sum(),
            None => 0,
        };

        self.in_window(window)
            .iter()
            .map(|revision| {
                total += revision.net_change();
                SizePoint {
                    timestamp: revision.timestamp,
                    lines: total,
                }
            })
            .collect()
    }
}
