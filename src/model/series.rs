//! Chart series data models
//!
//! The vocabulary handed to the rendering collaborator: queries that feed
//! a chart produce ordered sequences of these point types. Axis scaling,
//! image output, and display all happen on the rendering side.

use chrono::NaiveDateTime;

/// One matching file delta, positioned in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangePoint {
    /// Timestamp of the revision containing the delta
    pub timestamp: NaiveDateTime,

    /// Lines added
    pub added: u64,

    /// Lines removed
    pub removed: u64,
}

/// Estimated total line count at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePoint {
    /// Timestamp of the revision that produced this size
    pub timestamp: NaiveDateTime,

    /// Estimated line count; negative values signal a truncated export
    pub lines: i64,
}
