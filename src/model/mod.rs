//! Data models for Chronicle
//!
//! This module contains query-independent data structures representing
//! parsed history concepts like revisions, file deltas, and chart series.

mod revision;
mod series;

pub use revision::{FileDelta, Revision};
pub use series::{ChangePoint, SizePoint};
