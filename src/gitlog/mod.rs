//! Export text access and parsing
//!
//! This module reads `git log --numstat` exports and parses them into
//! structured revisions.

mod export;
/// Parser module (public so integration tests can drive it)
pub mod parser;

pub use export::read_export;
pub use parser::Parser;

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or parsing an export
///
/// A parse failure aborts the whole parse: no partial revision list is
/// ever handed to the history store.
#[derive(Error, Debug)]
pub enum GitLogError {
    #[error("revision block at line {line} is missing its {field} line")]
    MissingMetadata { line: usize, field: &'static str },

    #[error("line {line}: unrecognized date {value:?}")]
    InvalidDate { line: usize, value: String },

    #[error("failed to read export: {0}")]
    Io(#[from] io::Error),
}
