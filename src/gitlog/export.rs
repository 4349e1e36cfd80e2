//! Export file access
//!
//! Fetching the raw text is kept outside the parser so the parser itself
//! never does I/O.

use std::fs;
use std::path::Path;

use super::GitLogError;

/// Read a `git log --numstat` export file into a string
pub fn read_export(path: impl AsRef<Path>) -> Result<String, GitLogError> {
    Ok(fs::read_to_string(path)?)
}
