//! Shared helpers for integration tests

use std::fmt::Write;

/// Builds synthetic `git log --numstat` export text
///
/// Blocks are appended in call order, matching how a real export lists
/// revisions (newest first, usually).
#[derive(Default)]
pub struct ExportBuilder {
    text: String,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one ordinary revision block
    ///
    /// `date` is the raw date value, e.g. `Sun Apr 21 04:19:37 2013 +0000`.
    /// `numstat` entries are `(added, removed, path)` with the counts as
    /// raw tokens so tests can pass the `-` binary marker.
    pub fn revision(
        mut self,
        id: &str,
        author: &str,
        date: &str,
        message: &str,
        numstat: &[(&str, &str, &str)],
    ) -> Self {
        writeln!(self.text, "commit {id}").unwrap();
        writeln!(self.text, "Author: {author}").unwrap();
        writeln!(self.text, "Date:   {date}").unwrap();
        writeln!(self.text).unwrap();
        for line in message.lines() {
            writeln!(self.text, "    {line}").unwrap();
        }
        writeln!(self.text).unwrap();
        for (added, removed, path) in numstat {
            writeln!(self.text, "{added}\t{removed}\t{path}").unwrap();
        }
        writeln!(self.text).unwrap();
        self
    }

    /// Append a merge block (second-parent marker before the author line)
    pub fn merge(mut self, id: &str, author: &str, date: &str, message: &str) -> Self {
        writeln!(self.text, "commit {id}").unwrap();
        writeln!(self.text, "Merge: {} {}", &id[..7], "f00ba44").unwrap();
        writeln!(self.text, "Author: {author}").unwrap();
        writeln!(self.text, "Date:   {date}").unwrap();
        writeln!(self.text).unwrap();
        for line in message.lines() {
            writeln!(self.text, "    {line}").unwrap();
        }
        writeln!(self.text).unwrap();
        self
    }

    pub fn build(self) -> String {
        self.text
    }
}
