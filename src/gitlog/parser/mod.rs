//! Export parser (`git log --numstat`)
//!
//! Scans the export line by line with an explicit state machine instead of
//! splitting the whole text on the header pattern, so a malformed block
//! reports the exact line that broke it.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::GitLogError;
use crate::model::{FileDelta, Revision};


/// Regex for a revision header line
/// Format: `commit <40 hex chars>`, optionally followed by decorations
/// Example: `commit a137816c79714740d7964fe96878febaac014d8a (HEAD -> main)`
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^commit ([0-9a-f]{40})(?:\s|$)").expect("Invalid header regex")
});

/// Date format emitted by `git log` once the timezone token is dropped
/// Example: `Sun Apr 21 04:19:37 2013`
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Scanner position within the export
///
/// Transitions happen on the header pattern and on blank lines:
/// `ExpectHeader -> Metadata -> Message -> Numstat`, with any header line
/// finalizing the current block and starting the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside any block; everything except a header line is ignored
    ExpectHeader,
    /// Header consumed; collecting metadata lines until a blank line
    Metadata,
    /// Collecting message lines until a blank line
    Message,
    /// Collecting numstat lines until the next header
    Numstat,
}

/// One revision block under construction
struct Block {
    id: String,
    header_line: usize,
    metadata: Vec<String>,
    message: Vec<String>,
    deltas: Vec<FileDelta>,
}

impl Block {
    fn new(id: String, header_line: usize) -> Self {
        Self {
            id,
            header_line,
            metadata: Vec::new(),
            message: Vec::new(),
            deltas: Vec::new(),
        }
    }

    /// True if any metadata line carries a second-parent marker
    fn is_merge(&self) -> bool {
        self.metadata.iter().any(|line| line.starts_with("Merge:"))
    }

    /// Validate metadata and produce a revision, or `None` for a merge block
    ///
    /// Merge blocks are dropped before the author or date is even read.
    fn finish(self) -> Result<Option<Revision>, GitLogError> {
        if self.is_merge() {
            return Ok(None);
        }

        let author = self
            .metadata
            .first()
            .and_then(|line| line.strip_prefix("Author: "))
            .ok_or(GitLogError::MissingMetadata {
                line: self.header_line,
                field: "Author",
            })?;

        let date_value = self
            .metadata
            .get(1)
            .and_then(|line| line.strip_prefix("Date:"))
            .ok_or(GitLogError::MissingMetadata {
                line: self.header_line,
                field: "Date",
            })?;
        let timestamp = Parser::parse_date(date_value, self.header_line + 2)?;

        Ok(Some(Revision {
            id: self.id,
            author: author.to_string(),
            timestamp,
            message: self.message.join("\n").trim().to_string(),
            deltas: self.deltas,
        }))
    }
}

/// Parser for export text
pub struct Parser;

impl Parser {
    /// Parse a full export into revisions, in source order
    ///
    /// Zero blocks are fine (empty output). Text before the first header is
    /// ignored. A block missing its author or date line, or carrying an
    /// unparseable date, aborts the parse.
    pub fn parse_export(text: &str) -> Result<Vec<Revision>, GitLogError> {
        let mut revisions = Vec::new();
        let mut state = ScanState::ExpectHeader;
        let mut block: Option<Block> = None;

        for (index, line) in text.lines().enumerate() {
            // A header line finalizes the current block from any state
            if let Some(captures) = HEADER_REGEX.captures(line) {
                if let Some(done) = block.take()
                    && let Some(revision) = done.finish()?
                {
                    revisions.push(revision);
                }
                block = Some(Block::new(captures[1].to_string(), index + 1));
                state = ScanState::Metadata;
                continue;
            }

            let blank = line.trim().is_empty();
            match state {
                ScanState::ExpectHeader => {}
                ScanState::Metadata => {
                    if blank {
                        state = ScanState::Message;
                    } else if let Some(current) = block.as_mut() {
                        current.metadata.push(line.to_string());
                    }
                }
                ScanState::Message => {
                    if blank {
                        state = ScanState::Numstat;
                    } else if let Some(current) = block.as_mut() {
                        // Raw line: inner indentation survives, the whole
                        // message is trimmed once at finish
                        current.message.push(line.to_string());
                    }
                }
                ScanState::Numstat => {
                    if let Some(delta) = Self::parse_numstat_line(line)
                        && let Some(current) = block.as_mut()
                    {
                        current.deltas.push(delta);
                    }
                }
            }
        }

        if let Some(done) = block.take()
            && let Some(revision) = done.finish()?
        {
            revisions.push(revision);
        }

        Ok(revisions)
    }

    /// Parse one numstat line into a FileDelta
    ///
    /// Format: `<added><ws><removed><ws><path>` with elastic whitespace
    /// between tokens. A count token that is not a number (the `-` marker
    /// git emits for binary files) becomes 0. The path keeps interior
    /// whitespace verbatim. Lines with fewer than three tokens are skipped.
    fn parse_numstat_line(line: &str) -> Option<FileDelta> {
        let line = line.trim();
        let (added_token, rest) = line.split_once(char::is_whitespace)?;
        let (removed_token, path) = rest.trim_start().split_once(char::is_whitespace)?;
        let path = path.trim_start();
        if path.is_empty() {
            return None;
        }

        Some(FileDelta {
            path: path.to_string(),
            added: added_token.parse().unwrap_or(0),
            removed: removed_token.parse().unwrap_or(0),
        })
    }

    /// Parse a `Date:` value, dropping the trailing timezone token
    ///
    /// Input: `  Sun Apr 21 04:19:37 2013 +0000`
    /// The offset is discarded, not applied: the timestamp stays in
    /// whatever local frame the export used.
    fn parse_date(value: &str, line: usize) -> Result<NaiveDateTime, GitLogError> {
        let trimmed = value.trim();
        let without_offset = match trimmed.rfind(char::is_whitespace) {
            Some(position) => trimmed[..position].trim_end(),
            None => trimmed,
        };

        NaiveDateTime::parse_from_str(without_offset, DATE_FORMAT).map_err(|_| {
            GitLogError::InvalidDate {
                line,
                value: trimmed.to_string(),
            }
        })
    }
}
