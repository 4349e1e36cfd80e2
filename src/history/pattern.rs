//! Filename pattern matching for queries

use regex::Regex;

/// Caller-supplied filename pattern
///
/// A path matches when it equals the raw pattern exactly or when an
/// unanchored regex search over it succeeds; whichever test is looser
/// wins. A pattern that is not a valid regex degrades to substring
/// containment instead of erroring, so pattern queries stay total.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    regex: Option<Regex>,
}

impl PathPattern {
    /// Compile a pattern; never fails
    pub fn new(pattern: impl Into<String>) -> Self {
        let raw = pattern.into();
        let regex = Regex::new(&raw).ok();
        Self { raw, regex }
    }

    /// The raw pattern text, usable as a chart label
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if `path` matches by equality, regex search, or substring
    pub fn matches(&self, path: &str) -> bool {
        if path == self.raw {
            return true;
        }
        match &self.regex {
            Some(regex) => regex.is_match(path),
            None => path.contains(&self.raw),
        }
    }
}

impl From<&str> for PathPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}
