use std::fmt;

use serde::Serialize;

/// Placeholder title attached to mismatched results when the registry carries titles.
pub const NO_MATCH_TITLE: &str = "(not in registry)";

/// One `rc.type is "..."` capture found in a policy file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Base name of the file the capture came from (not the full path).
    pub filename: String,
    pub resource_type: String,
}

impl Occurrence {
    pub fn new(filename: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            resource_type: resource_type.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    Match,
    Mismatch,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Match => "Match",
            MatchStatus::Mismatch => "Mismatch",
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchStatus::Match)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An occurrence annotated with its registry lookup outcome.
///
/// Field order here is the column order of both the spreadsheet and the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedResult {
    pub filename: String,
    pub resource_type: String,
    /// Only present when the registry was loaded in titled-map form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_title: Option<String>,
    #[serde(rename = "match")]
    pub status: MatchStatus,
}

/// Ordered classification output handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub results: Vec<ClassifiedResult>,
    /// True when the registry carried titles, so the `registry_title` column is emitted
    /// even when there are no results.
    pub titled: bool,
}

impl Comparison {
    pub fn match_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_match()).count()
    }

    pub fn mismatch_count(&self) -> usize {
        self.results.len() - self.match_count()
    }

    /// Column headers in output order.
    pub fn headers(&self) -> Vec<&'static str> {
        if self.titled {
            vec!["filename", "resource_type", "registry_title", "match"]
        } else {
            vec!["filename", "resource_type", "match"]
        }
    }
}

impl ClassifiedResult {
    /// Cell values in the same order as [`Comparison::headers`].
    pub fn cells(&self, titled: bool) -> Vec<&str> {
        let mut cells = vec![self.filename.as_str(), self.resource_type.as_str()];
        if titled {
            cells.push(self.registry_title.as_deref().unwrap_or(NO_MATCH_TITLE));
        }
        cells.push(self.status.as_str());
        cells
    }
}
