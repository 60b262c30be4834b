//! Conflict/duplicate detection over a rendered plan table.
//!
//! Matching is a literal, case-insensitive substring search over whole lines.
//! A keyword inside any field value counts, so unrelated text can match.

use crate::error::ReportError;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;

pub struct KeywordMatcher {
    re: Regex,
}

impl KeywordMatcher {
    pub fn new(keywords: &[String]) -> Result<Self, ReportError> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Err(ReportError::NoKeywords);
        }

        let re = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()?;
        Ok(Self { re })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.re.is_match(line)
    }

    /// Lines containing a keyword, verbatim and in order
    pub fn matching_lines(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| self.is_match(line))
            .map(|line| line.to_string())
            .collect()
    }
}

/// Read a rendered table and collect the lines that mention a keyword.
/// The table is not validated against any schema.
pub fn collect_conflicts(table: &Path, matcher: &KeywordMatcher) -> Result<Vec<String>, ReportError> {
    let content = fs::read_to_string(table).map_err(|e| ReportError::ReadTable {
        path: table.to_path_buf(),
        source: e,
    })?;
    Ok(matcher.matching_lines(&content))
}
