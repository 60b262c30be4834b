use super::write_atomic;
use crate::error::OutputError;
use std::path::Path;

const REPORT_HEADER: &str = "# Plan Conflicts Report";
const NO_CONFLICTS: &str = "No conflicts or duplicates found.";

/// Header, blank line, then the matched lines verbatim (or the placeholder)
pub fn render_report(matched: &[String]) -> String {
    let mut content = String::new();
    content.push_str(REPORT_HEADER);
    content.push_str("\n\n");

    if matched.is_empty() {
        content.push_str(NO_CONFLICTS);
        content.push('\n');
    } else {
        for line in matched {
            content.push_str(line);
            content.push('\n');
        }
    }

    content
}

pub fn write_report(path: &Path, matched: &[String]) -> Result<(), OutputError> {
    let content = render_report(matched);
    write_atomic(path, content.as_bytes())
}
