use super::pattern::{plan_id, NamePattern};
use crate::error::DiscoveryError;
use crate::parser::{Extractor, PlanRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of scanning a plan directory
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Sorted by id
    pub records: Vec<PlanRecord>,
    /// Matching files that could not be read, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// Scan a flat directory for plan files.
///
/// Only the top level is listed. Unreadable plan files are logged and
/// skipped; an unreadable directory aborts the scan.
pub fn scan_plans(
    dir: &Path,
    pattern: &NamePattern,
    extractor: &Extractor,
) -> Result<ScanOutcome, DiscoveryError> {
    let entries = fs::read_dir(dir).map_err(|e| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut outcome = ScanOutcome::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {:?}: {}", dir, e);
                continue;
            }
        };
        let path = entry.path();

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!("Skipping non UTF-8 file name {:?}", path);
            continue;
        };
        if !pattern.matches(file_name) {
            continue;
        }
        if !path.is_file() {
            debug!("Skipping {:?}: not a file", path);
            continue;
        }
        let Some(id) = plan_id(&path) else {
            continue;
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Extracted {}", id);
                outcome.records.push(extractor.extract(&id, &content));
            }
            Err(e) => {
                warn!("Skipping unreadable plan {:?}: {}", path, e);
                outcome.skipped.push((path, e.to_string()));
            }
        }
    }

    outcome.records.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractConfig;
    use tempfile::TempDir;

    fn scan(dir: &Path) -> Result<ScanOutcome, DiscoveryError> {
        let pattern = NamePattern::new("plan-dev-*.md").unwrap();
        let extractor = Extractor::new(&ExtractConfig::default());
        scan_plans(dir, &pattern, &extractor)
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("plan-dev-zeta.md"), "# Zeta\n").unwrap();
        fs::write(dir.path().join("plan-dev-alpha.md"), "# Alpha\nDescription: a\n").unwrap();
        fs::write(dir.path().join("README.md"), "# Readme\n").unwrap();
        fs::write(dir.path().join("plan-dev-notes.txt"), "# Notes\n").unwrap();

        let outcome = scan(dir.path()).unwrap();
        let ids: Vec<_> = outcome.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["plan-dev-alpha", "plan-dev-zeta"]);
        assert_eq!(outcome.records[0].summary, "Description: a");
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("plan-dev-nested.md");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("plan-dev-inner.md"), "# Inner\n").unwrap();

        let outcome = scan(dir.path()).unwrap();
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_scan_empty_dir() {
        let dir = TempDir::new().unwrap();
        let outcome = scan(dir.path()).unwrap();
        assert!(outcome.records.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_scan_skips_unreadable_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("plan-dev-ok.md"), "# Ok\n").unwrap();
        fs::write(dir.path().join("plan-dev-binary.md"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let outcome = scan(dir.path()).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, "plan-dev-ok");
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.skipped[0].0.ends_with("plan-dev-binary.md"));
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = TempDir::new().unwrap();
        let result = scan(&dir.path().join("missing"));
        assert!(matches!(result, Err(DiscoveryError::ReadDir { .. })));
    }
}
