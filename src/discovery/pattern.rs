use crate::error::DiscoveryError;
use globset::{Glob, GlobMatcher};
use std::path::Path;

/// File name convention for plan files, e.g. `plan-dev-*.md`
#[derive(Debug, Clone)]
pub struct NamePattern {
    matcher: GlobMatcher,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, DiscoveryError> {
        let glob = Glob::new(pattern).map_err(|e| DiscoveryError::GlobPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// Match against the bare file name
    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }
}

/// Plan id: the file name with its extension stripped
pub fn plan_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_convention() {
        let pattern = NamePattern::new("plan-dev-*.md").unwrap();
        assert!(pattern.matches("plan-dev-auth.md"));
        assert!(pattern.matches("plan-dev-v2.1-cache.md"));
        assert!(!pattern.matches("plan-dev-auth.txt"));
        assert!(!pattern.matches("plan-auth.md"));
        assert!(!pattern.matches("PLAN-DEV-auth.md"));
        assert!(!pattern.matches("notes-plan-dev-auth.md"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = NamePattern::new("plan-dev-{a.md");
        assert!(matches!(result, Err(DiscoveryError::GlobPattern { .. })));
    }

    #[test]
    fn test_plan_id_strips_only_extension() {
        assert_eq!(
            plan_id(Path::new("plans/plan-dev-v1.2.md")),
            Some("plan-dev-v1.2".to_string())
        );
        assert_eq!(
            plan_id(Path::new("plan-dev-auth.md")),
            Some("plan-dev-auth".to_string())
        );
    }
}
