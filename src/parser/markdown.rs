use super::PlanRecord;
use crate::config::ExtractConfig;

/// Pulls a [`PlanRecord`] out of plan file content.
#[derive(Debug, Clone)]
pub struct Extractor {
    summary_keywords: Vec<String>,
    placeholder_status: String,
}

impl Extractor {
    pub fn new(config: &ExtractConfig) -> Self {
        let summary_keywords = config
            .summary_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self {
            summary_keywords,
            placeholder_status: config.placeholder_status.clone(),
        }
    }

    pub fn extract(&self, id: &str, content: &str) -> PlanRecord {
        PlanRecord {
            id: id.to_string(),
            title: extract_title(content).unwrap_or_else(|| id.to_string()),
            summary: extract_summary(content, &self.summary_keywords).unwrap_or_default(),
            status: self.placeholder_status.clone(),
        }
    }
}

/// First top-level heading (`# Title`), marker and whitespace stripped.
///
/// `##` and deeper headings never count, nor does `#Title` without a space.
/// A bare `#` line is skipped.
pub fn extract_title(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix('#')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let title = rest.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

/// First line containing any keyword, compared lowercase. Keywords must
/// already be lowercased.
pub fn extract_summary(content: &str, keywords: &[String]) -> Option<String> {
    content
        .lines()
        .find(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .map(|line| line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["objective".to_string(), "description".to_string()]
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("intro\n# Auth Plan\n# Second\n"),
            Some("Auth Plan".to_string())
        );
    }

    #[test]
    fn test_extract_title_surrounding_whitespace() {
        assert_eq!(
            extract_title("   #    Migration Roadmap   \n"),
            Some("Migration Roadmap".to_string())
        );
        assert_eq!(extract_title("#\tTabbed\r\n"), Some("Tabbed".to_string()));
    }

    #[test]
    fn test_extract_title_ignores_subheadings() {
        assert_eq!(extract_title("## Context\n### Detail\n#NoSpace\n"), None);
        assert_eq!(
            extract_title("## Context\n#\n# Real Title\n"),
            Some("Real Title".to_string())
        );
    }

    #[test]
    fn test_extract_summary_case_insensitive() {
        let content = "# Plan\nSome text\n**OBJECTIVE**: ship it\nDescription: later\n";
        assert_eq!(
            extract_summary(content, &keywords()),
            Some("**OBJECTIVE**: ship it".to_string())
        );
    }

    #[test]
    fn test_extract_summary_missing() {
        assert_eq!(extract_summary("# Plan\nnothing here\n", &keywords()), None);
        assert_eq!(extract_summary("Objective: x", &[]), None);
    }

    #[test]
    fn test_extract_record_defaults() {
        let extractor = Extractor::new(&ExtractConfig::default());
        let record = extractor.extract("plan-dev-empty", "no heading\n");
        assert_eq!(record.title, "plan-dev-empty");
        assert_eq!(record.summary, "");
        assert_eq!(record.status, "à compléter");
    }

    #[test]
    fn test_extract_record_auth_example() {
        let extractor = Extractor::new(&ExtractConfig::default());
        let record = extractor.extract("plan-dev-auth", "# Auth Plan\nObjective: secure login\n");
        assert_eq!(
            record,
            PlanRecord {
                id: "plan-dev-auth".to_string(),
                title: "Auth Plan".to_string(),
                summary: "Objective: secure login".to_string(),
                status: "à compléter".to_string(),
            }
        );
    }

    #[test]
    fn test_extractor_normalizes_keywords() {
        let config = ExtractConfig {
            summary_keywords: vec!["  Goal ".to_string(), String::new()],
            placeholder_status: "todo".to_string(),
        };
        let record = Extractor::new(&config).extract("plan-dev-x", "# X\nOur GOAL is speed\n");
        assert_eq!(record.summary, "Our GOAL is speed");
        assert_eq!(record.status, "todo");
    }
}
