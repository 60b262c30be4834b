use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "plankit.yaml";

pub fn default_version() -> u32 {
    1
}

pub fn default_plans_dir() -> PathBuf {
    PathBuf::from("plans")
}

pub fn default_pattern() -> String {
    "plan-dev-*.md".to_string()
}

pub fn default_summary_keywords() -> Vec<String> {
    vec!["objective".to_string(), "description".to_string()]
}

pub fn default_placeholder_status() -> String {
    "à compléter".to_string()
}

pub fn default_harmonized_output() -> PathBuf {
    PathBuf::from("plans_harmonized.md")
}

pub fn default_inventory_output() -> PathBuf {
    PathBuf::from("plans_inventory.md")
}

pub fn default_inventory_json() -> PathBuf {
    PathBuf::from("plans_inventory.json")
}

pub fn default_report_table() -> PathBuf {
    default_harmonized_output()
}

pub fn default_report_output() -> PathBuf {
    PathBuf::from("orchestration_conflicts_report.md")
}

pub fn default_report_keywords() -> Vec<String> {
    vec!["conflict".to_string(), "duplicate".to_string()]
}

pub fn default_true() -> bool {
    true
}
