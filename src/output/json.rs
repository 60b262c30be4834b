use super::write_atomic;
use crate::error::OutputError;
use crate::parser::PlanRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryExport {
    pub generated_at: String,
    pub source_dir: String,
    pub total: usize,
    pub plans: Vec<PlanRecord>,
}

/// Write the scanned records as a JSON inventory document
pub fn write_inventory_json(
    path: &Path,
    source_dir: &Path,
    records: &[PlanRecord],
) -> Result<(), OutputError> {
    let export = InventoryExport {
        generated_at: Utc::now().to_rfc3339(),
        source_dir: source_dir.display().to_string(),
        total: records.len(),
        plans: records.to_vec(),
    };

    let mut json = serde_json::to_string_pretty(&export)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_inventory_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plans_inventory.json");
        let records = vec![PlanRecord {
            id: "plan-dev-auth".to_string(),
            title: "Auth Plan".to_string(),
            summary: "Objective: secure login".to_string(),
            status: "à compléter".to_string(),
        }];

        write_inventory_json(&path, Path::new("plans"), &records).unwrap();

        let parsed: InventoryExport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.total, 1);
        assert_eq!(parsed.source_dir, "plans");
        assert_eq!(parsed.plans, records);
        assert!(chrono::DateTime::parse_from_rfc3339(&parsed.generated_at).is_ok());
    }
}
