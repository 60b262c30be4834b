use serde::{Deserialize, Serialize};

/// Metadata extracted from one plan file.
///
/// Records only live for the duration of a scan; what persists is the
/// rendered table row (or the JSON export).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// File name without the `.md` extension
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub status: String,
}
