use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Flat directory holding the plan files
    #[serde(default = "default_plans_dir")]
    pub plans_dir: PathBuf,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub harmonize: HarmonizeConfig,

    #[serde(default)]
    pub inventory: InventoryConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct NamingConfig {
    /// Glob matched against file names (not paths)
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ExtractConfig {
    /// A line containing any of these (case-insensitive) becomes the summary
    #[serde(default = "default_summary_keywords")]
    pub summary_keywords: Vec<String>,

    #[serde(default = "default_placeholder_status")]
    pub placeholder_status: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            summary_keywords: default_summary_keywords(),
            placeholder_status: default_placeholder_status(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct HarmonizeConfig {
    #[serde(default = "default_harmonized_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub include_summary: bool,
}

impl Default for HarmonizeConfig {
    fn default() -> Self {
        Self {
            output: default_harmonized_output(),
            include_summary: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct InventoryConfig {
    #[serde(default = "default_inventory_output")]
    pub output: PathBuf,

    #[serde(default = "default_true")]
    pub include_summary: bool,

    #[serde(default = "default_inventory_json")]
    pub json_output: PathBuf,

    #[serde(default)]
    pub emit_json: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            output: default_inventory_output(),
            include_summary: true,
            json_output: default_inventory_json(),
            emit_json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ReportConfig {
    /// Previously rendered table to scan
    #[serde(default = "default_report_table")]
    pub table: PathBuf,

    #[serde(default = "default_report_output")]
    pub output: PathBuf,

    #[serde(default = "default_report_keywords")]
    pub keywords: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            table: default_report_table(),
            output: default_report_output(),
            keywords: default_report_keywords(),
        }
    }
}
