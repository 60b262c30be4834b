pub mod harmonize;
pub mod init;
pub mod inventory;
pub mod report;
pub mod schema;
mod table;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plankit")]
#[command(
    author,
    version,
    about = "Inventory, harmonize and report on plan-dev Markdown plans"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (default: plankit.yaml if present)
    #[arg(short, long, global = true, env = "PLANKIT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the harmonized plan table
    Harmonize(HarmonizeArgs),

    /// Build the plan inventory table (with summaries)
    Inventory(InventoryArgs),

    /// Report table rows mentioning conflicts or duplicates
    Report(ReportArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct HarmonizeArgs {
    /// Override plans directory
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Override output table path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the table instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct InventoryArgs {
    /// Override plans directory
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Override output table path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the JSON inventory
    #[arg(long)]
    pub json: bool,

    /// Print the table instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct ReportArgs {
    /// Override rendered table to scan
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Override report output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override keywords (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,

    /// Print the report instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(long, default_value = "plankit.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
