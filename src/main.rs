use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod aggregate;
mod cli;
mod config;
mod discovery;
mod error;
mod output;
mod parser;

use cli::{Cli, Commands};
use config::Config;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --dry-run output stays clean
    let filter = if cli.verbose {
        EnvFilter::new("plankit=debug")
    } else {
        EnvFilter::new("plankit=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Harmonize(args) => cli::harmonize::execute(args, load_config(config_path)?),
        Commands::Inventory(args) => cli::inventory::execute(args, load_config(config_path)?),
        Commands::Report(args) => cli::report::execute(args, load_config(config_path)?),
        Commands::Init(args) => cli::init::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::resolve(path)?;
    config.validate()?;
    Ok(config)
}
