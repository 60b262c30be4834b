use crate::cli::InitArgs;
use crate::config::Config;
use anyhow::Context;
use std::fs;

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    let yaml = Config::default().to_yaml()?;
    fs::write(&args.path, yaml)
        .with_context(|| format!("Failed to write {}", args.path.display()))?;

    println!("Wrote default config to {}", args.path.display());
    Ok(())
}
