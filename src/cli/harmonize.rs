use crate::cli::table::build_table;
use crate::cli::HarmonizeArgs;
use crate::config::Config;

pub fn execute(args: HarmonizeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(dir) = args.dir {
        config.plans_dir = dir;
    }
    if let Some(output) = args.output {
        config.harmonize.output = output;
    }

    let outcome = build_table(
        &config,
        &config.harmonize.output,
        config.harmonize.include_summary,
        args.dry_run,
    )?;

    if !args.dry_run {
        println!(
            "Harmonized {} plans into {} ({} skipped)",
            outcome.records.len(),
            config.harmonize.output.display(),
            outcome.skipped.len()
        );
    }

    Ok(())
}
