use crate::config::Config;
use crate::discovery::{scan_plans, NamePattern, ScanOutcome};
use crate::output::{render_table, write_table, Column};
use crate::parser::Extractor;
use std::path::Path;
use tracing::{info, warn};

/// Shared scan → render pipeline behind `harmonize` and `inventory`
pub(crate) fn build_table(
    config: &Config,
    output: &Path,
    include_summary: bool,
    dry_run: bool,
) -> anyhow::Result<ScanOutcome> {
    let pattern = NamePattern::new(&config.naming.pattern)?;
    let extractor = Extractor::new(&config.extract);

    info!(
        "Scanning {:?} for {}",
        config.plans_dir, config.naming.pattern
    );
    let outcome = scan_plans(&config.plans_dir, &pattern, &extractor)?;

    for (path, reason) in &outcome.skipped {
        warn!("Missing row for {:?}: {}", path, reason);
    }

    let columns = Column::layout(include_summary);
    if dry_run {
        print!("{}", render_table(&outcome.records, &columns));
    } else {
        write_table(output, &outcome.records, &columns)?;
        info!("Wrote {} plans to {:?}", outcome.records.len(), output);
    }

    Ok(outcome)
}
