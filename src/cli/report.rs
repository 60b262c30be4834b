use crate::aggregate::{collect_conflicts, KeywordMatcher};
use crate::cli::ReportArgs;
use crate::config::Config;
use crate::output::{render_report, write_report};
use tracing::info;

pub fn execute(args: ReportArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(table) = args.table {
        config.report.table = table;
    }
    if let Some(output) = args.output {
        config.report.output = output;
    }
    if let Some(keywords) = args.keywords {
        config.report.keywords = keywords;
    }

    let report = &config.report;
    let matcher = KeywordMatcher::new(&report.keywords)?;

    info!("Scanning {:?} for {:?}", report.table, report.keywords);
    let matched = collect_conflicts(&report.table, &matcher)?;

    if args.dry_run {
        print!("{}", render_report(&matched));
        return Ok(());
    }

    write_report(&report.output, &matched)?;
    println!(
        "Found {} matching rows in {}, report written to {}",
        matched.len(),
        report.table.display(),
        report.output.display()
    );

    Ok(())
}
