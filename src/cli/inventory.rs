use crate::cli::table::build_table;
use crate::cli::InventoryArgs;
use crate::config::Config;
use crate::output::write_inventory_json;
use tracing::info;

pub fn execute(args: InventoryArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(dir) = args.dir {
        config.plans_dir = dir;
    }
    if let Some(output) = args.output {
        config.inventory.output = output;
    }
    if args.json {
        config.inventory.emit_json = true;
    }

    let inventory = &config.inventory;
    let outcome = build_table(
        &config,
        &inventory.output,
        inventory.include_summary,
        args.dry_run,
    )?;

    if args.dry_run {
        return Ok(());
    }

    if inventory.emit_json {
        write_inventory_json(&inventory.json_output, &config.plans_dir, &outcome.records)?;
        info!("Wrote JSON inventory to {:?}", inventory.json_output);
    }

    println!(
        "Inventoried {} plans into {} ({} skipped)",
        outcome.records.len(),
        inventory.output.display(),
        outcome.skipped.len()
    );

    Ok(())
}
