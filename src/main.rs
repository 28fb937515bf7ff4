//! furnace-optimize - CLI tool to pick the heaviest furnace load from a plate inventory.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use furnace_loader::{
    default_output_path, parse_plate_file, validate_table, FurnacePreset, LoadPlan, SolveOptions,
};

/// Select steel plates that load a furnace to maximum weight.
#[derive(Parser, Debug)]
#[command(name = "furnace-optimize")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input inventory (.xlsx, .xls or .csv) with 'Plate Weight' and 'Plate Thickness' columns
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (.xlsx or .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Furnace preset: 1 (100 MT, 350 mm) or 2 (200 MT, 700 mm)
    #[arg(short, long, default_value = "1")]
    furnace: FurnacePreset,

    /// Time budget for the exact solve, in milliseconds
    #[arg(long, default_value_t = furnace_loader::config::DEFAULT_TIME_LIMIT_MS)]
    time_limit_ms: u64,

    /// Fail instead of falling back to an approximate selection
    #[arg(long)]
    exact_only: bool,

    /// Validate only, don't optimize
    #[arg(long)]
    validate: bool,

    /// Output the selection as JSON instead of writing a file
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());
    info!("Selected furnace: {}", args.furnace);

    // Read the inventory
    let table = parse_plate_file(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    info!("Read {} plate(s)", table.len());

    // Validate
    let capacity = args.furnace.capacity();
    let validation = validate_table(&table, capacity)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Optimize
    let mut options = SolveOptions::default().with_time_limit_ms(args.time_limit_ms);
    if args.exact_only {
        options = options.exact_only();
    }

    let plan =
        LoadPlan::from_validated(table, args.furnace, &options).context("Optimization failed")?;
    let selection = &plan.selection;

    info!("Selected {} plates", selection.count());
    info!("Total Weight: {:.2} MT", selection.total_weight);
    info!("Total Thickness: {:.0} mm", selection.total_thickness);
    info!(
        "Utilization: {:.1}% of weight capacity, {:.2} MT and {:.0} mm to spare",
        selection.weight_utilization() * 100.0,
        selection.remaining_weight(),
        selection.remaining_thickness()
    );
    if selection.approximate {
        warn!("Approximate result: the exact solve did not finish within its budget");
    }

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(selection)?;
        println!("{}", json);
        return Ok(());
    }

    // Write output
    let output_path = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input, args.furnace));

    plan.write_to(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
