//! Building demand entry point — CLI wiring and config-driven model construction.

use std::path::PathBuf;

use anyhow::{Context, Result};
use building_demand::config::BuildingConfig;
use building_demand::demand::{DailySummary, DemandModel};
use building_demand::io::export::export_csv;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Half-hourly electricity demand for a commercial office building.
///
/// If no --config or --preset is given, the baseline preset is used.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Load the building from a TOML config file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Use a built-in preset (baseline, extended_hours, lean_data_centre)
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Reference time, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` (default: now)
    #[arg(long, value_name = "TIME", value_parser = parse_reference_time)]
    at: Option<NaiveDateTime>,

    /// Override the data centre random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Export the demand table to CSV
    #[arg(long, value_name = "PATH")]
    csv_out: Option<PathBuf>,
}

fn parse_reference_time(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(t) = s.parse::<NaiveDateTime>() {
        return Ok(t);
    }
    s.parse::<NaiveDate>()
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| format!("\"{s}\" is neither a date nor a date-time: {e}"))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<BuildingConfig> {
    // --config takes priority, then --preset, then baseline default
    let mut config = if let Some(ref path) = cli.config {
        BuildingConfig::from_toml_file(path)?
    } else if let Some(ref name) = cli.preset {
        BuildingConfig::from_preset(name)?
    } else {
        BuildingConfig::baseline()
    };

    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let mut model = DemandModel::new(config)?;

    let now = cli.at.unwrap_or_else(|| Local::now().naive_local());
    info!(reference = %now, "building demand table");
    let table = model.energy_demand_at(now)?;

    print!("{table}");
    println!("\n{}", DailySummary::from_table(&table));

    if let Some(ref path) = cli.csv_out {
        export_csv(&table, path)
            .with_context(|| format!("failed to write CSV to \"{}\"", path.display()))?;
        eprintln!("Demand table written to {}", path.display());
    }

    Ok(())
}
