//! One-shot viewport query command.

use std::path::PathBuf;

use clap::Args;

use airlens::airport::AirportCatalog;
use airlens::coord::{split_extent, Extent};
use airlens::viewport::filter_by_extents;

use crate::commands::common;
use crate::error::CliError;

/// Arguments for `airlens query`.
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Path to the airport catalog JSON file
    #[arg(long)]
    pub catalog: PathBuf,

    /// Western viewport bound in degrees (raw; may lie outside ±180)
    #[arg(long, allow_hyphen_values = true)]
    pub min_lon: f64,

    /// Southern viewport bound in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub min_lat: f64,

    /// Eastern viewport bound in degrees (raw; may lie outside ±180)
    #[arg(long, allow_hyphen_values = true)]
    pub max_lon: f64,

    /// Northern viewport bound in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub max_lat: f64,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run a one-shot viewport query.
pub fn run(args: QueryArgs) -> Result<(), CliError> {
    let catalog = AirportCatalog::from_json_path(&args.catalog)?;

    let raw = Extent::new(args.min_lon, args.min_lat, args.max_lon, args.max_lat);
    let extents = split_extent(&raw);
    let visible = filter_by_extents(catalog.airports(), &extents);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        common::print_airport_table(&visible);
        println!();
        println!("{} of {} airports in view {}", visible.len(), catalog.len(), raw);
    }

    Ok(())
}
