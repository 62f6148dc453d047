//! Streaming viewport watch command.
//!
//! Reads one raw extent per stdin line (`min_lon min_lat max_lon max_lat`)
//! and re-queries on each, printing the visible set only when it changed.
//! This mirrors the dashboard delivering a viewport every drag frame.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Args;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::info;

use airlens::airport::{Airport, AirportCatalog};
use airlens::coord::Extent;
use airlens::logging;
use airlens::viewport::ViewportTracker;

use crate::commands::common;
use crate::error::CliError;

/// Arguments for `airlens watch`.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Path to the airport catalog JSON file
    #[arg(long)]
    pub catalog: PathBuf,
}

/// Run the watch loop until stdin closes.
pub fn run(args: WatchArgs) -> Result<(), CliError> {
    let _guard = logging::init_logging(logging::default_log_dir(), logging::default_log_file())?;

    let catalog = AirportCatalog::from_json_path(&args.catalog)?;
    info!(catalog = %args.catalog.display(), count = catalog.len(), "Watching viewports from stdin");

    let tracker = ViewportTracker::with_defaults();
    let mut visible_rx = tracker.subscribe();
    tracker.airports_changed(catalog.airports().to_vec());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let raw = parse_extent(line)?;
        tracker.viewport_changed(raw);

        match latest_notification(&mut visible_rx) {
            Some(visible) => {
                println!("viewport {} -> {} airports", raw, visible.len());
                common::print_airport_table(&visible);
                println!();
            }
            None => println!("viewport {} -> unchanged", raw),
        }
    }

    Ok(())
}

/// Parse a raw extent from a whitespace-separated bounds line.
fn parse_extent(line: &str) -> Result<Extent, CliError> {
    let bounds: Vec<f64> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| CliError::InvalidExtent(line.to_string()))?;

    match bounds[..] {
        [min_lon, min_lat, max_lon, max_lat] => {
            Ok(Extent::new(min_lon, min_lat, max_lon, max_lat))
        }
        _ => Err(CliError::InvalidExtent(line.to_string())),
    }
}

/// Drain the subscription, keeping only the newest replacement set.
///
/// The tracker handlers run synchronously, so at most one message is
/// pending per viewport; draining also recovers from a lagged receiver.
fn latest_notification(
    rx: &mut tokio::sync::broadcast::Receiver<Vec<Airport>>,
) -> Option<Vec<Airport>> {
    let mut latest = None;
    loop {
        match rx.try_recv() {
            Ok(visible) => latest = Some(visible),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    latest
}
