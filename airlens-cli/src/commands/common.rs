//! Shared helpers for CLI commands.

use airlens::airport::Airport;

/// Print airports as a fixed-width table, list-view style.
pub fn print_airport_table(airports: &[Airport]) {
    if airports.is_empty() {
        println!("No airports in range. Try a different viewport!");
        return;
    }

    println!(
        "{:<4} {:<5} {:<34} {:<16} {:<14} {:>7} {:>9}  {}",
        "ID", "CODE", "NAME", "CITY", "TYPE", "RWY", "ELEV FT", "POSITION"
    );
    for airport in airports {
        println!(
            "{:<4} {:<5} {:<34} {:<16} {:<14} {:>7} {:>9}  {}",
            airport.id,
            airport.code,
            truncated(&airport.name, 34),
            truncated(&airport.city, 16),
            airport.airport_type,
            airport.runways,
            airport.elevation,
            airport.position,
        );
    }
}

fn truncated(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
