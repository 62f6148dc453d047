//! Airlens - viewport-driven airport visibility for map dashboards
//!
//! This library determines which airports fall inside a map viewport,
//! correctly across the ±180° antimeridian, and detects when that visible
//! set actually changes so list consumers are not redundantly notified.
//!
//! # High-Level API
//!
//! For most use cases, the [`viewport`] module's tracker is the entry point:
//!
//! ```ignore
//! use airlens::airport::AirportCatalog;
//! use airlens::coord::Extent;
//! use airlens::viewport::ViewportTracker;
//!
//! let catalog = AirportCatalog::from_json_path("airports.json")?;
//! let tracker = ViewportTracker::with_defaults();
//!
//! tracker.airports_changed(catalog.airports().to_vec());
//! tracker.viewport_changed(Extent::new(170.0, 0.0, -170.0, 20.0));
//!
//! for airport in tracker.visible() {
//!     println!("{} ({})", airport.name, airport.code);
//! }
//! ```

pub mod airport;
pub mod coord;
pub mod logging;
pub mod viewport;

/// Version of the Airlens library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
