//! Viewport queries over the airport catalog
//!
//! This module answers one question for the dashboard: which airports are
//! inside the viewport the map is currently showing, and did that set
//! change since the last report?
//!
//! # Data Flow
//!
//! ```text
//! rendering surface ──viewport──► split ──► filter ──► compare ──► list view
//!                                (coord)   (filter)   (change)    (on change only)
//! ```
//!
//! The pure pipeline lives in [`query_extent_airports`]; the stateful
//! [`ViewportTracker`] owns the last-reported result between events and
//! suppresses redundant notifications, which matters because the map
//! reports a viewport on every pan/zoom/drag frame.
//!
//! # Example
//!
//! ```ignore
//! use airlens::coord::Extent;
//! use airlens::viewport::ViewportTracker;
//!
//! let tracker = ViewportTracker::with_defaults();
//! let mut visible_rx = tracker.subscribe();
//!
//! tracker.airports_changed(catalog.airports().to_vec());
//! tracker.viewport_changed(Extent::new(170.0, 0.0, -170.0, 20.0));
//! // visible_rx receives the complete replacement set, but only on change.
//! ```

mod change;
mod filter;
mod query;
mod tracker;

pub use change::visible_set_changed;
pub use filter::filter_by_extents;
pub use query::{query_extent_airports, QueryOutcome};
pub use tracker::{DashboardEvent, TrackerConfig, ViewportTracker};
