//! Stateful tracker owning the last-reported visible set.
//!
//! This is the dashboard wiring: the rendering surface reports viewports,
//! the catalog reports reloads, and list consumers receive the new
//! visible set only when it actually changed. State lives behind an
//! `RwLock` with every write funneled through the two event handlers, so
//! change detection always compares against a consistent prior snapshot
//! and replacement is atomic from the consumer's point of view.

use std::sync::{Arc, RwLock};

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, trace};

use crate::airport::Airport;
use crate::coord::Extent;

use super::query::{query_extent_airports, QueryOutcome};

/// Event fed to the tracker by the hosting dashboard.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// The map viewport moved (pan/zoom/drag frame).
    ViewportChanged(Extent),
    /// The airport catalog was (re)loaded.
    AirportsChanged(Vec<Airport>),
}

/// Configuration for the viewport tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Channel capacity for visible-set broadcasts.
    pub visible_channel_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            visible_channel_capacity: 16,
        }
    }
}

/// Internal state, written only while holding the lock exclusively.
struct TrackerState {
    /// Current airport catalog snapshot.
    airports: Vec<Airport>,
    /// Last viewport reported by the rendering surface.
    last_extent: Option<Extent>,
    /// Last reported visible set; replaced wholesale, never mutated.
    visible: Vec<Airport>,
}

/// Tracks the airports visible in the current viewport.
///
/// Offers both a pull API ([`visible`](Self::visible)) and a push API
/// ([`subscribe`](Self::subscribe)); subscribers receive the complete
/// replacement set, not a delta, and only when the set actually changed.
pub struct ViewportTracker {
    state: RwLock<TrackerState>,

    /// Broadcast channel for visible-set replacements.
    visible_tx: broadcast::Sender<Vec<Airport>>,
}

impl ViewportTracker {
    /// Create a new tracker with the given configuration.
    pub fn new(config: TrackerConfig) -> Self {
        let (visible_tx, _) = broadcast::channel(config.visible_channel_capacity);

        Self {
            state: RwLock::new(TrackerState {
                airports: Vec::new(),
                last_extent: None,
                visible: Vec::new(),
            }),
            visible_tx,
        }
    }

    /// Create a tracker with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TrackerConfig::default())
    }

    /// Handle a viewport reported by the rendering surface.
    ///
    /// Synchronous and cheap enough to run on every drag frame: one
    /// split, one linear scan, one set comparison.
    pub fn viewport_changed(&self, raw: Extent) {
        trace!(extent = %raw, "Viewport reported");

        if let Ok(mut state) = self.state.write() {
            state.last_extent = Some(raw);
            self.requery_locked(&mut state, &raw);
        }
    }

    /// Handle a catalog (re)load.
    ///
    /// Re-filters against the last-known viewport; before any viewport
    /// has been reported nothing is visible, so no notification fires.
    pub fn airports_changed(&self, airports: Vec<Airport>) {
        debug!(count = airports.len(), "Airport catalog replaced");

        if let Ok(mut state) = self.state.write() {
            state.airports = airports;
            if let Some(raw) = state.last_extent {
                self.requery_locked(&mut state, &raw);
            }
        }
    }

    /// Current visible set (pull API).
    pub fn visible(&self) -> Vec<Airport> {
        self.state
            .read()
            .map(|s| s.visible.clone())
            .unwrap_or_default()
    }

    /// Last viewport reported, if any.
    pub fn last_extent(&self) -> Option<Extent> {
        self.state.read().ok().and_then(|s| s.last_extent)
    }

    /// Subscribe to visible-set replacements (push API).
    ///
    /// Fires only when the set changed; each message is the authoritative
    /// replacement for "what is visible".
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Airport>> {
        self.visible_tx.subscribe()
    }

    /// Start the tracker's event processing loop for channel-fed hosts.
    ///
    /// Spawns a task that applies [`DashboardEvent`]s in arrival order
    /// until the sender side is dropped.
    pub fn start(
        self: Arc<Self>,
        mut rx: mpsc::UnboundedReceiver<DashboardEvent>,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            debug!("Viewport tracker started, waiting for dashboard events");

            while let Some(event) = rx.recv().await {
                match event {
                    DashboardEvent::ViewportChanged(extent) => self.viewport_changed(extent),
                    DashboardEvent::AirportsChanged(airports) => self.airports_changed(airports),
                }
            }

            debug!("Viewport tracker stopped (channel closed)");
        })
    }

    /// Re-run the query pipeline and publish the result on change.
    ///
    /// Caller holds the write lock, so the previous snapshot cannot move
    /// under the comparison.
    fn requery_locked(&self, state: &mut TrackerState, raw: &Extent) {
        match query_extent_airports(&state.airports, raw, &state.visible) {
            QueryOutcome::Changed(visible) => {
                debug!(count = visible.len(), "Visible airports changed");
                state.visible = visible.clone();
                // Broadcast the replacement (no subscribers is OK)
                let _ = self.visible_tx.send(visible);
            }
            QueryOutcome::Unchanged => {
                trace!("Visible airports unchanged, notification suppressed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::AirportType;
    use crate::coord::GeoPoint;
    use tokio::sync::broadcast::error::TryRecvError;

    fn apt(id: u32, lon: f64, lat: f64) -> Airport {
        Airport::new(
            id,
            "TST",
            "Test Field",
            "Testville",
            "Testland",
            AirportType::Domestic,
            1,
            0,
            GeoPoint::new(lon, lat),
        )
    }

    fn catalog() -> Vec<Airport> {
        vec![apt(1, -97.0, 40.0), apt(2, 178.0, 10.0), apt(3, -179.0, 10.0)]
    }

    #[test]
    fn test_nothing_visible_before_viewport() {
        let tracker = ViewportTracker::with_defaults();
        tracker.airports_changed(catalog());
        assert!(tracker.visible().is_empty());
        assert!(tracker.last_extent().is_none());
    }

    #[test]
    fn test_viewport_then_visible() {
        let tracker = ViewportTracker::with_defaults();
        tracker.airports_changed(catalog());
        tracker.viewport_changed(Extent::new(-120.0, 30.0, -90.0, 50.0));

        let ids: Vec<u32> = tracker.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_broadcast_fires_only_on_change() {
        let tracker = ViewportTracker::with_defaults();
        let mut rx = tracker.subscribe();

        tracker.airports_changed(catalog());
        let raw = Extent::new(170.0, 0.0, -170.0, 20.0);
        tracker.viewport_changed(raw);

        let visible = rx.try_recv().expect("first viewport must notify");
        let ids: Vec<u32> = visible.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);

        // Same viewport again: suppressed.
        tracker.viewport_changed(raw);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        // Geometrically identical but differently framed: still suppressed.
        tracker.viewport_changed(Extent::new(-190.0, 0.0, -150.0, 20.0));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_catalog_reload_refilters_last_viewport() {
        let tracker = ViewportTracker::with_defaults();
        tracker.airports_changed(catalog());
        tracker.viewport_changed(Extent::new(170.0, 0.0, -170.0, 20.0));
        assert_eq!(tracker.visible().len(), 2);

        // Reload drops airport 3 from the catalog.
        tracker.airports_changed(vec![apt(1, -97.0, 40.0), apt(2, 178.0, 10.0)]);
        let ids: Vec<u32> = tracker.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_identical_catalog_reload_suppressed() {
        let tracker = ViewportTracker::with_defaults();
        let mut rx = tracker.subscribe();

        tracker.airports_changed(catalog());
        tracker.viewport_changed(Extent::new(-120.0, 30.0, -90.0, 50.0));
        rx.try_recv().expect("first viewport must notify");

        // A second fetch of the same underlying catalog is the same set.
        tracker.airports_changed(catalog());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_empty_transition_notifies_once() {
        let tracker = ViewportTracker::with_defaults();
        let mut rx = tracker.subscribe();

        tracker.airports_changed(catalog());
        tracker.viewport_changed(Extent::new(-120.0, 30.0, -90.0, 50.0));
        rx.try_recv().expect("first viewport must notify");

        // Pan to open ocean: one notification with the empty set.
        tracker.viewport_changed(Extent::new(-40.0, -40.0, -30.0, -30.0));
        assert_eq!(rx.try_recv().expect("transition to empty must notify"), vec![]);

        // Staying on open ocean: quiet.
        tracker.viewport_changed(Extent::new(-41.0, -40.0, -31.0, -30.0));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
