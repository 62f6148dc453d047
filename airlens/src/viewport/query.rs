//! Single-shot viewport query pipeline.

use crate::airport::Airport;
use crate::coord::{split_extent, Extent};

use super::change::visible_set_changed;
use super::filter::filter_by_extents;

/// Outcome of a viewport query.
///
/// The unchanged branch carries nothing, so callers keep their previous
/// result without a fresh allocation or a downstream notification.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The visible set is set-equal to the previous result.
    Unchanged,
    /// The visible set changed; this is the complete replacement.
    Changed(Vec<Airport>),
}

impl QueryOutcome {
    /// Returns `true` for the changed branch.
    pub fn is_changed(&self) -> bool {
        matches!(self, QueryOutcome::Changed(_))
    }
}

/// Runs the full split → filter → compare pipeline for one raw viewport.
///
/// Pure with respect to its explicit inputs; the calling layer owns
/// previous-result persistence. Malformed extents (inverted latitudes,
/// zero width without the antimeridian case) filter to an empty set
/// rather than erroring.
pub fn query_extent_airports(
    airports: &[Airport],
    raw: &Extent,
    previous: &[Airport],
) -> QueryOutcome {
    let extents = split_extent(raw);
    let visible = filter_by_extents(airports, &extents);

    if visible_set_changed(previous, &visible) {
        QueryOutcome::Changed(visible)
    } else {
        QueryOutcome::Unchanged
    }
}
