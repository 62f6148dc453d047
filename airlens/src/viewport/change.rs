//! Set-equality change detection over airport identities.

use std::collections::HashSet;

use crate::airport::Airport;

/// Returns `true` when the two visible sets differ.
///
/// Collections compare as unordered sets of airport ids: the length
/// check short-circuits, then an id set built from `previous` is probed
/// from `current`. O(n) per call, which matters because this sits on
/// the per-drag-frame path. Both inputs are already de-duplicated by
/// the filter, so equal length plus full membership means set equality.
pub fn visible_set_changed(previous: &[Airport], current: &[Airport]) -> bool {
    if previous.len() != current.len() {
        return true;
    }

    let previous_ids: HashSet<u32> = previous.iter().map(|a| a.id).collect();
    current.iter().any(|a| !previous_ids.contains(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::AirportType;
    use crate::coord::GeoPoint;

    fn apt(id: u32) -> Airport {
        Airport::new(
            id,
            "TST",
            "Test Field",
            "Testville",
            "Testland",
            AirportType::Domestic,
            1,
            0,
            GeoPoint::new(0.0, 0.0),
        )
    }

    #[test]
    fn test_identical_order_unchanged() {
        let a = vec![apt(1), apt(2), apt(3)];
        let b = vec![apt(1), apt(2), apt(3)];
        assert!(!visible_set_changed(&a, &b));
    }

    #[test]
    fn test_reordered_is_unchanged() {
        let a = vec![apt(1), apt(2), apt(3)];
        let b = vec![apt(3), apt(1), apt(2)];
        assert!(!visible_set_changed(&a, &b));
    }

    #[test]
    fn test_length_mismatch_changed() {
        let a = vec![apt(1), apt(2)];
        let b = vec![apt(1)];
        assert!(visible_set_changed(&a, &b));
        assert!(visible_set_changed(&b, &a));
    }

    #[test]
    fn test_same_length_different_ids_changed() {
        let a = vec![apt(1), apt(2)];
        let b = vec![apt(1), apt(3)];
        assert!(visible_set_changed(&a, &b));
    }

    #[test]
    fn test_both_empty_unchanged() {
        assert!(!visible_set_changed(&[], &[]));
    }

    #[test]
    fn test_attribute_differences_ignored() {
        // Identity equality: a re-fetched record with updated display
        // attributes is still the same airport.
        let a = vec![apt(1)];
        let mut renamed = apt(1);
        renamed.name = "Renamed Field".to_string();
        let b = vec![renamed];
        assert!(!visible_set_changed(&a, &b));
    }
}
