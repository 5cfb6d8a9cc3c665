//! Path reconstruction from a predecessor map.

use std::collections::{HashMap, HashSet};

use crate::domain::StationId;

/// Rebuild the path ending at `end` by following predecessor links back
/// until a station has none.
///
/// Always returns at least `[end]`. The walk stops if a station repeats,
/// so a malformed map cannot loop forever.
pub fn reconstruct_path(
    end: StationId,
    predecessors: &HashMap<StationId, StationId>,
) -> Vec<StationId> {
    let mut path = vec![end];
    let mut seen: HashSet<StationId> = HashSet::from([end]);
    let mut current = end;

    while let Some(&previous) = predecessors.get(&current) {
        if !seen.insert(previous) {
            break;
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(id: u32) -> StationId {
        StationId(id)
    }

    #[test]
    fn no_predecessor_gives_single_station() {
        let predecessors = HashMap::new();
        assert_eq!(reconstruct_path(s(3), &predecessors), vec![s(3)]);
    }

    #[test]
    fn chain_is_returned_in_forward_order() {
        let predecessors = HashMap::from([(s(2), s(1)), (s(1), s(0))]);
        assert_eq!(reconstruct_path(s(2), &predecessors), vec![s(0), s(1), s(2)]);
    }

    #[test]
    fn stops_at_any_station_without_predecessor() {
        let predecessors = HashMap::from([(s(9), s(4)), (s(1), s(0))]);
        assert_eq!(reconstruct_path(s(9), &predecessors), vec![s(4), s(9)]);
    }

    #[test]
    fn cycle_does_not_loop() {
        let predecessors = HashMap::from([(s(0), s(1)), (s(1), s(0))]);
        assert_eq!(reconstruct_path(s(0), &predecessors), vec![s(1), s(0)]);
    }
}
