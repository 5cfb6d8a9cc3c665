//! Same-line reachability.
//!
//! A line is everything reachable from a station through same-line
//! connections only. Timed connections (transfers between lines) are never
//! followed.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::StationId;
use crate::graph::Graph;

/// All stations on the same line as `station`, in depth-first pre-order.
///
/// The start station always comes first, even if it is not registered in
/// the graph (it then has no connections and the line is just itself).
/// Each call uses its own visited set.
pub fn stations_belonging(graph: &Graph, station: StationId) -> Vec<StationId> {
    let mut line = Vec::new();
    let mut visited: HashSet<StationId> = HashSet::new();
    let mut stack = vec![station];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        line.push(current);

        // Push in reverse so connections are explored in insertion order,
        // matching recursive pre-order.
        for connection in graph.neighbors(current).iter().rev() {
            if connection.same_line && !visited.contains(&connection.destination) {
                stack.push(connection.destination);
            }
        }
    }

    trace!(%station, stations = line.len(), "Collected line");
    line
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::GraphBuilder;
    use proptest::prelude::*;

    /// Random graph on up to 8 stations with a mix of same-line and timed edges.
    fn graph_strategy() -> impl Strategy<Value = Graph> {
        (1u32..=8)
            .prop_flat_map(|n| {
                let edge = (0..n, 0..n, prop_oneof![Just(-1i64), 0i64..50]);
                (Just(n), proptest::collection::vec(edge, 0..20))
            })
            .prop_map(|(n, edges)| {
                edges
                    .into_iter()
                    .fold(GraphBuilder::new().stations(0..n), |b, (f, t, w)| {
                        b.edge(f, t, w)
                    })
                    .build()
                    .unwrap()
            })
    }

    fn recursive_reference(graph: &Graph, station: StationId) -> Vec<StationId> {
        fn visit(
            graph: &Graph,
            station: StationId,
            visited: &mut HashSet<StationId>,
            line: &mut Vec<StationId>,
        ) {
            if !visited.insert(station) {
                return;
            }
            line.push(station);
            for c in graph.neighbors(station) {
                if c.same_line {
                    visit(graph, c.destination, visited, line);
                }
            }
        }

        let mut line = Vec::new();
        visit(graph, station, &mut HashSet::new(), &mut line);
        line
    }

    /// Stations reachable from `station` via same-line edges, by fixpoint.
    fn closure(graph: &Graph, station: StationId) -> HashSet<StationId> {
        let mut reached: HashSet<StationId> = HashSet::from([station]);
        loop {
            let next: Vec<StationId> = reached
                .iter()
                .flat_map(|s| graph.neighbors(*s))
                .filter(|c| c.same_line)
                .map(|c| c.destination)
                .filter(|d| !reached.contains(d))
                .collect();
            if next.is_empty() {
                return reached;
            }
            reached.extend(next);
        }
    }

    proptest! {
        #[test]
        fn contains_start_exactly_once(graph in graph_strategy(), start in 0u32..8) {
            let line = stations_belonging(&graph, StationId(start));
            prop_assert_eq!(line[0], StationId(start));
            prop_assert_eq!(line.iter().filter(|s| **s == StationId(start)).count(), 1);
        }

        #[test]
        fn matches_same_line_closure(graph in graph_strategy(), start in 0u32..8) {
            let line = stations_belonging(&graph, StationId(start));
            let as_set: HashSet<StationId> = line.iter().copied().collect();
            prop_assert_eq!(as_set.len(), line.len(), "duplicates in {:?}", line);
            prop_assert_eq!(as_set, closure(&graph, StationId(start)));
        }

        #[test]
        fn matches_recursive_order(graph in graph_strategy(), start in 0u32..8) {
            prop_assert_eq!(
                stations_belonging(&graph, StationId(start)),
                recursive_reference(&graph, StationId(start))
            );
        }
    }
}
