//! Minimum-time paths with Dijkstra's algorithm.
//!
//! Connections with a travel time cost that many seconds; untimed
//! (same-line) connections cost the configured walking time. The queue is a
//! binary min-heap with lazy deletion: superseded entries stay in the heap
//! and are skipped when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use chrono::Duration;
use tracing::{debug, trace};

use super::config::PlannerConfig;
use super::line::stations_belonging;
use super::path::reconstruct_path;
use crate::domain::StationId;
use crate::graph::Graph;

/// Distance recorded for stations that were never reached.
pub const UNREACHABLE: u64 = u64::MAX;

/// A path between two stations and its total travel time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Route {
    /// Stations in travel order, ending at the requested destination.
    pub path: Vec<StationId>,

    /// Total cost in seconds, or `None` if the destination is unreachable.
    pub travel_time: Option<u64>,
}

impl Route {
    /// The degenerate route returned when `end` cannot be reached.
    pub fn unreachable(end: StationId) -> Self {
        Self {
            path: vec![end],
            travel_time: None,
        }
    }

    /// Returns true if the destination was reached.
    pub fn is_reachable(&self) -> bool {
        self.travel_time.is_some()
    }

    /// Returns the travel time as a Duration.
    pub fn duration(&self) -> Option<Duration> {
        self.travel_time
            .and_then(|secs| i64::try_from(secs).ok())
            .map(Duration::seconds)
    }

    /// Number of connections taken.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Distances and predecessors from a single source station.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: StationId,
    distances: HashMap<StationId, u64>,
    predecessors: HashMap<StationId, StationId>,
}

impl ShortestPaths {
    /// The station distances were measured from.
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Best known cost to `station`, or `None` if it was never reached.
    pub fn distance(&self, station: StationId) -> Option<u64> {
        self.distances
            .get(&station)
            .copied()
            .filter(|d| *d != UNREACHABLE)
    }

    /// Every registered station's distance; unreached stations hold
    /// [`UNREACHABLE`].
    pub fn distances(&self) -> &HashMap<StationId, u64> {
        &self.distances
    }

    /// Station each reached station was last improved from.
    pub fn predecessors(&self) -> &HashMap<StationId, StationId> {
        &self.predecessors
    }

    /// The best route from the source to `end`.
    pub fn route_to(&self, end: StationId) -> Route {
        match self.distance(end) {
            Some(cost) => Route {
                path: reconstruct_path(end, &self.predecessors),
                travel_time: Some(cost),
            },
            None => Route::unreachable(end),
        }
    }
}

/// Run Dijkstra from `start` over the whole graph.
pub fn shortest_paths(graph: &Graph, start: StationId, config: &PlannerConfig) -> ShortestPaths {
    shortest_paths_avoiding(graph, start, config, &HashSet::new())
}

/// Run Dijkstra from `start`, treating every station in `excluded` as
/// absent: it is never expanded and never relaxed into.
pub fn shortest_paths_avoiding(
    graph: &Graph,
    start: StationId,
    config: &PlannerConfig,
    excluded: &HashSet<StationId>,
) -> ShortestPaths {
    let walk_cost = config.walk_cost_units();

    let mut distances: HashMap<StationId, u64> =
        graph.stations().map(|s| (s, UNREACHABLE)).collect();
    let mut predecessors: HashMap<StationId, StationId> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    queue.push(QueueEntry::new(start, 0));

    let mut expanded = 0usize;

    while let Some(entry) = queue.pop() {
        let current = entry.station;

        // Stale entry: the station was improved after this was queued
        if entry.cost > distances.get(&current).copied().unwrap_or(UNREACHABLE) {
            continue;
        }
        if excluded.contains(&current) {
            continue;
        }
        expanded += 1;

        for connection in graph.neighbors(current) {
            let next = connection.destination;
            if excluded.contains(&next) {
                continue;
            }

            let candidate = entry.cost.saturating_add(connection.cost(walk_cost));
            let known = distances.entry(next).or_insert(UNREACHABLE);
            if candidate < *known {
                trace!(from = %current, to = %next, cost = candidate, "Relaxed connection");
                *known = candidate;
                predecessors.insert(next, current);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    debug!(
        %start,
        stations = graph.number_of_stations(),
        excluded = excluded.len(),
        expanded,
        "Dijkstra complete"
    );

    ShortestPaths {
        source: start,
        distances,
        predecessors,
    }
}

/// Minimum-time route from `start` to `end`.
///
/// `start == end` gives `[start]` with cost 0. An unreachable `end` gives
/// the degenerate route `[end]` with no travel time.
pub fn shortest_path(
    graph: &Graph,
    start: StationId,
    end: StationId,
    config: &PlannerConfig,
) -> Route {
    let route = shortest_paths(graph, start, config).route_to(end);
    debug!(%start, %end, travel_time = ?route.travel_time, "Shortest path");
    route
}

/// Minimum-time route from `start` to `end` avoiding the whole line that
/// `block` belongs to.
///
/// If `start` or `end` is on the blocked line the route is degenerate:
/// `[end]` with no travel time.
pub fn shortest_path_malfunction(
    graph: &Graph,
    start: StationId,
    end: StationId,
    block: StationId,
    config: &PlannerConfig,
) -> Route {
    let excluded: HashSet<StationId> = stations_belonging(graph, block).into_iter().collect();

    let route = if excluded.contains(&start) || excluded.contains(&end) {
        Route::unreachable(end)
    } else {
        shortest_paths_avoiding(graph, start, config, &excluded).route_to(end)
    };

    debug!(
        %start,
        %end,
        %block,
        excluded = excluded.len(),
        travel_time = ?route.travel_time,
        "Shortest path avoiding line"
    );
    route
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    station: StationId,
    cost: u64,
}

impl QueueEntry {
    fn new(station: StationId, cost: u64) -> Self {
        Self { station, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
