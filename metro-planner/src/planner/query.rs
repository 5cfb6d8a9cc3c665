//! Query facade over a loaded network.

use crate::domain::StationId;
use crate::graph::Graph;

use super::config::PlannerConfig;
use super::dijkstra::{self, Route};
use super::line;

/// A loaded metro network ready to answer queries.
///
/// The planner owns its graph and only ever borrows it immutably, so a
/// planner can be shared between threads once built.
#[derive(Debug, Clone)]
pub struct Planner {
    graph: Graph,
    config: PlannerConfig,
}

impl Planner {
    /// Create a new planner.
    pub fn new(graph: Graph, config: PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// The underlying network.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The search configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// All stations on the same line as `station`, start first.
    pub fn stations_belonging(&self, station: StationId) -> Vec<StationId> {
        line::stations_belonging(&self.graph, station)
    }

    /// Minimum-time route from `start` to `end`.
    pub fn shortest_path(&self, start: StationId, end: StationId) -> Route {
        dijkstra::shortest_path(&self.graph, start, end, &self.config)
    }

    /// Minimum-time route from `start` to `end` with `block`'s line closed.
    pub fn shortest_path_malfunction(
        &self,
        start: StationId,
        end: StationId,
        block: StationId,
    ) -> Route {
        dijkstra::shortest_path_malfunction(&self.graph, start, end, block, &self.config)
    }
}
