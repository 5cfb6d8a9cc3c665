//! Adjacency store for the metro network.
//!
//! The graph maps every registered station to its outgoing connections.
//! It is built once (usually by the loader) and then only borrowed by the
//! query engines, so queries can never observe a partially built network.

mod render;

use std::collections::BTreeMap;

use crate::domain::{Connection, GraphError, StationId};

pub use render::{Layout, Rendered};

/// A directed, weighted graph of stations.
///
/// Stations are kept in ascending ID order so that enumeration and
/// rendering are deterministic. Connections keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<StationId, Vec<Connection>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station. Registering the same station twice is a no-op.
    pub fn add_station(&mut self, station: StationId) {
        self.adjacency.entry(station).or_default();
    }

    /// Returns the number of registered stations.
    pub fn number_of_stations(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of connections.
    pub fn number_of_connections(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the station has been registered.
    pub fn contains(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Append a connection `from → connection.destination`.
    ///
    /// Both endpoints must already be registered.
    pub fn add_neighbor(
        &mut self,
        from: StationId,
        connection: Connection,
    ) -> Result<(), GraphError> {
        if !self.contains(connection.destination) {
            return Err(GraphError::UnknownStation(connection.destination));
        }
        self.adjacency
            .get_mut(&from)
            .ok_or(GraphError::UnknownStation(from))?
            .push(connection);
        Ok(())
    }

    /// Append a connection described by a raw file-format weight.
    ///
    /// A weight of `-1` is a same-line connection, any non-negative weight
    /// is a travel time in seconds.
    pub fn add_weighted_neighbor(
        &mut self,
        from: StationId,
        to: StationId,
        weight: i64,
    ) -> Result<(), GraphError> {
        let connection = Connection::from_weight(to, weight)?;
        self.add_neighbor(from, connection)
    }

    /// Outgoing connections of a station.
    ///
    /// Unregistered stations have no connections; this never fails.
    pub fn neighbors(&self, station: StationId) -> &[Connection] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All registered stations, in ascending order.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Render the graph as text in the given layout.
    pub fn render(&self, layout: Layout) -> Rendered<'_> {
        Rendered::new(self, layout)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (StationId, &[Connection])> {
        self.adjacency.iter().map(|(s, c)| (*s, c.as_slice()))
    }
}

/// Builder for creating graphs.
///
/// Provides a fluent API for registering stations and connections. Errors
/// are reported once, from [`GraphBuilder::build`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    stations: Vec<StationId>,
    edges: Vec<(StationId, StationId, i64)>,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    pub fn station(mut self, id: u32) -> Self {
        self.stations.push(StationId(id));
        self
    }

    /// Register several stations.
    pub fn stations(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.stations.extend(ids.into_iter().map(StationId));
        self
    }

    /// Add a connection with a raw file-format weight.
    pub fn edge(mut self, from: u32, to: u32, weight: i64) -> Self {
        self.edges.push((StationId(from), StationId(to), weight));
        self
    }

    /// Build the graph: all stations first, then all connections.
    pub fn build(self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();
        for station in self.stations {
            graph.add_station(station);
        }
        for (from, to, weight) in self.edges {
            graph.add_weighted_neighbor(from, to, weight)?;
        }
        Ok(graph)
    }
}
