//! Directed connections between stations.

use super::{GraphError, StationId};

/// Raw weight used by the metro file format to mark a same-line connection
/// with no recorded travel time.
pub const SAME_LINE_WEIGHT: i64 = -1;

/// A directed edge leaving a station.
///
/// The metro file format overloads a single weight: `-1` marks a same-line
/// connection with no travel time, anything else is a travel time in
/// seconds. The two meanings are kept as separate attributes here:
/// reachability follows `same_line`, shortest-path search prices
/// `travel_time` and falls back to the walking cost when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// Station this connection leads to.
    pub destination: StationId,

    /// Whether this connection continues the same line.
    pub same_line: bool,

    /// Travel time in seconds, if recorded.
    pub travel_time: Option<u32>,
}

impl Connection {
    /// A same-line connection with no recorded travel time.
    pub fn same_line(destination: StationId) -> Self {
        Self {
            destination,
            same_line: true,
            travel_time: None,
        }
    }

    /// A connection with a known travel time.
    pub fn timed(destination: StationId, seconds: u32) -> Self {
        Self {
            destination,
            same_line: false,
            travel_time: Some(seconds),
        }
    }

    /// Build a connection from a raw file-format weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::domain::{Connection, StationId};
    ///
    /// let c = Connection::from_weight(StationId(3), -1).unwrap();
    /// assert!(c.same_line);
    /// assert_eq!(c.travel_time, None);
    ///
    /// let c = Connection::from_weight(StationId(3), 45).unwrap();
    /// assert!(!c.same_line);
    /// assert_eq!(c.travel_time, Some(45));
    ///
    /// assert!(Connection::from_weight(StationId(3), -7).is_err());
    /// ```
    pub fn from_weight(destination: StationId, weight: i64) -> Result<Self, GraphError> {
        if weight == SAME_LINE_WEIGHT {
            return Ok(Self::same_line(destination));
        }
        u32::try_from(weight)
            .map(|seconds| Self::timed(destination, seconds))
            .map_err(|_| GraphError::InvalidWeight(weight))
    }

    /// The raw file-format weight for this connection.
    ///
    /// Untimed connections map back to the same-line sentinel.
    pub fn weight(&self) -> i64 {
        match self.travel_time {
            Some(seconds) => i64::from(seconds),
            None => SAME_LINE_WEIGHT,
        }
    }

    /// Cost of traversing this connection, given the cost charged for
    /// untimed connections.
    pub fn cost(&self, walk_cost: u64) -> u64 {
        self.travel_time.map_or(walk_cost, u64::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_same_line() {
        let c = Connection::from_weight(StationId(1), -1).unwrap();
        assert_eq!(c, Connection::same_line(StationId(1)));
    }

    #[test]
    fn zero_is_a_travel_time() {
        let c = Connection::from_weight(StationId(1), 0).unwrap();
        assert_eq!(c, Connection::timed(StationId(1), 0));
    }

    #[test]
    fn other_negatives_rejected() {
        let err = Connection::from_weight(StationId(1), -2).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight(-2)));
    }

    #[test]
    fn oversized_weight_rejected() {
        let weight = i64::from(u32::MAX) + 1;
        assert!(Connection::from_weight(StationId(1), weight).is_err());
    }

    #[test]
    fn weight_converts_back() {
        assert_eq!(Connection::same_line(StationId(0)).weight(), -1);
        assert_eq!(Connection::timed(StationId(0), 120).weight(), 120);
    }

    #[test]
    fn cost_uses_walk_cost_when_untimed() {
        assert_eq!(Connection::same_line(StationId(0)).cost(90), 90);
        assert_eq!(Connection::timed(StationId(0), 33).cost(90), 33);
    }
}
