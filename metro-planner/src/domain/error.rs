//! Domain error types.
//!
//! These errors represent graph construction failures. They are distinct
//! from loader errors, which wrap them with input position.

use super::StationId;

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Edge endpoint was never registered with `add_station`
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// Weight is neither a travel time nor the same-line sentinel
    #[error("invalid weight {0}: expected -1 or a non-negative travel time")]
    InvalidWeight(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::UnknownStation(StationId(12));
        assert_eq!(err.to_string(), "unknown station 12");

        let err = GraphError::InvalidWeight(-5);
        assert_eq!(
            err.to_string(),
            "invalid weight -5: expected -1 or a non-negative travel time"
        );
    }
}
