//! Configuration for the metro planner.

use chrono::Duration;

/// Walking cost used when no configuration is given (seconds).
pub const DEFAULT_WALK_COST_SECS: u32 = 90;

/// Configuration parameters for shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Cost charged for a connection with no recorded travel time (seconds).
    /// Same-line connections in the metro file carry no time, so this is
    /// the price of taking one during path search.
    pub walk_cost_secs: u32,
}

impl PlannerConfig {
    /// Create a new configuration with the given walking cost.
    pub fn new(walk_cost_secs: u32) -> Self {
        Self { walk_cost_secs }
    }

    /// Returns the walking cost as a Duration.
    pub fn walk_cost(&self) -> Duration {
        Duration::seconds(i64::from(self.walk_cost_secs))
    }

    /// Returns the walking cost in search units.
    pub(crate) fn walk_cost_units(&self) -> u64 {
        u64::from(self.walk_cost_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walk_cost_secs: DEFAULT_WALK_COST_SECS,
        }
    }
}
