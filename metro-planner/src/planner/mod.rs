//! Journey planning over the metro graph.
//!
//! Three queries are answered:
//!
//! - which stations share a line with a given station (depth-first search
//!   over same-line connections),
//! - the minimum-time route between two stations (Dijkstra),
//! - the minimum-time route when one whole line is out of service.
//!
//! Every query builds its own working maps; nothing is shared between calls.

mod config;
mod dijkstra;
mod line;
mod path;
mod query;


pub use config::{DEFAULT_WALK_COST_SECS, PlannerConfig};
pub use dijkstra::{
    Route, ShortestPaths, UNREACHABLE, shortest_path, shortest_path_malfunction, shortest_paths,
    shortest_paths_avoiding,
};
pub use line::stations_belonging;
pub use path::reconstruct_path;
pub use query::Planner;
