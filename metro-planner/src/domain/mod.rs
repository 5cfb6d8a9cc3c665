//! Domain types for the metro planner.
//!
//! Stations and the connections between them. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod connection;
mod error;
mod station;

pub use connection::{Connection, SAME_LINE_WEIGHT};
pub use error::GraphError;
pub use station::{InvalidStationId, StationId};
