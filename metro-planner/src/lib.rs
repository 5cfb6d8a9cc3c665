//! Metro journey planner.
//!
//! Models a metro network as a weighted directed graph and answers:
//! "which stations are on this line?", "what is the fastest route from A
//! to B?", and "what is the fastest route if this line is down?"

pub mod cli;
pub mod domain;
pub mod graph;
pub mod loader;
pub mod planner;
