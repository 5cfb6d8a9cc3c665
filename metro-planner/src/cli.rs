//! Command-line query parsing and output.
//!
//! The binary takes one to three station IDs:
//!
//! - `N1`: the line `N1` belongs to,
//! - `N1 N2`: the fastest route from `N1` to `N2`,
//! - `N1 N2 N3`: the fastest route, then the fastest route with `N3`'s line
//!   out of service.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::domain::{InvalidStationId, StationId};
use crate::planner::{Planner, Route};

/// Usage text printed on bad arguments.
pub const USAGE: &str = "usage: metro-planner [--json] N1 [N2 [N3]]";

/// Errors from command-line parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// Wrong number of station arguments
    #[error("expected 1 to 3 station ids, got {0}")]
    WrongArgumentCount(usize),

    /// An argument is not a station ID
    #[error(transparent)]
    InvalidStation(#[from] InvalidStationId),

    /// Unrecognised `--flag`
    #[error("unknown option {0:?}")]
    UnknownOption(String),
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// A query requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Line(StationId),
    Route {
        start: StationId,
        end: StationId,
    },
    Malfunction {
        start: StationId,
        end: StationId,
        block: StationId,
    },
}

/// Parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub query: Query,
    pub format: Format,
}

impl Invocation {
    /// Parse arguments, excluding the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        let mut format = Format::Text;
        let mut stations = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--json" => format = Format::Json,
                flag if flag.starts_with("--") => {
                    return Err(UsageError::UnknownOption(flag.to_string()));
                }
                id => stations.push(StationId::parse(id)?),
            }
        }

        let query = match stations.as_slice() {
            [station] => Query::Line(*station),
            [start, end] => Query::Route {
                start: *start,
                end: *end,
            },
            [start, end, block] => Query::Malfunction {
                start: *start,
                end: *end,
                block: *block,
            },
            other => return Err(UsageError::WrongArgumentCount(other.len())),
        };

        Ok(Self { query, format })
    }
}

/// Run a query and write its result to `out`.
pub fn run(planner: &Planner, invocation: &Invocation, out: &mut impl Write) -> io::Result<()> {
    match invocation.format {
        Format::Text => write_text(out, planner, &invocation.query),
        Format::Json => {
            serde_json::to_writer(&mut *out, &run_json(planner, &invocation.query))?;
            writeln!(out)
        }
    }
}

fn write_text(out: &mut impl Write, planner: &Planner, query: &Query) -> io::Result<()> {
    match *query {
        Query::Line(station) => {
            writeln!(out, "Input:\nN1 = {station}\nOutput:")?;
            let line = planner.stations_belonging(station);
            writeln!(out, "Line: {}", join(&line))
        }
        Query::Route { start, end } => {
            writeln!(out, "Input:\nN1 = {start} N2 = {end}\nOutput:")?;
            write_route(out, &planner.shortest_path(start, end))
        }
        Query::Malfunction { start, end, block } => {
            writeln!(out, "Input:\nN1 = {start} N2 = {end}\nOutput:")?;
            write_route(out, &planner.shortest_path(start, end))?;
            writeln!(out, "Input:\nN1 = {start} N2 = {end} N3 = {block}\nOutput:")?;
            write_route(out, &planner.shortest_path_malfunction(start, end, block))
        }
    }
}

fn run_json(planner: &Planner, query: &Query) -> Value {
    match *query {
        Query::Line(station) => json!({
            "station": station,
            "line": planner.stations_belonging(station),
        }),
        Query::Route { start, end } => json!(planner.shortest_path(start, end)),
        Query::Malfunction { start, end, block } => json!({
            "shortest": planner.shortest_path(start, end),
            "avoiding": planner.shortest_path_malfunction(start, end, block),
            "block": block,
        }),
    }
}

fn write_route(out: &mut impl Write, route: &Route) -> io::Result<()> {
    match route.travel_time {
        Some(secs) => writeln!(out, "Time = {secs}")?,
        None => writeln!(out, "Time = unreachable")?,
    }
    writeln!(out, "Path: {}", join(&route.path))
}

fn join(stations: &[StationId]) -> String {
    stations
        .iter()
        .map(StationId::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
