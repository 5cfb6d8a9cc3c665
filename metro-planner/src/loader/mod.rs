//! Metro file loader.
//!
//! Reads the plain-text network description:
//!
//! ```text
//! <station count> <connection count>
//! <station id> [name...]          one line per station
//! $
//! <from> <to> <weight>            one line per connection
//! ```
//!
//! A weight of `-1` marks a same-line connection; any other weight is a
//! travel time in seconds. Station names are ignored.

mod error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::domain::StationId;
use crate::graph::Graph;

pub use error::{LoadError, Section};

const SEPARATOR: &str = "$";

/// Load a graph from a metro file on disk.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = parse_graph(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        stations = graph.number_of_stations(),
        connections = graph.number_of_connections(),
        "Loaded metro graph"
    );
    Ok(graph)
}

/// Parse a graph from any buffered reader.
///
/// Lines after the last connection are ignored.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
    let mut lines = NumberedLines::new(reader);

    let (header_line, header) = lines.next_line()?.ok_or(LoadError::MissingHeader)?;
    let mut fields = header.split_whitespace();
    let station_count = parse_count(fields.next(), header_line, "station count")?;
    let connection_count = parse_count(fields.next(), header_line, "connection count")?;

    let mut graph = Graph::new();

    for found in 0..station_count {
        let Some((line, text)) = lines.next_line()? else {
            return Err(LoadError::Truncated {
                section: Section::Stations,
                expected: station_count,
                found,
            });
        };
        let id = parse_station(text.split_whitespace().next(), line, "station id")?;
        graph.add_station(id);
    }

    match lines.next_line()? {
        Some((_, text)) if text.trim() == SEPARATOR => {}
        Some((line, _)) => return Err(LoadError::MissingSeparator { line }),
        None => {
            return Err(LoadError::MissingSeparator {
                line: lines.line + 1,
            });
        }
    }

    for found in 0..connection_count {
        let Some((line, text)) = lines.next_line()? else {
            return Err(LoadError::Truncated {
                section: Section::Connections,
                expected: connection_count,
                found,
            });
        };
        let mut fields = text.split_whitespace();
        let from = parse_station(fields.next(), line, "source station")?;
        let to = parse_station(fields.next(), line, "destination station")?;
        let weight = parse_weight(fields.next(), line)?;

        graph
            .add_weighted_neighbor(from, to, weight)
            .map_err(|source| LoadError::Graph { line, source })?;
    }

    Ok(graph)
}

/// Line reader that remembers the 1-based number of the last line read.
///
/// Lines are decoded lossily: station names may be in any encoding and only
/// the numeric fields matter.
struct NumberedLines<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, LoadError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        Ok(Some((self.line, String::from_utf8_lossy(bytes).into_owned())))
    }
}

fn require<'a>(
    field: Option<&'a str>,
    line: usize,
    name: &'static str,
) -> Result<&'a str, LoadError> {
    field.ok_or(LoadError::MissingField { line, field: name })
}

fn invalid_number(line: usize, value: &str) -> LoadError {
    LoadError::InvalidNumber {
        line,
        value: value.to_string(),
    }
}

fn parse_count(field: Option<&str>, line: usize, name: &'static str) -> Result<usize, LoadError> {
    let value = require(field, line, name)?;
    value.parse().map_err(|_| invalid_number(line, value))
}

fn parse_station(
    field: Option<&str>,
    line: usize,
    name: &'static str,
) -> Result<StationId, LoadError> {
    let value = require(field, line, name)?;
    StationId::parse(value).map_err(|_| invalid_number(line, value))
}

fn parse_weight(field: Option<&str>, line: usize) -> Result<i64, LoadError> {
    let value = require(field, line, "weight")?;
    value.parse().map_err(|_| invalid_number(line, value))
}
