//! Loader error types.

use std::fmt;
use std::path::PathBuf;

use crate::domain::GraphError;

/// Section of the metro file being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Stations,
    Connections,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Stations => f.write_str("station"),
            Section::Connections => f.write_str("connection"),
        }
    }
}

/// Errors that can occur when loading a metro file.
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is empty
    #[error("missing header line: expected '<stations> <connections>'")]
    MissingHeader,

    /// A required field is absent
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    /// A field is not a valid number
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },

    /// The `$` line between stations and connections is absent
    #[error("line {line}: expected '$' separator")]
    MissingSeparator { line: usize },

    /// Input ended before a section was complete
    #[error("expected {expected} {section} lines, found {found}")]
    Truncated {
        section: Section,
        expected: usize,
        found: usize,
    },

    /// A connection could not be added to the graph
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    #[test]
    fn error_display() {
        let err = LoadError::MissingHeader;
        assert_eq!(
            err.to_string(),
            "missing header line: expected '<stations> <connections>'"
        );

        let err = LoadError::InvalidNumber {
            line: 3,
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 3: invalid number \"abc\"");

        let err = LoadError::MissingField {
            line: 9,
            field: "weight",
        };
        assert_eq!(err.to_string(), "line 9: missing weight");

        let err = LoadError::MissingSeparator { line: 5 };
        assert_eq!(err.to_string(), "line 5: expected '$' separator");

        let err = LoadError::Truncated {
            section: Section::Connections,
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "expected 4 connection lines, found 2");

        let err = LoadError::Graph {
            line: 7,
            source: GraphError::UnknownStation(StationId(8)),
        };
        assert_eq!(err.to_string(), "line 7: unknown station 8");
    }

    #[test]
    fn graph_error_is_source() {
        use std::error::Error;

        let err = LoadError::Graph {
            line: 7,
            source: GraphError::InvalidWeight(-4),
        };
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            "invalid weight -4: expected -1 or a non-negative travel time"
        );
    }
}
