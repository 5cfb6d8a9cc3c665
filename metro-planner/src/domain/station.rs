//! Station identifier type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: {reason}")]
pub struct InvalidStationId {
    input: String,
    reason: &'static str,
}

/// A station in the network, identified by a non-negative integer.
///
/// Station IDs carry no payload: the graph is the only structure that gives
/// them meaning. IDs need not be dense or zero-based.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationId;
///
/// let id = StationId::parse("42").unwrap();
/// assert_eq!(id, StationId(42));
///
/// // Negative numbers are rejected
/// assert!(StationId::parse("-1").is_err());
///
/// // So is anything that isn't a number
/// assert!(StationId::parse("Bastille").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl StationId {
    /// Parse a station ID from a decimal string.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must be a non-negative integer",
            });
        }

        trimmed.parse::<u32>().map(StationId).map_err(|_| InvalidStationId {
            input: s.to_string(),
            reason: "out of range",
        })
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert_eq!(StationId::parse("0").unwrap(), StationId(0));
        assert_eq!(StationId::parse("375").unwrap(), StationId(375));
        assert_eq!(StationId::parse(" 12 ").unwrap(), StationId(12));
    }

    #[test]
    fn reject_negative() {
        assert!(StationId::parse("-1").is_err());
        assert!(StationId::parse("-0").is_err());
    }

    #[test]
    fn reject_non_numeric() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("   ").is_err());
        assert!(StationId::parse("1a").is_err());
        assert!(StationId::parse("+3").is_err());
        assert!(StationId::parse("Nation").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        let err = StationId::parse("99999999999").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station id \"99999999999\": out of range"
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", StationId(7)), "7");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", StationId(7)), "StationId(7)");
    }

    #[test]
    fn from_str_matches_parse() {
        let id: StationId = "18".parse().unwrap();
        assert_eq!(id, StationId::parse("18").unwrap());
    }

    #[test]
    fn ordering_follows_numeric_id() {
        assert!(StationId(2) < StationId(10));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&vec![StationId(1), StationId(20)]).unwrap();
        assert_eq!(json, "[1,20]");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: display then parse returns the original
        #[test]
        fn roundtrip(n in any::<u32>()) {
            let id = StationId(n);
            prop_assert_eq!(StationId::parse(&id.to_string()).unwrap(), id);
        }

        /// Negative numbers are always rejected
        #[test]
        fn negative_rejected(n in 1i64..=i64::from(u32::MAX)) {
            let s = format!("-{n}");
            prop_assert!(StationId::parse(&s).is_err());
        }

        /// Strings with letters are rejected
        #[test]
        fn letters_rejected(s in "[0-9]{0,3}[a-zA-Z][0-9a-zA-Z]{0,3}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
