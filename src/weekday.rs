//! Weekday output values and the default day-name table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// English day names indexed by congruence remainder.
///
/// Index 0 is Saturday and index 6 is Friday, matching the remainder
/// ordering produced by the congruence. Localized tables supplied through
/// a query must follow the same ordering.
pub const DEFAULT_DAY_NAMES: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// The computed day of the week.
///
/// A query with `iso` unset (or false) yields [`Weekday::Name`] holding one
/// of the seven configured day names; a query with `iso` set yields
/// [`Weekday::Iso`] holding the ISO week-date number (1 = Monday ..=
/// 7 = Sunday). Serialization is untagged, so the value renders as a bare
/// string or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weekday {
    /// A day name from the configured (possibly localized) table.
    Name(String),
    /// An ISO week-date day number, 1 = Monday ..= 7 = Sunday.
    Iso(u8),
}

impl Weekday {
    /// Returns the day name, if this is a name result.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Weekday::Name(name) => Some(name),
            Weekday::Iso(_) => None,
        }
    }

    /// Returns the ISO day number, if this is an ISO result.
    pub fn as_iso(&self) -> Option<u8> {
        match self {
            Weekday::Name(_) => None,
            Weekday::Iso(n) => Some(*n),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weekday::Name(name) => f.write_str(name),
            Weekday::Iso(n) => write!(f, "{n}"),
        }
    }
}
