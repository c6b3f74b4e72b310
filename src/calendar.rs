//! Calendar selection for the congruence.

use std::fmt;
use std::str::FromStr;

use crate::error::{Field, WeekdayError};

/// The calendar whose arithmetic the congruence follows.
///
/// Parsing from a string is case-insensitive; the canonical form is
/// lowercase. The default is [`Calendar::Gregorian`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Proleptic Julian calendar.
    Julian,
}

impl Calendar {
    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Calendar::Gregorian => "gregorian",
            Calendar::Julian => "julian",
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::Gregorian
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Calendar {
    type Err = WeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("gregorian") {
            Ok(Calendar::Gregorian)
        } else if s.eq_ignore_ascii_case("julian") {
            Ok(Calendar::Julian)
        } else {
            Err(WeekdayError::InvalidParameter {
                field: Field::Calendar,
                reason: format!(
                    "unknown calendar type \"{s}\" (must be \"gregorian\" or \"julian\", \
                     case-insensitive)"
                ),
            })
        }
    }
}

impl From<Calendar> for String {
    fn from(calendar: Calendar) -> Self {
        calendar.as_str().to_string()
    }
}

impl serde::Serialize for Calendar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Calendar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
