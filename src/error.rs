//! Error types for the zeller crate.

use std::fmt;

/// Identifies the query field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The day-of-month input (1..=31).
    DayOfMonth,
    /// The month input (1..=12).
    Month,
    /// The year input.
    Year,
    /// The ISO output flag.
    Iso,
    /// The calendar type ("gregorian" or "julian").
    Calendar,
    /// The seven-entry day-name table.
    DayNames,
}

impl Field {
    /// Returns the human-readable name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::Year => "year",
            Field::Iso => "iso",
            Field::Calendar => "calendar type",
            Field::DayNames => "day names",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for all fallible operations in the zeller crate.
///
/// Validation distinguishes exactly two kinds of failure: a required
/// parameter that was never supplied, and a supplied value that violates
/// its domain. Every error names the offending [`Field`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeekdayError {
    /// Returned when one of the three required inputs is absent.
    #[error("missing parameter: {field} (day_of_month, month, and year are required)")]
    MissingParameter {
        /// The required field that was not supplied.
        field: Field,
    },

    /// Returned when a supplied value violates its domain constraint.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// The field whose value is invalid.
        field: Field,
        /// The offending value and its expected domain.
        reason: String,
    },
}

impl WeekdayError {
    /// Returns the field this error refers to.
    pub fn field(&self) -> Field {
        match self {
            WeekdayError::MissingParameter { field } => *field,
            WeekdayError::InvalidParameter { field, .. } => *field,
        }
    }
}
