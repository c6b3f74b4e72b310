//! Query construction for weekday computation.

use serde::{Deserialize, Serialize};

/// Input to [`compute_weekday`](crate::compute_weekday).
///
/// A query starts empty and is populated through the `with_*` builder
/// methods. Unset fields are absent: at compute time an absent required
/// date component produces a missing-parameter error, while absent
/// optional fields select their documented defaults (gregorian calendar,
/// name output, English day names).
///
/// Queries deserialize from configuration files in the usual way:
///
/// ```ignore
/// let query: WeekdayQuery = toml::from_str(
///     "day_of_month = 5\nmonth = 7\nyear = 2010\ncalendar = \"julian\"",
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeekdayQuery {
    /// Day of the month (1..=31).
    #[serde(skip_serializing_if = "Option::is_none")]
    day_of_month: Option<i64>,
    /// Month (1 = January ..= 12 = December).
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<i64>,
    /// Year (any integer; proleptic beyond the historical range).
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i64>,
    /// Request the ISO week-date day number instead of a name.
    #[serde(skip_serializing_if = "Option::is_none")]
    iso: Option<bool>,
    /// Calendar type, case-insensitively "gregorian" or "julian".
    #[serde(skip_serializing_if = "Option::is_none")]
    calendar: Option<String>,
    /// Day-name table, exactly 7 entries from Saturday through Friday.
    #[serde(skip_serializing_if = "Option::is_none")]
    day_names: Option<Vec<String>>,
}

impl WeekdayQuery {
    /// Creates an empty query with every field absent.
    pub fn new() -> Self {
        Self {
            day_of_month: None,
            month: None,
            year: None,
            iso: None,
            calendar: None,
            day_names: None,
        }
    }

    /// Creates a query for a complete date.
    pub fn for_date(day_of_month: i64, month: i64, year: i64) -> Self {
        Self::new()
            .with_day_of_month(day_of_month)
            .with_month(month)
            .with_year(year)
    }

    /// Sets the day of the month.
    pub fn with_day_of_month(mut self, day_of_month: i64) -> Self {
        self.day_of_month = Some(day_of_month);
        self
    }

    /// Sets the month.
    pub fn with_month(mut self, month: i64) -> Self {
        self.month = Some(month);
        self
    }

    /// Sets the year.
    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    /// Requests ISO week-date output (1 = Monday ..= 7 = Sunday).
    pub fn with_iso(mut self, iso: bool) -> Self {
        self.iso = Some(iso);
        self
    }

    /// Sets the calendar type by name, case-insensitively.
    ///
    /// [`Calendar`](crate::Calendar) values convert into the canonical
    /// name, so both `.with_calendar("Julian")` and
    /// `.with_calendar(Calendar::Julian)` work.
    pub fn with_calendar(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }

    /// Sets the day-name table (Saturday through Friday order).
    pub fn with_day_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.day_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    // --- Accessors ---

    /// Returns the day of the month, if set.
    pub fn day_of_month(&self) -> Option<i64> {
        self.day_of_month
    }

    /// Returns the month, if set.
    pub fn month(&self) -> Option<i64> {
        self.month
    }

    /// Returns the year, if set.
    pub fn year(&self) -> Option<i64> {
        self.year
    }

    /// Returns the ISO output flag, if set.
    pub fn iso(&self) -> Option<bool> {
        self.iso
    }

    /// Returns the raw calendar-type string, if set.
    pub fn calendar(&self) -> Option<&str> {
        self.calendar.as_deref()
    }

    /// Returns the day-name table, if set.
    pub fn day_names(&self) -> Option<&[String]> {
        self.day_names.as_deref()
    }
}

impl Default for WeekdayQuery {
    fn default() -> Self {
        Self::new()
    }
}
