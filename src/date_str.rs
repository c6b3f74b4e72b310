//! String-date adapter backed by chrono.

use chrono::{Datelike, NaiveDate};

use crate::compute::compute_weekday;
use crate::error::WeekdayError;
use crate::query::WeekdayQuery;
use crate::weekday::Weekday;

/// Error type for the string-date adapter.
///
/// The adapter either fails to parse the date string, or forwards a
/// validation failure from the core computation unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateStrError {
    /// The date string could not be parsed as `YYYY-MM-DD`.
    #[error("could not parse date string: {0}")]
    Parse(#[from] chrono::ParseError),

    /// The core computation rejected the query.
    #[error(transparent)]
    Weekday(#[from] WeekdayError),
}

/// Computes the weekday for an ISO 8601 `YYYY-MM-DD` date string.
///
/// Parses `date` with chrono's [`NaiveDate`] parser, copies the day of
/// month, month, and year onto `options` (replacing any date components
/// already set there), and forwards to
/// [`compute_weekday`](crate::compute_weekday). The `options` query
/// contributes only the output controls: `iso`, `calendar`, and
/// `day_names`.
///
/// The adapter performs no validation of its own; parse failures surface
/// as [`DateStrError::Parse`] and everything else is the core's contract.
///
/// # Examples
///
/// ```ignore
/// let day = weekday_for_date_str("2010-07-05", &WeekdayQuery::new())?;
/// assert_eq!(day, Weekday::Name("Monday".into()));
/// ```
pub fn weekday_for_date_str(
    date: &str,
    options: &WeekdayQuery,
) -> Result<Weekday, DateStrError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    let query = options
        .clone()
        .with_day_of_month(i64::from(parsed.day()))
        .with_month(i64::from(parsed.month()))
        .with_year(i64::from(parsed.year()));
    Ok(compute_weekday(&query)?)
}
