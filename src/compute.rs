//! Weekday computation: ordered validation, defaulting, and output.

use tracing::debug;

use crate::calendar::Calendar;
use crate::congruence::{congruence, is_gregorian_leap_year};
use crate::error::{Field, WeekdayError};
use crate::query::WeekdayQuery;
use crate::weekday::{Weekday, DEFAULT_DAY_NAMES};

/// Computes the day of the week for the date described by `query`.
///
/// Validation runs in a fixed order and the first failing check reports:
/// the three required components (day of month, month, year, in that
/// order), then the month range, the day range, day-within-month
/// consistency, February length, the calendar type, and finally the
/// day-name table. Absent optional fields then take their defaults:
/// gregorian calendar, name output, and the English
/// [`DEFAULT_DAY_NAMES`] table.
///
/// The result is [`Weekday::Name`] from the configured table, or
/// [`Weekday::Iso`] (1 = Monday ..= 7 = Sunday) when the query sets `iso`.
/// A supplied day-name table is still validated when `iso` is set, but
/// never consulted for output.
///
/// Pure function of its inputs; calling it any number of times with the
/// same query yields the same result.
///
/// # Errors
///
/// Returns [`WeekdayError::MissingParameter`] when a required component is
/// absent and [`WeekdayError::InvalidParameter`] when a supplied value
/// violates its domain.
///
/// # Examples
///
/// ```ignore
/// let query = WeekdayQuery::for_date(5, 7, 2010);
/// assert_eq!(compute_weekday(&query)?, Weekday::Name("Monday".into()));
///
/// let query = query.with_iso(true);
/// assert_eq!(compute_weekday(&query)?, Weekday::Iso(1));
/// ```
#[tracing::instrument(skip(query))]
pub fn compute_weekday(query: &WeekdayQuery) -> Result<Weekday, WeekdayError> {
    // --- Validation (ordered; the first failing check reports) ---
    let day_of_month = query.day_of_month().ok_or(WeekdayError::MissingParameter {
        field: Field::DayOfMonth,
    })?;
    let month = query.month().ok_or(WeekdayError::MissingParameter {
        field: Field::Month,
    })?;
    let year = query.year().ok_or(WeekdayError::MissingParameter { field: Field::Year })?;

    if !(1..=12).contains(&month) {
        return Err(WeekdayError::InvalidParameter {
            field: Field::Month,
            reason: format!("month {month} is out of range (must be 1..=12)"),
        });
    }
    if !(1..=31).contains(&day_of_month) {
        return Err(WeekdayError::InvalidParameter {
            field: Field::DayOfMonth,
            reason: format!("day of month {day_of_month} is out of range (must be 1..=31)"),
        });
    }
    if matches!(month, 4 | 6 | 9 | 11) && day_of_month > 30 {
        return Err(WeekdayError::InvalidParameter {
            field: Field::DayOfMonth,
            reason: format!("month {month} does not have day {day_of_month}"),
        });
    }
    // February length follows the Gregorian leap rule for both calendars.
    let february_days = if is_gregorian_leap_year(year) { 29 } else { 28 };
    if month == 2 && day_of_month > february_days {
        return Err(WeekdayError::InvalidParameter {
            field: Field::DayOfMonth,
            reason: format!("month 2 does not have day {day_of_month} in year {year}"),
        });
    }
    let calendar = match query.calendar() {
        Some(name) => name.parse::<Calendar>()?,
        None => Calendar::default(),
    };
    if let Some(names) = query.day_names() {
        if names.len() != 7 {
            return Err(WeekdayError::InvalidParameter {
                field: Field::DayNames,
                reason: format!(
                    "day names must have exactly 7 entries (Saturday through Friday), got {}",
                    names.len()
                ),
            });
        }
    }

    // --- Defaulting ---
    let iso = query.iso().unwrap_or(false);

    // --- Congruence ---
    let h = congruence(day_of_month, month, year, calendar);
    debug!(day_of_month, month, year, %calendar, iso, h = h.get(), "congruence evaluated");

    // --- Output ---
    if iso {
        Ok(Weekday::Iso(h.iso()))
    } else {
        let name = match query.day_names() {
            Some(names) => names[h.index()].clone(),
            None => DEFAULT_DAY_NAMES[h.index()].to_string(),
        };
        Ok(Weekday::Name(name))
    }
}
