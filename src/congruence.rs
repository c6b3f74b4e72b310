//! Zeller's congruence arithmetic.

use crate::calendar::Calendar;

/// Congruence remainder produced by the weekday formula.
///
/// The value is always in 0..=6 where 0 = Saturday, 1 = Sunday, ...,
/// 6 = Friday. That mapping is fixed by the congruence itself; use
/// [`Remainder::iso`] for the ISO week-date numbering instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Remainder(u8);

impl Remainder {
    /// Returns the raw remainder value (0..=6, 0 = Saturday).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based index for day-name table lookup (0..=6).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the ISO week-date day number (1 = Monday ..= 7 = Sunday).
    pub fn iso(self) -> u8 {
        ((self.0 + 5) % 7) + 1
    }
}

/// Applies Zeller's congruence to a calendar date.
///
/// `month` uses ordinary 1..=12 numbering. For January and February the
/// year term evaluates with `year - 1` while the month value feeds the
/// formula unchanged, exactly as the source algorithm defines it.
///
/// The arithmetic is total: every floor is a euclidean division and the
/// final reduction is a euclidean remainder, so any combination of inputs
/// (negative years included) maps into 0..=6. Intermediates are `i128`,
/// which no `i64` year can overflow. Callers are responsible for supplying
/// a month in 1..=12 and a day that exists in that month;
/// [`compute_weekday`](crate::compute_weekday) performs those checks.
///
/// # Examples
///
/// ```ignore
/// let h = congruence(5, 7, 2010, Calendar::Gregorian);
/// assert_eq!(h.get(), 2); // Monday
/// assert_eq!(h.iso(), 1);
/// ```
pub fn congruence(day_of_month: i64, month: i64, year: i64, calendar: Calendar) -> Remainder {
    let q = day_of_month as i128;
    let m = month as i128;
    let y = if month < 3 {
        year as i128 - 1
    } else {
        year as i128
    };

    let common = q + (26 * (m + 1)).div_euclid(10) + y + y.div_euclid(4);
    let total = match calendar {
        Calendar::Gregorian => common + 6 * y.div_euclid(100) + y.div_euclid(400),
        Calendar::Julian => common + 5,
    };

    Remainder(total.rem_euclid(7) as u8)
}

/// Reports whether `year` is a leap year under the Gregorian rule.
///
/// February length validation applies this rule for both calendars.
// TODO: confirm with the algorithm owner whether Julian-calendar queries
// should use the every-4-years Julian leap rule here instead.
pub fn is_gregorian_leap_year(year: i64) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}
