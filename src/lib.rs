//! # zeller
//!
//! Day-of-week computation via Zeller's congruence for the proleptic
//! Gregorian and Julian calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["WeekdayQuery"] -->|"compute_weekday()"| B["validation (ordered)"]
//!     B --> C["congruence()"]
//!     C --> D["Remainder (0..=6, 0=Saturday)"]
//!     D -->|"name table"| E["Weekday::Name"]
//!     D -->|".iso()"| F["Weekday::Iso (1=Monday..7=Sunday)"]
//!     G["date string"] -->|"weekday_for_date_str()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use zeller::{compute_weekday, Weekday, WeekdayQuery};
//!
//! // July 5, 2010 was a Monday.
//! let query = WeekdayQuery::for_date(5, 7, 2010);
//! assert_eq!(compute_weekday(&query)?, Weekday::Name("Monday".into()));
//!
//! // ISO week-date numbering.
//! assert_eq!(compute_weekday(&query.clone().with_iso(true))?, Weekday::Iso(1));
//!
//! // Same civil date under the Julian calendar.
//! let julian = query.with_calendar("julian");
//! assert_eq!(compute_weekday(&julian)?, Weekday::Name("Sunday".into()));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `compute` | The validated weekday computation |
//! | `congruence` | Zeller's congruence arithmetic and the remainder newtype |
//! | `calendar` | Gregorian/Julian calendar selection |
//! | `weekday` | Output value and the default day-name table |
//! | `query` | Builder-style query input |
//! | `date_str` | chrono-backed string-date adapter |
//! | `error` | Error types |

mod calendar;
mod compute;
mod congruence;
mod date_str;
mod error;
mod query;
mod weekday;

pub use calendar::Calendar;
pub use compute::compute_weekday;
pub use congruence::{congruence, is_gregorian_leap_year, Remainder};
pub use date_str::{weekday_for_date_str, DateStrError};
pub use error::{Field, WeekdayError};
pub use query::WeekdayQuery;
pub use weekday::{Weekday, DEFAULT_DAY_NAMES};
