use chrono::{Local, Months, NaiveDate};

use crate::errors::{Result, ValidationError};

/// Canonical textual date format accepted at the provider boundary.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date string.
///
/// Surrounding whitespace is ignored. Anything else that is not a valid calendar
/// date is reported as a validation error carrying the offending input.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).map_err(|source| {
        ValidationError::DateParse {
            input: input.to_string(),
            source,
        }
        .into()
    })
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Adds whole years to a date, clamping Feb 29 to Feb 28 when the target year
/// is not a leap year. Saturates at `NaiveDate::MAX`.
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    years
        .checked_mul(12)
        .and_then(|months| date.checked_add_months(Months::new(months)))
        .unwrap_or(NaiveDate::MAX)
}
