use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::utils::time_utils::add_years;

/// Valid business days for one jurisdiction over a bounded forward horizon.
///
/// Saturdays, Sundays and registered holidays are not business days.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCalendar {
    start_date: NaiveDate,
    horizon_years: u32,
    holidays: BTreeSet<NaiveDate>,
}

impl BusinessCalendar {
    pub fn new(start_date: NaiveDate, horizon_years: u32) -> Self {
        Self {
            start_date,
            horizon_years,
            holidays: BTreeSet::new(),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Last date covered by the horizon.
    pub fn end_date(&self) -> NaiveDate {
        add_years(self.start_date, self.horizon_years)
    }

    pub fn add_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.insert(date)
    }

    pub fn with_holidays<I: IntoIterator<Item = NaiveDate>>(mut self, holidays: I) -> Self {
        self.holidays.extend(holidays);
        self
    }

    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.holidays.contains(&date)
    }

    /// `date` itself when it is a business day, otherwise the first business day after it.
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// `date` itself when it is a business day, otherwise the last business day before it.
    pub fn previous_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            match current.pred_opt() {
                Some(prev) => current = prev,
                None => break,
            }
        }
        current
    }

    /// Moves `days` business days away from `date`; negative values move backwards.
    ///
    /// A zero shift returns `date` unchanged.
    pub fn shift(&self, date: NaiveDate, days: i32) -> NaiveDate {
        let mut current = date;
        for _ in 0..days.unsigned_abs() {
            current = if days > 0 {
                match current.succ_opt() {
                    Some(next) => self.next_business_day(next),
                    None => return current,
                }
            } else {
                match current.pred_opt() {
                    Some(prev) => self.previous_business_day(prev),
                    None => return current,
                }
            };
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn horizon_spans_requested_years() {
        let cal = BusinessCalendar::new(d(2024, 3, 15), 2);
        assert_eq!(cal.start_date(), d(2024, 3, 15));
        assert_eq!(cal.end_date(), d(2026, 3, 15));
        assert_eq!(cal.horizon_years(), 2);
    }

    #[test]
    fn weekends_and_holidays_are_not_business_days() {
        let mut cal = BusinessCalendar::new(d(2024, 1, 1), 2);
        // 2024-09-18 is a Wednesday
        assert!(cal.is_business_day(d(2024, 9, 18)));
        assert!(cal.add_holiday(d(2024, 9, 18)));
        assert!(!cal.add_holiday(d(2024, 9, 18)));
        assert!(!cal.is_business_day(d(2024, 9, 18)));
        assert!(!cal.is_business_day(d(2024, 9, 21)));
        assert!(!cal.is_business_day(d(2024, 9, 22)));
    }

    #[test]
    fn next_and_previous_skip_non_business_days() {
        let cal = BusinessCalendar::new(d(2024, 1, 1), 2).with_holidays([d(2024, 9, 23)]);
        // Saturday -> skip Sunday and the Monday holiday
        assert_eq!(cal.next_business_day(d(2024, 9, 21)), d(2024, 9, 24));
        assert_eq!(cal.previous_business_day(d(2024, 9, 23)), d(2024, 9, 20));
        assert_eq!(cal.next_business_day(d(2024, 9, 20)), d(2024, 9, 20));
    }

    #[test]
    fn shift_counts_business_days_both_ways() {
        let cal = BusinessCalendar::new(d(2024, 1, 1), 2).with_holidays([d(2024, 9, 23)]);
        // Friday + 1 -> Tuesday (weekend and holiday skipped)
        assert_eq!(cal.shift(d(2024, 9, 20), 1), d(2024, 9, 24));
        assert_eq!(cal.shift(d(2024, 9, 24), -1), d(2024, 9, 20));
        assert_eq!(cal.shift(d(2024, 9, 16), 5), d(2024, 9, 24));
        assert_eq!(cal.shift(d(2024, 9, 21), 0), d(2024, 9, 21));
    }
}
