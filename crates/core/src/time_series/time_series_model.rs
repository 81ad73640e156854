use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use crate::errors::{Error, Result};

/// A single (date, value) data point for a symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Ordered date -> value history for one symbol.
///
/// At most one value is kept per date and iteration is always in ascending
/// date order, whatever order observations were inserted in.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct TimeSeries {
    values: BTreeMap<NaiveDate, f64>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the value recorded for `date`.
    ///
    /// Returns the value that was replaced, if any.
    pub fn set(&mut self, date: NaiveDate, value: f64) -> Option<f64> {
        self.values.insert(date, value)
    }

    /// Point lookup; fails with `NotFound` when nothing was recorded for `date`.
    pub fn get(&self, date: NaiveDate) -> Result<f64> {
        self.values
            .get(&date)
            .copied()
            .ok_or_else(|| Error::missing_observation(date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.values.contains_key(&date)
    }

    /// Returns a new series holding every entry with `start <= date <= end`.
    ///
    /// An inverted range yields an empty series.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> TimeSeries {
        if start > end {
            return TimeSeries::new();
        }
        self.values
            .range(start..=end)
            .map(|(date, value)| (*date, *value))
            .collect()
    }

    /// Dates in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.values.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Earliest observation.
    pub fn first(&self) -> Option<Observation> {
        self.values
            .first_key_value()
            .map(|(date, value)| Observation::new(*date, *value))
    }

    /// Latest observation.
    pub fn last(&self) -> Option<Observation> {
        self.values
            .last_key_value()
            .map(|(date, value)| Observation::new(*date, *value))
    }
}

/// Ascending iterator over the observations of a [`TimeSeries`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, NaiveDate, f64>,
}

impl Iterator for Iter<'_> {
    type Item = Observation;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(date, value)| Observation::new(*date, *value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(date, value)| Observation::new(*date, *value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = Observation;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(NaiveDate, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, f64)>>(iter: I) -> Self {
        let mut series = TimeSeries::new();
        series.extend(iter);
        series
    }
}

impl FromIterator<Observation> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        iter.into_iter().map(|o| (o.date, o.value)).collect()
    }
}

impl Extend<(NaiveDate, f64)> for TimeSeries {
    fn extend<I: IntoIterator<Item = (NaiveDate, f64)>>(&mut self, iter: I) {
        for (date, value) in iter {
            self.set(date, value);
        }
    }
}
