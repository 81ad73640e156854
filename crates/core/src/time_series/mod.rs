//! Time series module - the per-symbol ordered date -> value store.

mod time_series_model;

#[cfg(test)]
mod time_series_tests;

pub use time_series_model::{Iter, Observation, TimeSeries};
