use chrono::NaiveDate;
use std::collections::HashMap;

use super::market_data_model::SymbolCategory;
use crate::calendars::{BusinessCalendar, CalendarId};
use crate::errors::Result;
use crate::time_series::{Observation, TimeSeries};

/// Document store holding the raw FX rate and index fixing observations.
///
/// Implemented by the storage layer; the provider only reads through it.
pub trait ObservationStore: Send + Sync {
    /// Acquires a connection for the duration of a bulk load.
    ///
    /// The connection is released when the returned session is dropped.
    fn open_session(&self) -> Result<Box<dyn ObservationSession + '_>>;
}

/// One open connection to an [`ObservationStore`].
pub trait ObservationSession {
    /// Distinct symbol names found in the category's collection.
    fn distinct_symbols(&mut self, category: SymbolCategory) -> Result<Vec<String>>;

    /// Every observation recorded for `symbol` in the category's collection, in no
    /// particular order.
    fn find_observations(
        &mut self,
        category: SymbolCategory,
        symbol: &str,
    ) -> Result<Vec<Observation>>;
}

/// Read contract for anything that serves calendars and historical fixings.
pub trait MarketDataSource: Send + Sync {
    fn get_calendars(&self) -> &HashMap<CalendarId, BusinessCalendar>;

    fn get_index_values(
        &self,
        initial_date: &str,
        end_date: &str,
        symbol_names: &[&str],
    ) -> Result<HashMap<String, TimeSeries>>;

    fn get_index_value_for_date(&self, date: NaiveDate, symbol: &str) -> Result<f64>;
}
