//! Fixings Core - time series, market data provider, and business calendars.
//!
//! This crate holds the in-memory model for FX rates and index fixings.
//! It is database-agnostic and defines the `ObservationStore` trait that is
//! implemented by the `storage-sqlite` crate.

pub mod calendars;
pub mod errors;
pub mod market_data;
pub mod time_series;
pub mod utils;

// Re-export the types most callers need
pub use calendars::{BusinessCalendar, CalendarId};
pub use market_data::{
    CalendarReference, MarketDataProvider, MarketDataSource, ObservationSession,
    ObservationStore, ProviderConfig, SymbolCategory,
};
pub use time_series::{Observation, TimeSeries};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
