use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::market_data_constants::{
    DEFAULT_CALENDAR_HORIZON_YEARS, FX_RATES_COLLECTION, FX_RATES_SYMBOL_FIELD,
    HISTORICAL_INDEXES_COLLECTION, HISTORICAL_INDEXES_SYMBOL_FIELD,
};
use crate::errors::Error;
use crate::utils::time_utils::{parse_date, today};

/// Logical category of a symbol, fixed by the collection it was loaded from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolCategory {
    FxRate,
    IndexFixing,
}

impl SymbolCategory {
    /// Lookup order used when resolving a bare symbol name.
    pub const PRIORITY: [SymbolCategory; 2] = [SymbolCategory::FxRate, SymbolCategory::IndexFixing];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolCategory::FxRate => "FX_RATE",
            SymbolCategory::IndexFixing => "INDEX_FIXING",
        }
    }

    /// Name of the source collection for this category.
    pub fn collection(&self) -> &'static str {
        match self {
            SymbolCategory::FxRate => FX_RATES_COLLECTION,
            SymbolCategory::IndexFixing => HISTORICAL_INDEXES_COLLECTION,
        }
    }

    /// Field holding the symbol name inside the source collection.
    pub fn symbol_field(&self) -> &'static str {
        match self {
            SymbolCategory::FxRate => FX_RATES_SYMBOL_FIELD,
            SymbolCategory::IndexFixing => HISTORICAL_INDEXES_SYMBOL_FIELD,
        }
    }
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the business calendars start counting their horizon from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarReference {
    /// Today's date on the local clock, read once when the provider loads.
    #[default]
    Today,
    Fixed(NaiveDate),
}

impl CalendarReference {
    pub fn resolve(&self) -> NaiveDate {
        match self {
            CalendarReference::Today => today(),
            CalendarReference::Fixed(date) => *date,
        }
    }
}

impl FromStr for CalendarReference {
    type Err = Error;

    /// Accepts `today` (any case) or an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("today") {
            return Ok(CalendarReference::Today);
        }
        parse_date(s)
            .map(CalendarReference::Fixed)
            .map_err(|e| Error::InvalidConfigValue(format!("calendar reference: {}", e)))
    }
}

/// Load-time settings for [`super::MarketDataProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub calendar_reference: CalendarReference,
    pub calendar_horizon_years: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            calendar_reference: CalendarReference::default(),
            calendar_horizon_years: DEFAULT_CALENDAR_HORIZON_YEARS,
        }
    }
}

impl ProviderConfig {
    pub fn with_calendar_reference(mut self, reference: CalendarReference) -> Self {
        self.calendar_reference = reference;
        self
    }

    pub fn with_calendar_horizon_years(mut self, years: u32) -> Self {
        self.calendar_horizon_years = years;
        self
    }
}
