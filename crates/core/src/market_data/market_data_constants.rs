/// Document collections holding the raw observations
pub const FX_RATES_COLLECTION: &str = "fx_rates";
pub const HISTORICAL_INDEXES_COLLECTION: &str = "historical_indexes";

/// Field carrying the symbol name in each collection
pub const FX_RATES_SYMBOL_FIELD: &str = "fx_rate";
pub const HISTORICAL_INDEXES_SYMBOL_FIELD: &str = "index_name";

/// Forward horizon of the business calendars, in years
pub const DEFAULT_CALENDAR_HORIZON_YEARS: u32 = 2;
