//! Command line and environment configuration for the `fixings` binary.
//!
//! | Option | Env | Description |
//! |--------|-----|-------------|
//! | `--db-path` | `FIXINGS_DB_PATH` | SQLite file holding the observation collections |
//! | `--calendar-date` | `FIXINGS_CALENDAR_DATE` | Calendar reference date (`today` when absent) |
//! | `--horizon-years` | `FIXINGS_CALENDAR_HORIZON_YEARS` | Calendar horizon in years |
//! | `--pretty` | | Pretty-print the JSON output |
//!
//! ```bash
//! fixings --db-path ./db/fixings.db 2023-01-01 2023-12-31 USDCLP SOFR_INDEX
//! ```

use clap::Parser;
use fixings_core::market_data::DEFAULT_CALENDAR_HORIZON_YEARS;
use fixings_core::{CalendarReference, ProviderConfig};

/// Query FX rates and index fixings over a date range.
#[derive(Debug, Parser)]
#[command(name = "fixings", version, about)]
pub struct Config {
    /// SQLite database with the `fx_rates` and `historical_indexes` collections.
    #[arg(long, env = "FIXINGS_DB_PATH")]
    pub db_path: String,

    /// Reference date the business calendars start from: `today` or `YYYY-MM-DD`.
    #[arg(long, env = "FIXINGS_CALENDAR_DATE", default_value = "today")]
    pub calendar_date: CalendarReference,

    #[arg(long, env = "FIXINGS_CALENDAR_HORIZON_YEARS", default_value_t = DEFAULT_CALENDAR_HORIZON_YEARS)]
    pub horizon_years: u32,

    #[arg(long)]
    pub pretty: bool,

    /// First date of the window (inclusive), `YYYY-MM-DD`.
    pub initial_date: String,

    /// Last date of the window (inclusive), `YYYY-MM-DD`.
    pub end_date: String,

    /// FX rate or index names.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::default()
            .with_calendar_reference(self.calendar_date)
            .with_calendar_horizon_years(self.horizon_years)
    }
}
