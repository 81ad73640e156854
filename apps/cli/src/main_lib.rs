use std::collections::BTreeMap;

use serde::Serialize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fixings_core::{BusinessCalendar, CalendarId, MarketDataProvider, MarketDataSource, TimeSeries};
use fixings_storage_sqlite::{create_pool, init, run_migrations, SqliteObservationStore};

use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("FIXINGS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_provider(config: &Config) -> anyhow::Result<MarketDataProvider> {
    let db_path = init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;

    let store = SqliteObservationStore::new(pool);
    Ok(MarketDataProvider::load(&store, &config.provider_config())?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutput {
    pub calendars: BTreeMap<String, BusinessCalendar>,
    pub series: BTreeMap<String, TimeSeries>,
}

pub fn run_query(source: &dyn MarketDataSource, config: &Config) -> anyhow::Result<QueryOutput> {
    let symbols: Vec<&str> = config.symbols.iter().map(String::as_str).collect();
    let series = source.get_index_values(&config.initial_date, &config.end_date, &symbols)?;

    let calendars = CalendarId::ALL
        .iter()
        .filter_map(|id| {
            source
                .get_calendars()
                .get(id)
                .map(|calendar| (id.to_string(), calendar.clone()))
        })
        .collect();

    Ok(QueryOutput {
        calendars,
        series: series.into_iter().collect(),
    })
}
