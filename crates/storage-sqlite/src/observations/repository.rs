use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use fixings_core::market_data::{ObservationSession, ObservationStore, SymbolCategory};
use fixings_core::{Observation, Result};

use super::model::{FxRateDB, HistoricalIndexDB};
use crate::db::{get_connection, DbConnection};
use crate::errors::IntoCore;
use crate::schema::{fx_rates, historical_indexes};

/// Observation store backed by the `fx_rates` and `historical_indexes` tables.
#[derive(Clone)]
pub struct SqliteObservationStore {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl SqliteObservationStore {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl ObservationStore for SqliteObservationStore {
    fn open_session(&self) -> Result<Box<dyn ObservationSession + '_>> {
        let conn = get_connection(&self.pool)?;
        debug!("Opened observation session");
        Ok(Box::new(SqliteObservationSession { conn }))
    }
}

/// Holds one pooled connection; dropping the session hands it back to the pool.
struct SqliteObservationSession {
    conn: DbConnection,
}

impl Drop for SqliteObservationSession {
    fn drop(&mut self) {
        debug!("Released observation session");
    }
}

impl ObservationSession for SqliteObservationSession {
    fn distinct_symbols(&mut self, category: SymbolCategory) -> Result<Vec<String>> {
        debug!("Listing distinct symbols of {}", category.collection());
        match category {
            SymbolCategory::FxRate => fx_rates::table
                .select(fx_rates::fx_rate)
                .distinct()
                .load::<String>(&mut self.conn)
                .into_core(),
            SymbolCategory::IndexFixing => historical_indexes::table
                .select(historical_indexes::index_name)
                .distinct()
                .load::<String>(&mut self.conn)
                .into_core(),
        }
    }

    fn find_observations(
        &mut self,
        category: SymbolCategory,
        symbol: &str,
    ) -> Result<Vec<Observation>> {
        debug!(
            "Querying {} where {} = {}",
            category.collection(),
            category.symbol_field(),
            symbol
        );
        match category {
            SymbolCategory::FxRate => fx_rates::table
                .filter(fx_rates::fx_rate.eq(symbol))
                .select(FxRateDB::as_select())
                .load::<FxRateDB>(&mut self.conn)
                .into_core()?
                .into_iter()
                .map(Observation::try_from)
                .collect(),
            SymbolCategory::IndexFixing => historical_indexes::table
                .filter(historical_indexes::index_name.eq(symbol))
                .select(HistoricalIndexDB::as_select())
                .load::<HistoricalIndexDB>(&mut self.conn)
                .into_core()?
                .into_iter()
                .map(Observation::try_from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, DbPool};
    use chrono::NaiveDate;
    use fixings_core::errors::{DatabaseError, Error};
    use fixings_core::{
        CalendarId, CalendarReference, MarketDataProvider, ProviderConfig, TimeSeries,
    };
    use tempfile::TempDir;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fx(id: &str, symbol: &str, process_date: &str, value: f64) -> FxRateDB {
        FxRateDB {
            id: id.to_string(),
            fx_rate: symbol.to_string(),
            process_date: process_date.to_string(),
            value,
        }
    }

    fn index(id: &str, symbol: &str, process_date: &str, value: f64) -> HistoricalIndexDB {
        HistoricalIndexDB {
            id: id.to_string(),
            index_name: symbol.to_string(),
            process_date: process_date.to_string(),
            value,
        }
    }

    fn setup(migrate: bool) -> (TempDir, Arc<DbPool>) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("fixings.db");
        let db_path = init(db_path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();
        if migrate {
            run_migrations(&pool).unwrap();
        }
        (dir, pool)
    }

    fn seed(pool: &DbPool) {
        let mut conn = pool.get().unwrap();
        diesel::insert_into(fx_rates::table)
            .values(&vec![
                fx("fx-3", "USDCLP", "2023-12-29", 900.0),
                fx("fx-1", "USDCLP", "2023-01-02", 850.0),
                fx("fx-2", "USDCLP", "2023-06-15 00:00:00", 870.0),
                fx("fx-4", "EURUSD", "2023-06-15", 1.09),
            ])
            .execute(&mut conn)
            .unwrap();
        diesel::insert_into(historical_indexes::table)
            .values(&vec![
                index("ix-1", "SOFR_INDEX", "2023-06-14", 1.071),
                index("ix-2", "SOFR_INDEX", "2023-06-15", 1.072),
                index("ix-3", "SOFRTERM_1Y", "2023-06-15", 0.0471),
            ])
            .execute(&mut conn)
            .unwrap();
    }

    fn config() -> ProviderConfig {
        ProviderConfig::default().with_calendar_reference(CalendarReference::Fixed(d(2024, 1, 15)))
    }

    #[test]
    fn test_session_lists_distinct_symbols_per_collection() {
        let (_dir, pool) = setup(true);
        seed(&pool);
        let store = SqliteObservationStore::new(pool);
        let mut session = store.open_session().unwrap();

        let mut fx_names = session.distinct_symbols(SymbolCategory::FxRate).unwrap();
        fx_names.sort();
        assert_eq!(fx_names, vec!["EURUSD".to_string(), "USDCLP".to_string()]);

        let mut index_names = session
            .distinct_symbols(SymbolCategory::IndexFixing)
            .unwrap();
        index_names.sort();
        assert_eq!(
            index_names,
            vec!["SOFRTERM_1Y".to_string(), "SOFR_INDEX".to_string()]
        );
    }

    #[test]
    fn test_session_finds_observations_by_exact_name() {
        let (_dir, pool) = setup(true);
        seed(&pool);
        let store = SqliteObservationStore::new(pool);
        let mut session = store.open_session().unwrap();

        let observations = session
            .find_observations(SymbolCategory::FxRate, "USDCLP")
            .unwrap();
        assert_eq!(observations.len(), 3);
        assert!(session
            .find_observations(SymbolCategory::FxRate, "USD")
            .unwrap()
            .is_empty());
        assert!(session
            .find_observations(SymbolCategory::IndexFixing, "USDCLP")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_provider_loads_from_sqlite() {
        let (_dir, pool) = setup(true);
        seed(&pool);
        let store = SqliteObservationStore::new(pool.clone());
        let provider = MarketDataProvider::load(&store, &config()).unwrap();

        let full_year = provider
            .get_index_values("2023-01-01", "2023-12-31", &["USDCLP"])
            .unwrap();
        let expected: TimeSeries = vec![
            (d(2023, 1, 2), 850.0),
            (d(2023, 6, 15), 870.0),
            (d(2023, 12, 29), 900.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(full_year["USDCLP"], expected);
        assert_eq!(
            full_year["USDCLP"].keys().collect::<Vec<_>>(),
            vec![d(2023, 1, 2), d(2023, 6, 15), d(2023, 12, 29)]
        );

        let june = provider
            .get_index_values("2023-06-01", "2023-06-30", &["USDCLP", "SOFR_INDEX"])
            .unwrap();
        assert_eq!(june["USDCLP"].len(), 1);
        assert_eq!(june["USDCLP"].get(d(2023, 6, 15)).unwrap(), 870.0);
        assert_eq!(june["SOFR_INDEX"].len(), 2);

        let calendars = provider.get_calendars();
        assert_eq!(calendars.len(), 3);
        assert_eq!(calendars[&CalendarId::Scl].end_date(), d(2026, 1, 15));

        // The load connection went back to the pool
        let state = pool.state();
        assert_eq!(state.connections, state.idle_connections);
    }

    #[test]
    fn test_load_fails_without_schema() {
        let (_dir, pool) = setup(false);
        let store = SqliteObservationStore::new(pool.clone());
        let err = MarketDataProvider::load(&store, &config()).unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::QueryFailed(_))));

        let state = pool.state();
        assert_eq!(state.connections, state.idle_connections);
    }

    #[test]
    fn test_load_fails_on_malformed_document() {
        let (_dir, pool) = setup(true);
        seed(&pool);
        {
            let mut conn = pool.get().unwrap();
            diesel::insert_into(fx_rates::table)
                .values(&fx("fx-bad", "USDCLP", "29/12/2023", 901.0))
                .execute(&mut conn)
                .unwrap();
        }
        let store = SqliteObservationStore::new(pool);
        let err = MarketDataProvider::load(&store, &config()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("fx-bad"));
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let (_dir, pool) = setup(true);
        run_migrations(&pool).unwrap();
    }
}
