use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::HashMap;

use super::market_data_model::{ProviderConfig, SymbolCategory};
use super::market_data_traits::{MarketDataSource, ObservationSession, ObservationStore};
use super::symbol_resolver::{SeriesBySymbol, SymbolResolver};
use crate::calendars::{BusinessCalendar, CalendarId};
use crate::errors::{Error, Result};
use crate::time_series::TimeSeries;
use crate::utils::time_utils::parse_date;

/// FX rate and index fixing series bulk-loaded from an [`ObservationStore`],
/// plus the business calendars for the supported jurisdictions.
///
/// A provider only exists fully loaded and is never mutated afterwards, so it
/// can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct MarketDataProvider {
    fx_series: SeriesBySymbol,
    index_series: SeriesBySymbol,
    calendars: HashMap<CalendarId, BusinessCalendar>,
}

impl MarketDataProvider {
    /// Loads every FX rate and index fixing from `store` and builds the calendars.
    ///
    /// Any store failure aborts the whole load.
    pub fn load(store: &dyn ObservationStore, config: &ProviderConfig) -> Result<Self> {
        let (fx_series, index_series) = {
            let mut session = store.open_session()?;
            let fx_series = load_category(session.as_mut(), SymbolCategory::FxRate)?;
            let index_series = load_category(session.as_mut(), SymbolCategory::IndexFixing)?;
            (fx_series, index_series)
        };

        let resolver = SymbolResolver::new(vec![
            (SymbolCategory::FxRate, &fx_series),
            (SymbolCategory::IndexFixing, &index_series),
        ]);
        for symbol in fx_series.keys() {
            let categories = resolver.categories_of(symbol);
            if let [winner, shadowed @ ..] = categories.as_slice() {
                if !shadowed.is_empty() {
                    warn!(
                        "Symbol {} exists as {:?}; queries will use the {} series",
                        symbol, categories, winner
                    );
                }
            }
        }

        let reference_date = config.calendar_reference.resolve();
        let calendars = build_calendars(reference_date, config.calendar_horizon_years);

        info!(
            "Loaded {} FX rates and {} index fixings; calendars start {} for {} years",
            fx_series.len(),
            index_series.len(),
            reference_date,
            config.calendar_horizon_years
        );

        Ok(Self {
            fx_series,
            index_series,
            calendars,
        })
    }

    pub fn get_calendars(&self) -> &HashMap<CalendarId, BusinessCalendar> {
        &self.calendars
    }

    pub fn get_calendar(&self, id: CalendarId) -> Option<&BusinessCalendar> {
        self.calendars.get(&id)
    }

    /// Returns, for each requested symbol, a fresh series restricted to
    /// `initial_date..=end_date`.
    ///
    /// Dates are ISO `YYYY-MM-DD` strings. Fails with `InvalidArgument` when the
    /// list is empty or when a symbol is neither an FX rate nor an index.
    pub fn get_index_values<S: AsRef<str>>(
        &self,
        initial_date: &str,
        end_date: &str,
        symbol_names: &[S],
    ) -> Result<HashMap<String, TimeSeries>> {
        if symbol_names.is_empty() {
            return Err(Error::InvalidArgument(
                "empty symbol list: at least one FX rate or index name is required".to_string(),
            ));
        }

        let start = parse_date(initial_date)?;
        let end = parse_date(end_date)?;
        let resolver = self.resolver();

        let mut result = HashMap::with_capacity(symbol_names.len());
        for name in symbol_names {
            let name = name.as_ref();
            let (_, series) = resolver
                .resolve(name)
                .ok_or_else(|| Error::unknown_symbol(name))?;
            result.insert(name.to_string(), series.range(start, end));
        }
        Ok(result)
    }

    /// Value recorded for `symbol` on exactly `date`.
    pub fn get_index_value_for_date(&self, date: NaiveDate, symbol: &str) -> Result<f64> {
        let (_, series) = self
            .resolver()
            .resolve(symbol)
            .ok_or_else(|| Error::unknown_symbol(symbol))?;
        series.get(date)
    }

    /// Category a query for `symbol` resolves to.
    pub fn category_of(&self, symbol: &str) -> Option<SymbolCategory> {
        self.resolver().resolve(symbol).map(|(category, _)| category)
    }

    /// Symbol names loaded for `category`, sorted.
    pub fn symbols(&self, category: SymbolCategory) -> Vec<String> {
        let mut names: Vec<String> = self.series_for(category).keys().cloned().collect();
        names.sort();
        names
    }

    fn series_for(&self, category: SymbolCategory) -> &SeriesBySymbol {
        match category {
            SymbolCategory::FxRate => &self.fx_series,
            SymbolCategory::IndexFixing => &self.index_series,
        }
    }

    fn resolver(&self) -> SymbolResolver<'_> {
        SymbolResolver::new(
            SymbolCategory::PRIORITY
                .iter()
                .map(|category| (*category, self.series_for(*category)))
                .collect(),
        )
    }
}

impl MarketDataSource for MarketDataProvider {
    fn get_calendars(&self) -> &HashMap<CalendarId, BusinessCalendar> {
        MarketDataProvider::get_calendars(self)
    }

    fn get_index_values(
        &self,
        initial_date: &str,
        end_date: &str,
        symbol_names: &[&str],
    ) -> Result<HashMap<String, TimeSeries>> {
        MarketDataProvider::get_index_values(self, initial_date, end_date, symbol_names)
    }

    fn get_index_value_for_date(&self, date: NaiveDate, symbol: &str) -> Result<f64> {
        MarketDataProvider::get_index_value_for_date(self, date, symbol)
    }
}

fn load_category(
    session: &mut dyn ObservationSession,
    category: SymbolCategory,
) -> Result<SeriesBySymbol> {
    let symbols = session.distinct_symbols(category)?;
    let mut series = SeriesBySymbol::with_capacity(symbols.len());

    for symbol in symbols {
        let observations = session.find_observations(category, &symbol)?;
        debug!(
            "Fetched {} observations for {} {}",
            observations.len(),
            category,
            symbol
        );
        for observation in observations {
            let ts = series.entry(symbol.clone()).or_insert_with(TimeSeries::new);
            if let Some(previous) = ts.set(observation.date, observation.value) {
                debug!(
                    "Duplicate {} observation for {} on {}: {} replaced by {}",
                    category, symbol, observation.date, previous, observation.value
                );
            }
        }
    }

    Ok(series)
}

fn build_calendars(
    reference_date: NaiveDate,
    horizon_years: u32,
) -> HashMap<CalendarId, BusinessCalendar> {
    CalendarId::ALL
        .iter()
        .map(|id| (*id, BusinessCalendar::new(reference_date, horizon_years)))
        .collect()
}
