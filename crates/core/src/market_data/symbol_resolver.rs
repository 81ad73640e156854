use std::collections::HashMap;

use super::market_data_model::SymbolCategory;
use crate::time_series::TimeSeries;

pub type SeriesBySymbol = HashMap<String, TimeSeries>;

/// Resolves bare symbol names against category mappings tried in a fixed order.
///
/// The first mapping that knows the name wins.
#[derive(Debug, Clone)]
pub struct SymbolResolver<'a> {
    sources: Vec<(SymbolCategory, &'a SeriesBySymbol)>,
}

impl<'a> SymbolResolver<'a> {
    pub fn new(sources: Vec<(SymbolCategory, &'a SeriesBySymbol)>) -> Self {
        Self { sources }
    }

    pub fn resolve(&self, symbol: &str) -> Option<(SymbolCategory, &'a TimeSeries)> {
        self.sources
            .iter()
            .find_map(|(category, series)| series.get(symbol).map(|ts| (*category, ts)))
    }

    /// Every category that holds `symbol`, in priority order.
    pub fn categories_of(&self, symbol: &str) -> Vec<SymbolCategory> {
        self.sources
            .iter()
            .filter(|(_, series)| series.contains_key(symbol))
            .map(|(category, _)| *category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(value: f64) -> TimeSeries {
        let mut ts = TimeSeries::new();
        ts.set(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), value);
        ts
    }

    #[test]
    fn first_source_wins() {
        let fx: SeriesBySymbol = HashMap::from([("SHARED".to_string(), series(1.0))]);
        let index: SeriesBySymbol = HashMap::from([
            ("SHARED".to_string(), series(2.0)),
            ("SOFR_INDEX".to_string(), series(3.0)),
        ]);
        let resolver = SymbolResolver::new(vec![
            (SymbolCategory::FxRate, &fx),
            (SymbolCategory::IndexFixing, &index),
        ]);

        let (category, ts) = resolver.resolve("SHARED").unwrap();
        assert_eq!(category, SymbolCategory::FxRate);
        assert_eq!(ts.first().unwrap().value, 1.0);

        let (category, _) = resolver.resolve("SOFR_INDEX").unwrap();
        assert_eq!(category, SymbolCategory::IndexFixing);

        assert!(resolver.resolve("MISSING").is_none());
        assert_eq!(
            resolver.categories_of("SHARED"),
            vec![SymbolCategory::FxRate, SymbolCategory::IndexFixing]
        );
    }
}
