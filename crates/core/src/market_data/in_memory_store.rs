use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

use super::market_data_model::SymbolCategory;
use super::market_data_traits::{ObservationSession, ObservationStore};
use crate::errors::Result;
use crate::time_series::Observation;

/// Observation documents kept in memory, grouped the same way the document
/// store groups them: one collection per category, one document per row.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObservationStore {
    documents: HashMap<SymbolCategory, Vec<(String, Observation)>>,
}

impl InMemoryObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        category: SymbolCategory,
        symbol: impl Into<String>,
        date: NaiveDate,
        value: f64,
    ) {
        self.documents
            .entry(category)
            .or_default()
            .push((symbol.into(), Observation::new(date, value)));
    }

    pub fn with(
        mut self,
        category: SymbolCategory,
        symbol: impl Into<String>,
        date: NaiveDate,
        value: f64,
    ) -> Self {
        self.insert(category, symbol, date, value);
        self
    }

    fn documents(&self, category: SymbolCategory) -> &[(String, Observation)] {
        self.documents
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl ObservationStore for InMemoryObservationStore {
    fn open_session(&self) -> Result<Box<dyn ObservationSession + '_>> {
        Ok(Box::new(InMemorySession { store: self }))
    }
}

struct InMemorySession<'a> {
    store: &'a InMemoryObservationStore,
}

impl ObservationSession for InMemorySession<'_> {
    fn distinct_symbols(&mut self, category: SymbolCategory) -> Result<Vec<String>> {
        let names: BTreeSet<&str> = self
            .store
            .documents(category)
            .iter()
            .map(|(symbol, _)| symbol.as_str())
            .collect();
        Ok(names.into_iter().map(str::to_string).collect())
    }

    fn find_observations(
        &mut self,
        category: SymbolCategory,
        symbol: &str,
    ) -> Result<Vec<Observation>> {
        Ok(self
            .store
            .documents(category)
            .iter()
            .filter(|(name, _)| name == symbol)
            .map(|(_, observation)| *observation)
            .collect())
    }
}
