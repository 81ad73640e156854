//! Market data module - symbol categories, store contracts, and the provider.

mod in_memory_store;
mod market_data_constants;
mod market_data_model;
mod market_data_provider;
mod market_data_traits;
mod symbol_resolver;


// Re-export the public interface
pub use in_memory_store::InMemoryObservationStore;
pub use market_data_constants::*;
pub use market_data_model::{CalendarReference, ProviderConfig, SymbolCategory};
pub use market_data_provider::MarketDataProvider;
pub use market_data_traits::{MarketDataSource, ObservationSession, ObservationStore};
pub use symbol_resolver::{SeriesBySymbol, SymbolResolver};
