mod model;
mod repository;

pub use model::{FxRateDB, HistoricalIndexDB};
pub use repository::SqliteObservationStore;
