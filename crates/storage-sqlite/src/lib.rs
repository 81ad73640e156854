//! SQLite storage implementation for the fixings provider.
//!
//! This crate holds everything Diesel related: connection pooling, migrations,
//! the row models of the `fx_rates` and `historical_indexes` collections and the
//! [`SqliteObservationStore`] that implements the `ObservationStore` contract
//! defined in `fixings-core`.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod observations;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use observations::SqliteObservationStore;

// Re-export from fixings-core for convenience
pub use fixings_core::errors::{DatabaseError, Error, Result};
