//! Database models for the observation collections.

use diesel::prelude::*;
use fixings_core::errors::{Error, ValidationError};
use fixings_core::utils::time_utils::parse_date;
use fixings_core::Observation;

/// Row of the `fx_rates` collection
#[derive(Queryable, Identifiable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::fx_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FxRateDB {
    pub id: String,
    pub fx_rate: String,
    pub process_date: String,
    pub value: f64,
}

/// Row of the `historical_indexes` collection
#[derive(Queryable, Identifiable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::historical_indexes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HistoricalIndexDB {
    pub id: String,
    pub index_name: String,
    pub process_date: String,
    pub value: f64,
}

impl TryFrom<FxRateDB> for Observation {
    type Error = Error;

    fn try_from(row: FxRateDB) -> Result<Self, Self::Error> {
        to_observation(&row.id, &row.process_date, row.value)
    }
}

impl TryFrom<HistoricalIndexDB> for Observation {
    type Error = Error;

    fn try_from(row: HistoricalIndexDB) -> Result<Self, Self::Error> {
        to_observation(&row.id, &row.process_date, row.value)
    }
}

// process_date may carry a time part ("2023-01-02 00:00:00" or "2023-01-02T00:00:00Z");
// only the day matters.
fn to_observation(id: &str, process_date: &str, value: f64) -> Result<Observation, Error> {
    let trimmed = process_date.trim();
    let day = trimmed
        .split_once([' ', 'T'])
        .map_or(trimmed, |(day, _)| day);
    let date = parse_date(day).map_err(|e| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "document {} has an invalid process_date: {}",
            id, e
        )))
    })?;
    if !value.is_finite() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "document {} has a non-finite value",
            id
        ))));
    }
    Ok(Observation::new(date, value))
}
