use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Jurisdictions the provider builds a calendar for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalendarId {
    Scl,
    Ny,
    London,
}

impl CalendarId {
    pub const ALL: [CalendarId; 3] = [CalendarId::Scl, CalendarId::Ny, CalendarId::London];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarId::Scl => "SCL",
            CalendarId::Ny => "NY",
            CalendarId::London => "LONDON",
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SCL" => Ok(CalendarId::Scl),
            "NY" => Ok(CalendarId::Ny),
            "LONDON" => Ok(CalendarId::London),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown calendar code: {}",
                other
            ))
            .into()),
        }
    }
}
