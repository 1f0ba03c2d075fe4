use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Self-reported marital status of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Not provided
    #[default]
    Unspecified,
    Single,
    Divorced,
    Widowed,
    Married,
}

impl MaritalStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Single => "single",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::Married => "married",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "unspecified" => Ok(Self::Unspecified),
            "single" => Ok(Self::Single),
            "divorced" => Ok(Self::Divorced),
            "widowed" => Ok(Self::Widowed),
            "married" => Ok(Self::Married),
            _ => Err(CoreError::InvalidMaritalStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
