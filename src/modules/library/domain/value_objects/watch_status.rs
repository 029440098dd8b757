use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

/// Watch status of an episode.
///
/// `Unwatched` is the initial state. The only way back from `Watched` is
/// removing the last viewing record of the episode.
#[derive(DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::WatchStatus"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatchStatus {
    Unwatched,
    Watched,
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchStatus::Unwatched => write!(f, "UNWATCHED"),
            WatchStatus::Watched => write!(f, "WATCHED"),
        }
    }
}

impl std::str::FromStr for WatchStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNWATCHED" => Ok(WatchStatus::Unwatched),
            "WATCHED" => Ok(WatchStatus::Watched),
            other => Err(AppError::Validation(format!(
                "Unknown watch status: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_round_trip() {
        assert_eq!(
            WatchStatus::from_str("WATCHED").unwrap(),
            WatchStatus::Watched
        );
        assert_eq!(WatchStatus::Unwatched.to_string(), "UNWATCHED");
        assert!(WatchStatus::from_str("watched").is_err());
    }
}
