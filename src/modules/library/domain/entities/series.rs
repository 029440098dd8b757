use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::library::domain::entities::Episode;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// A season within a title. Always holds at least one episode; a series
/// created without explicit episodes gets a default one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    id: i64,
    title_id: i64,
    name: String,
    episodes: Vec<Episode>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Series {
    /// Full constructor, used when rehydrating from storage.
    pub fn new(
        id: i64,
        title_id: i64,
        name: impl Into<String>,
        episodes: Vec<Episode>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let name = name.into();
        Validator::validate_series_name(&name)?;
        if episodes.is_empty() {
            return Err(AppError::Validation(
                "Series must hold at least one episode".to_string(),
            ));
        }
        Ok(Self {
            id,
            title_id,
            name,
            episodes,
            created_at,
            updated_at,
        })
    }

    /// Creates a series with its first episode.
    pub fn create(
        id: i64,
        title_id: i64,
        name: impl Into<String>,
        first_episode: Episode,
    ) -> AppResult<Self> {
        let now = Utc::now();
        Self::new(id, title_id, name, vec![first_episode], now, now)
    }

    /// Default series with an empty name and one default episode,
    /// materialized alongside a new title.
    pub fn create_default(id: i64, title_id: i64, episode_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title_id,
            name: String::new(),
            episodes: vec![Episode::create_default(episode_id, id)],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        let name = name.into();
        Validator::validate_series_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    pub fn add_episode(&mut self, episode: Episode) {
        if !self.episodes.iter().any(|e| e.id() == episode.id()) {
            self.episodes.push(episode);
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title_id(&self) -> i64 {
        self.title_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_series_holds_an_episode() {
        let series = Series::create(2, 1, "Season 1", Episode::create_default(3, 2)).unwrap();
        assert_eq!(series.episodes().len(), 1);
        assert_eq!(series.episodes()[0].series_id(), 2);
    }

    #[test]
    fn default_series_has_empty_name_and_default_episode() {
        let series = Series::create_default(2, 1, 3);
        assert_eq!(series.name(), "");
        assert_eq!(series.episodes().len(), 1);
        assert_eq!(series.episodes()[0].episode_info(), "");
    }

    #[test]
    fn rehydration_rejects_empty_episode_list() {
        let now = Utc::now();
        let err = Series::new(2, 1, "Season 1", Vec::new(), now, now).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn name_length_is_bounded_but_empty_is_fine() {
        assert!(Series::create(2, 1, "", Episode::create_default(3, 2)).is_ok());
        let long = "x".repeat(101);
        assert!(Series::create(2, 1, long, Episode::create_default(3, 2)).is_err());
    }
}
