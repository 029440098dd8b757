use async_trait::async_trait;

use crate::modules::library::domain::entities::{Episode, Series, Title, ViewingRecord};
use crate::modules::library::domain::value_objects::WatchStatus;
use crate::shared::errors::AppResult;

/// Persistence port for the Title aggregate.
///
/// `save` inserts when the row does not exist yet and updates otherwise;
/// inserting also persists the owned children held in memory. `delete`
/// cascades to all descendant series, episodes and viewing records inside
/// one storage transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Title>>;

    async fn save(&self, title: &Title) -> AppResult<Title>;

    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Case-insensitive exact name match among persisted titles.
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    /// Case-insensitive substring search, optionally narrowed to titles with
    /// at least one episode in the given watch status.
    async fn search(
        &self,
        query: Option<String>,
        watch_status: Option<WatchStatus>,
    ) -> AppResult<Vec<Title>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeriesRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Series>>;

    async fn find_by_title_id(&self, title_id: i64) -> AppResult<Vec<Series>>;

    async fn save(&self, series: &Series) -> AppResult<Series>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Episode>>;

    async fn find_by_series_id(&self, series_id: i64) -> AppResult<Vec<Episode>>;

    async fn save(&self, episode: &Episode) -> AppResult<Episode>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewingRecordRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<ViewingRecord>>;

    /// Records for one episode, newest first.
    async fn find_by_episode_id(&self, episode_id: i64) -> AppResult<Vec<ViewingRecord>>;

    async fn save(&self, record: &ViewingRecord) -> AppResult<ViewingRecord>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}
