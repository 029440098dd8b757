use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::application::read_models::ViewingRecordDetail;
use crate::modules::library::domain::repositories::{EpisodeRepository, ViewingRecordRepository};
use crate::shared::application::Query;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct GetViewingRecordsQuery {
    pub episode_id: i64,
}

/// Lists the viewing records of one episode, newest first.
pub struct GetViewingRecordsHandler {
    episode_repository: Arc<dyn EpisodeRepository>,
    viewing_record_repository: Arc<dyn ViewingRecordRepository>,
}

impl GetViewingRecordsHandler {
    pub fn new(
        episode_repository: Arc<dyn EpisodeRepository>,
        viewing_record_repository: Arc<dyn ViewingRecordRepository>,
    ) -> Self {
        Self {
            episode_repository,
            viewing_record_repository,
        }
    }
}

#[async_trait]
impl Query<GetViewingRecordsQuery, Vec<ViewingRecordDetail>> for GetViewingRecordsHandler {
    async fn execute(&self, query: GetViewingRecordsQuery) -> AppResult<Vec<ViewingRecordDetail>> {
        self.episode_repository
            .find_by_id(query.episode_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Episode not found: {}", query.episode_id))
            })?;

        let records = self
            .viewing_record_repository
            .find_by_episode_id(query.episode_id)
            .await?;

        Ok(records
            .into_iter()
            .map(|record| ViewingRecordDetail {
                id: record.id(),
                episode_id: record.episode_id(),
                watched_at: record.watched_at(),
                rating: record.rating(),
                comment: record.comment().map(str::to_string),
                recorded_at: record.recorded_at(),
            })
            .collect())
    }
}
