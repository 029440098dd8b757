use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::application::read_models::{EpisodeDetail, EpisodeReadRepository};
use crate::shared::application::Query;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct GetEpisodeDetailQuery {
    pub series_id: i64,
    pub episode_id: i64,
}

/// Serves one episode with its watch page URLs and viewing records from a
/// single join query.
pub struct GetEpisodeDetailHandler {
    episode_read_repository: Arc<dyn EpisodeReadRepository>,
}

impl GetEpisodeDetailHandler {
    pub fn new(episode_read_repository: Arc<dyn EpisodeReadRepository>) -> Self {
        Self {
            episode_read_repository,
        }
    }
}

#[async_trait]
impl Query<GetEpisodeDetailQuery, EpisodeDetail> for GetEpisodeDetailHandler {
    async fn execute(&self, query: GetEpisodeDetailQuery) -> AppResult<EpisodeDetail> {
        self.episode_read_repository
            .find_episode_detail(query.series_id, query.episode_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Episode not found: {} in series {}",
                    query.episode_id, query.series_id
                ))
            })
    }
}
