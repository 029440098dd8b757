use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::domain::entities::Episode;
use crate::modules::library::domain::repositories::{EpisodeRepository, SeriesRepository};
use crate::modules::library::domain::services::EntityIdentityService;
use crate::modules::library::domain::value_objects::WatchPageUrl;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct CreateEpisodeCommand {
    pub series_id: i64,
    pub episode_info: String,
    pub watch_page_urls: Vec<String>,
}

pub struct CreateEpisodeHandler {
    identity: Arc<dyn EntityIdentityService>,
    episode_repository: Arc<dyn EpisodeRepository>,
    series_repository: Arc<dyn SeriesRepository>,
}

impl CreateEpisodeHandler {
    pub fn new(
        identity: Arc<dyn EntityIdentityService>,
        episode_repository: Arc<dyn EpisodeRepository>,
        series_repository: Arc<dyn SeriesRepository>,
    ) -> Self {
        Self {
            identity,
            episode_repository,
            series_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateEpisodeCommand, i64> for CreateEpisodeHandler {
    async fn execute(&self, command: CreateEpisodeCommand) -> AppResult<i64> {
        let mut series = self
            .series_repository
            .find_by_id(command.series_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Series not found: {}", command.series_id))
            })?;

        let episode_id = self.identity.generate_id().await?;
        let mut episode =
            Episode::create(episode_id, command.series_id, command.episode_info.as_str())?;
        for url in &command.watch_page_urls {
            episode.add_watch_page_url(WatchPageUrl::new(url.as_str())?);
        }

        let saved = self.episode_repository.save(&episode).await?;

        // Keep the parent's episode list and timestamp in step.
        series.add_episode(saved.clone());
        self.series_repository.save(&series).await?;

        Ok(saved.id())
    }
}
