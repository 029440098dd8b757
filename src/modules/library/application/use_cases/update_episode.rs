use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::domain::repositories::EpisodeRepository;
use crate::modules::library::domain::value_objects::WatchPageUrl;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct UpdateEpisodeCommand {
    pub id: i64,
    /// `None` keeps the current info; empty string is a valid value.
    pub episode_info: Option<String>,
    /// `None` keeps the current URLs, `Some` replaces them wholesale.
    pub watch_page_urls: Option<Vec<String>>,
}

pub struct UpdateEpisodeHandler {
    episode_repository: Arc<dyn EpisodeRepository>,
}

impl UpdateEpisodeHandler {
    pub fn new(episode_repository: Arc<dyn EpisodeRepository>) -> Self {
        Self { episode_repository }
    }
}

#[async_trait]
impl UseCase<UpdateEpisodeCommand, ()> for UpdateEpisodeHandler {
    async fn execute(&self, command: UpdateEpisodeCommand) -> AppResult<()> {
        let mut episode = self
            .episode_repository
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Episode not found: {}", command.id)))?;

        if let Some(info) = &command.episode_info {
            episode.update_episode_info(info.as_str())?;
        }

        if let Some(urls) = &command.watch_page_urls {
            episode.clear_watch_page_urls();
            for url in urls {
                episode.add_watch_page_url(WatchPageUrl::new(url.as_str())?);
            }
        }

        self.episode_repository.save(&episode).await?;
        Ok(())
    }
}
