use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::library::domain::repositories::EpisodeRepository;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct DeleteEpisodeCommand {
    pub id: i64,
}

/// Deletes an episode with its viewing records. The last episode of a
/// series cannot be deleted; a series always keeps at least one.
pub struct DeleteEpisodeHandler {
    episode_repository: Arc<dyn EpisodeRepository>,
}

impl DeleteEpisodeHandler {
    pub fn new(episode_repository: Arc<dyn EpisodeRepository>) -> Self {
        Self { episode_repository }
    }
}

#[async_trait]
impl UseCase<DeleteEpisodeCommand, ()> for DeleteEpisodeHandler {
    async fn execute(&self, command: DeleteEpisodeCommand) -> AppResult<()> {
        let episode = self
            .episode_repository
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Episode not found: {}", command.id)))?;

        let siblings = self
            .episode_repository
            .find_by_series_id(episode.series_id())
            .await?;
        if siblings.len() <= 1 {
            return Err(AppError::InvalidStateTransition(
                "Cannot delete the last episode of a series".to_string(),
            ));
        }

        self.episode_repository.delete(command.id).await?;
        log_info!("Deleted episode {} with its viewing records", command.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::entities::Episode;
    use crate::modules::library::domain::repositories::MockEpisodeRepository;

    #[tokio::test]
    async fn refuses_to_delete_the_last_episode() {
        let mut repo = MockEpisodeRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(Episode::create_default(3, 2))));
        repo.expect_find_by_series_id()
            .return_once(|_| Ok(vec![Episode::create_default(3, 2)]));
        repo.expect_delete().never();

        let err = DeleteEpisodeHandler::new(Arc::new(repo))
            .execute(DeleteEpisodeCommand { id: 3 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
    }
}
