use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::library::domain::entities::ViewingRecord;
use crate::modules::library::domain::repositories::EpisodeRepository;
use crate::modules::library::domain::services::EntityIdentityService;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AddViewingRecordCommand {
    pub episode_id: i64,
    pub watched_at: DateTime<Utc>,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Records a rewatch. Only watched episodes accept further records; the
/// first one always goes through episode completion.
pub struct AddViewingRecordHandler {
    identity: Arc<dyn EntityIdentityService>,
    episode_repository: Arc<dyn EpisodeRepository>,
}

impl AddViewingRecordHandler {
    pub fn new(
        identity: Arc<dyn EntityIdentityService>,
        episode_repository: Arc<dyn EpisodeRepository>,
    ) -> Self {
        Self {
            identity,
            episode_repository,
        }
    }
}

#[async_trait]
impl UseCase<AddViewingRecordCommand, ()> for AddViewingRecordHandler {
    async fn execute(&self, command: AddViewingRecordCommand) -> AppResult<()> {
        let mut episode = self
            .episode_repository
            .find_by_id(command.episode_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Episode not found: {}", command.episode_id))
            })?;

        let record_id = self.identity.generate_id().await?;
        let record = ViewingRecord::create(
            record_id,
            command.episode_id,
            command.watched_at,
            command.rating,
            command.comment,
        )?;

        episode.add_viewing_record(record)?;

        self.episode_repository.save(&episode).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::entities::Episode;
    use crate::modules::library::domain::repositories::MockEpisodeRepository;
    use crate::modules::library::domain::services::identity::MockEntityIdentityService;
    use chrono::Duration;

    #[tokio::test]
    async fn unwatched_episode_is_rejected() {
        let mut repo = MockEpisodeRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(Episode::create_default(3, 2))));
        repo.expect_save().never();

        let mut identity = MockEntityIdentityService::new();
        identity.expect_generate_id().return_once(|| Ok(7));

        let err = AddViewingRecordHandler::new(Arc::new(identity), Arc::new(repo))
            .execute(AddViewingRecordCommand {
                episode_id: 3,
                watched_at: Utc::now() - Duration::hours(1),
                rating: 3,
                comment: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
    }
}
