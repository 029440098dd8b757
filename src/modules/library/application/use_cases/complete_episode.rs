use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::library::domain::entities::ViewingRecord;
use crate::modules::library::domain::repositories::EpisodeRepository;
use crate::modules::library::domain::services::EntityIdentityService;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct CompleteEpisodeCommand {
    pub episode_id: i64,
    pub watched_at: DateTime<Utc>,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Marks an unwatched episode watched, recording the first viewing in the
/// same step. Completing an already watched episode is rejected.
pub struct CompleteEpisodeHandler {
    identity: Arc<dyn EntityIdentityService>,
    episode_repository: Arc<dyn EpisodeRepository>,
}

impl CompleteEpisodeHandler {
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
impl UseCase<CompleteEpisodeCommand, ()> for CompleteEpisodeHandler {
    async fn execute(&self, command: CompleteEpisodeCommand) -> AppResult<()> {
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

        episode.complete(record)?;

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
    use crate::modules::library::domain::value_objects::WatchStatus;
    use chrono::Duration;

    fn command() -> CompleteEpisodeCommand {
        CompleteEpisodeCommand {
            episode_id: 3,
            watched_at: Utc::now() - Duration::hours(1),
            rating: 4,
            comment: Some("x".into()),
        }
    }

    #[tokio::test]
    async fn completes_and_saves_exactly_once() {
        let mut repo = MockEpisodeRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(Episode::create_default(3, 2))));
        repo.expect_save()
            .withf(|episode: &Episode| {
                episode.watch_status() == WatchStatus::Watched
                    && episode.viewing_records().len() == 1
            })
            .times(1)
            .returning(|episode| Ok(episode.clone()));

        let mut identity = MockEntityIdentityService::new();
        identity.expect_generate_id().return_once(|| Ok(7));

        CompleteEpisodeHandler::new(Arc::new(identity), Arc::new(repo))
            .execute(command())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn already_watched_episode_is_rejected() {
        let mut watched = Episode::create_default(3, 2);
        watched
            .complete(
                ViewingRecord::create(1, 3, Utc::now() - Duration::hours(2), 5, None).unwrap(),
            )
            .unwrap();

        let mut repo = MockEpisodeRepository::new();
        repo.expect_find_by_id().return_once(move |_| Ok(Some(watched)));
        repo.expect_save().never();

        let mut identity = MockEntityIdentityService::new();
        identity.expect_generate_id().return_once(|| Ok(7));

        let err = CompleteEpisodeHandler::new(Arc::new(identity), Arc::new(repo))
            .execute(command())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
    }

    #[tokio::test]
    async fn missing_episode_maps_to_not_found() {
        let mut repo = MockEpisodeRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let err = CompleteEpisodeHandler::new(
            Arc::new(MockEntityIdentityService::new()),
            Arc::new(repo),
        )
        .execute(command())
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
