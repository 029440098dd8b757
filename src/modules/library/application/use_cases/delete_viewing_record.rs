use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::domain::repositories::{EpisodeRepository, ViewingRecordRepository};
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct DeleteViewingRecordCommand {
    pub record_id: i64,
}

/// Removes one viewing record. When the last record of an episode goes, the
/// episode reverts to unwatched.
pub struct DeleteViewingRecordHandler {
    viewing_record_repository: Arc<dyn ViewingRecordRepository>,
    episode_repository: Arc<dyn EpisodeRepository>,
}

impl DeleteViewingRecordHandler {
    pub fn new(
        viewing_record_repository: Arc<dyn ViewingRecordRepository>,
        episode_repository: Arc<dyn EpisodeRepository>,
    ) -> Self {
        Self {
            viewing_record_repository,
            episode_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteViewingRecordCommand, ()> for DeleteViewingRecordHandler {
    async fn execute(&self, command: DeleteViewingRecordCommand) -> AppResult<()> {
        let record = self
            .viewing_record_repository
            .find_by_id(command.record_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Viewing record not found: {}", command.record_id))
            })?;

        let mut episode = self
            .episode_repository
            .find_by_id(record.episode_id())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Episode not found: {}", record.episode_id()))
            })?;

        episode.remove_viewing_record(record.id());

        self.viewing_record_repository.delete(record.id()).await?;
        self.episode_repository.save(&episode).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::entities::{Episode, ViewingRecord};
    use crate::modules::library::domain::repositories::{
        MockEpisodeRepository, MockViewingRecordRepository,
    };
    use crate::modules::library::domain::value_objects::WatchStatus;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn removing_the_sole_record_reverts_the_episode() {
        let record =
            ViewingRecord::create(7, 3, Utc::now() - Duration::hours(1), 4, None).unwrap();
        let mut episode = Episode::create_default(3, 2);
        episode.complete(record.clone()).unwrap();

        let mut records = MockViewingRecordRepository::new();
        records
            .expect_find_by_id()
            .return_once(move |_| Ok(Some(record)));
        records
            .expect_delete()
            .withf(|id| *id == 7)
            .return_once(|_| Ok(()));

        let mut episodes = MockEpisodeRepository::new();
        episodes
            .expect_find_by_id()
            .return_once(move |_| Ok(Some(episode)));
        episodes
            .expect_save()
            .withf(|episode: &Episode| {
                episode.watch_status() == WatchStatus::Unwatched
                    && episode.viewing_records().is_empty()
            })
            .return_once(|episode| Ok(episode.clone()));

        DeleteViewingRecordHandler::new(Arc::new(records), Arc::new(episodes))
            .execute(DeleteViewingRecordCommand { record_id: 7 })
            .await
            .unwrap();
    }
}
