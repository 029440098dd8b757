use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::domain::entities::{Episode, Series};
use crate::modules::library::domain::repositories::{SeriesRepository, TitleRepository};
use crate::modules::library::domain::services::EntityIdentityService;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct CreateSeriesCommand {
    pub title_id: i64,
    pub name: String,
}

/// Creates a series under an existing title. The series is born with a
/// default episode so it never violates the at-least-one-episode rule.
pub struct CreateSeriesHandler {
    identity: Arc<dyn EntityIdentityService>,
    series_repository: Arc<dyn SeriesRepository>,
    title_repository: Arc<dyn TitleRepository>,
}

impl CreateSeriesHandler {
    pub fn new(
        identity: Arc<dyn EntityIdentityService>,
        series_repository: Arc<dyn SeriesRepository>,
        title_repository: Arc<dyn TitleRepository>,
    ) -> Self {
        Self {
            identity,
            series_repository,
            title_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateSeriesCommand, i64> for CreateSeriesHandler {
    async fn execute(&self, command: CreateSeriesCommand) -> AppResult<i64> {
        self.title_repository
            .find_by_id(command.title_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title not found: {}", command.title_id)))?;

        let series_id = self.identity.generate_id().await?;
        let episode_id = self.identity.generate_id().await?;

        let series = Series::create(
            series_id,
            command.title_id,
            command.name.as_str(),
            Episode::create_default(episode_id, series_id),
        )?;

        let saved = self.series_repository.save(&series).await?;
        Ok(saved.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::repositories::{
        MockSeriesRepository, MockTitleRepository,
    };
    use crate::modules::library::domain::services::identity::MockEntityIdentityService;

    #[tokio::test]
    async fn missing_title_maps_to_not_found() {
        let mut titles = MockTitleRepository::new();
        titles.expect_find_by_id().return_once(|_| Ok(None));

        let handler = CreateSeriesHandler::new(
            Arc::new(MockEntityIdentityService::new()),
            Arc::new(MockSeriesRepository::new()),
            Arc::new(titles),
        );

        let err = handler
            .execute(CreateSeriesCommand {
                title_id: 99,
                name: "Season 2".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
