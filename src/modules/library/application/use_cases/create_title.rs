use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::application::read_models::TitleSummary;
use crate::modules::library::domain::entities::{Series, Title};
use crate::modules::library::domain::repositories::TitleRepository;
use crate::modules::library::domain::services::{
    EntityIdentityService, TitleDuplicationCheckService,
};
use crate::modules::library::domain::value_objects::TitleInfoUrl;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct CreateTitleCommand {
    pub name: String,
    pub title_info_urls: Vec<String>,
}

/// Creates a title together with its default series and episode. The name
/// must not collide (case-insensitively) with an existing title.
pub struct CreateTitleHandler {
    identity: Arc<dyn EntityIdentityService>,
    title_repository: Arc<dyn TitleRepository>,
    duplication_check: Arc<TitleDuplicationCheckService>,
}

impl CreateTitleHandler {
    pub fn new(
        identity: Arc<dyn EntityIdentityService>,
        title_repository: Arc<dyn TitleRepository>,
        duplication_check: Arc<TitleDuplicationCheckService>,
    ) -> Self {
        Self {
            identity,
            title_repository,
            duplication_check,
        }
    }
}

#[async_trait]
impl UseCase<CreateTitleCommand, TitleSummary> for CreateTitleHandler {
    async fn execute(&self, command: CreateTitleCommand) -> AppResult<TitleSummary> {
        if self.duplication_check.is_duplicate(&command.name).await? {
            return Err(AppError::Duplicate(format!(
                "Title '{}' already exists",
                command.name
            )));
        }

        let title_id = self.identity.generate_id().await?;
        let series_id = self.identity.generate_id().await?;
        let episode_id = self.identity.generate_id().await?;

        let default_series = Series::create_default(series_id, title_id, episode_id);
        let mut title = Title::create(title_id, command.name.as_str(), default_series)?;
        for url in &command.title_info_urls {
            title.add_title_info_url(TitleInfoUrl::new(url.as_str())?);
        }

        let saved = self.title_repository.save(&title).await?;

        Ok(TitleSummary {
            id: saved.id(),
            name: saved.name().to_string(),
            created_at: saved.created_at(),
            updated_at: saved.updated_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::repositories::MockTitleRepository;
    use crate::modules::library::domain::services::identity::MockEntityIdentityService;

    fn handler(
        repo: MockTitleRepository,
        identity: MockEntityIdentityService,
    ) -> CreateTitleHandler {
        let repo = Arc::new(repo);
        CreateTitleHandler::new(
            Arc::new(identity),
            repo.clone(),
            Arc::new(TitleDuplicationCheckService::new(repo)),
        )
    }

    #[tokio::test]
    async fn materializes_default_series_and_episode() {
        let mut repo = MockTitleRepository::new();
        repo.expect_exists_by_name().return_once(|_| Ok(false));
        repo.expect_save()
            .withf(|title: &Title| {
                title.series().len() == 1
                    && title.series()[0].episodes().len() == 1
                    && title.title_info_urls().len() == 1
            })
            .return_once(|title| Ok(title.clone()));

        let mut identity = MockEntityIdentityService::new();
        let mut next = 0;
        identity.expect_generate_id().times(3).returning(move || {
            next += 1;
            Ok(next)
        });

        let summary = handler(repo, identity)
            .execute(CreateTitleCommand {
                name: "Frieren".into(),
                title_info_urls: vec!["https://example.com/frieren".into()],
            })
            .await
            .unwrap();

        assert_eq!(summary.id, 1);
        assert_eq!(summary.name, "Frieren");
    }

    #[tokio::test]
    async fn rejects_duplicate_name() {
        let mut repo = MockTitleRepository::new();
        repo.expect_exists_by_name().return_once(|_| Ok(true));
        repo.expect_save().never();

        let err = handler(repo, MockEntityIdentityService::new())
            .execute(CreateTitleCommand {
                name: "Frieren".into(),
                title_info_urls: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Duplicate(_)));
    }
}
