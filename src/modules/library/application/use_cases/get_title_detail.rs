use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::application::read_models::{TitleDetail, TitleReadRepository};
use crate::shared::application::Query;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct GetTitleDetailQuery {
    pub title_id: i64,
}

/// Serves the nested title tree from one wide join query. An empty result
/// set means the title itself does not exist.
pub struct GetTitleDetailHandler {
    title_read_repository: Arc<dyn TitleReadRepository>,
}

impl GetTitleDetailHandler {
    pub fn new(title_read_repository: Arc<dyn TitleReadRepository>) -> Self {
        Self {
            title_read_repository,
        }
    }
}

#[async_trait]
impl Query<GetTitleDetailQuery, TitleDetail> for GetTitleDetailHandler {
    async fn execute(&self, query: GetTitleDetailQuery) -> AppResult<TitleDetail> {
        self.title_read_repository
            .find_title_detail(query.title_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title not found: {}", query.title_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::application::read_models::repository::MockTitleReadRepository;

    #[tokio::test]
    async fn empty_read_result_maps_to_not_found() {
        let mut repo = MockTitleReadRepository::new();
        repo.expect_find_title_detail().return_once(|_| Ok(None));

        let err = GetTitleDetailHandler::new(Arc::new(repo))
            .execute(GetTitleDetailQuery { title_id: 42 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
