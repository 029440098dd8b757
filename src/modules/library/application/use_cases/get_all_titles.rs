use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::application::read_models::{TitleReadRepository, TitleSummary};
use crate::shared::application::Query;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Copy)]
pub struct GetAllTitlesQuery;

pub struct GetAllTitlesHandler {
    title_read_repository: Arc<dyn TitleReadRepository>,
}

impl GetAllTitlesHandler {
    pub fn new(title_read_repository: Arc<dyn TitleReadRepository>) -> Self {
        Self {
            title_read_repository,
        }
    }
}

#[async_trait]
impl Query<GetAllTitlesQuery, Vec<TitleSummary>> for GetAllTitlesHandler {
    async fn execute(&self, _query: GetAllTitlesQuery) -> AppResult<Vec<TitleSummary>> {
        self.title_read_repository.find_all_titles().await
    }
}
