use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::application::read_models::TitleSummary;
use crate::modules::library::domain::repositories::TitleRepository;
use crate::modules::library::domain::value_objects::WatchStatus;
use crate::shared::application::Query;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone)]
pub struct SearchTitlesQuery {
    /// Case-insensitive substring on the title name.
    pub query: Option<String>,
    /// Keep only titles with at least one episode in this status.
    pub watch_status: Option<WatchStatus>,
}

pub struct SearchTitlesHandler {
    title_repository: Arc<dyn TitleRepository>,
}

impl SearchTitlesHandler {
    pub fn new(title_repository: Arc<dyn TitleRepository>) -> Self {
        Self { title_repository }
    }
}

#[async_trait]
impl Query<SearchTitlesQuery, Vec<TitleSummary>> for SearchTitlesHandler {
    async fn execute(&self, query: SearchTitlesQuery) -> AppResult<Vec<TitleSummary>> {
        let titles = self
            .title_repository
            .search(query.query, query.watch_status)
            .await?;

        Ok(titles
            .into_iter()
            .map(|title| TitleSummary {
                id: title.id(),
                name: title.name().to_string(),
                created_at: title.created_at(),
                updated_at: title.updated_at(),
            })
            .collect())
    }
}
