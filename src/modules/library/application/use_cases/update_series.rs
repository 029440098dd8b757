use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::domain::repositories::SeriesRepository;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct UpdateSeriesCommand {
    pub id: i64,
    pub name: String,
}

pub struct UpdateSeriesHandler {
    series_repository: Arc<dyn SeriesRepository>,
}

impl UpdateSeriesHandler {
    pub fn new(series_repository: Arc<dyn SeriesRepository>) -> Self {
        Self { series_repository }
    }
}

#[async_trait]
impl UseCase<UpdateSeriesCommand, ()> for UpdateSeriesHandler {
    async fn execute(&self, command: UpdateSeriesCommand) -> AppResult<()> {
        let mut series = self
            .series_repository
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Series not found: {}", command.id)))?;

        series.update_name(command.name.as_str())?;
        self.series_repository.save(&series).await?;
        Ok(())
    }
}
