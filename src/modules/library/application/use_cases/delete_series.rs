use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::library::domain::repositories::SeriesRepository;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct DeleteSeriesCommand {
    pub id: i64,
}

/// Deletes a series with its episodes and viewing records. The last series
/// of a title cannot be deleted; a title always keeps at least one.
pub struct DeleteSeriesHandler {
    series_repository: Arc<dyn SeriesRepository>,
}

impl DeleteSeriesHandler {
    pub fn new(series_repository: Arc<dyn SeriesRepository>) -> Self {
        Self { series_repository }
    }
}

#[async_trait]
impl UseCase<DeleteSeriesCommand, ()> for DeleteSeriesHandler {
    async fn execute(&self, command: DeleteSeriesCommand) -> AppResult<()> {
        let series = self
            .series_repository
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Series not found: {}", command.id)))?;

        let siblings = self
            .series_repository
            .find_by_title_id(series.title_id())
            .await?;
        if siblings.len() <= 1 {
            return Err(AppError::InvalidStateTransition(
                "Cannot delete the last series of a title".to_string(),
            ));
        }

        self.series_repository.delete(command.id).await?;
        log_info!("Deleted series {} with all descendants", command.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::entities::Series;
    use crate::modules::library::domain::repositories::MockSeriesRepository;

    fn series(id: i64, title_id: i64) -> Series {
        Series::create_default(id, title_id, id * 10)
    }

    #[tokio::test]
    async fn refuses_to_delete_the_last_series() {
        let mut repo = MockSeriesRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(series(2, 1))));
        repo.expect_find_by_title_id()
            .return_once(|_| Ok(vec![series(2, 1)]));
        repo.expect_delete().never();

        let err = DeleteSeriesHandler::new(Arc::new(repo))
            .execute(DeleteSeriesCommand { id: 2 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
    }

    #[tokio::test]
    async fn deletes_when_siblings_remain() {
        let mut repo = MockSeriesRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(series(2, 1))));
        repo.expect_find_by_title_id()
            .return_once(|_| Ok(vec![series(2, 1), series(4, 1)]));
        repo.expect_delete()
            .withf(|id| *id == 2)
            .return_once(|_| Ok(()));

        DeleteSeriesHandler::new(Arc::new(repo))
            .execute(DeleteSeriesCommand { id: 2 })
            .await
            .unwrap();
    }
}
