use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::library::domain::repositories::TitleRepository;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct DeleteTitleCommand {
    pub id: i64,
}

/// Deletes a title and, transactionally, everything it owns.
pub struct DeleteTitleHandler {
    title_repository: Arc<dyn TitleRepository>,
}

impl DeleteTitleHandler {
    pub fn new(title_repository: Arc<dyn TitleRepository>) -> Self {
        Self { title_repository }
    }
}

#[async_trait]
impl UseCase<DeleteTitleCommand, ()> for DeleteTitleHandler {
    async fn execute(&self, command: DeleteTitleCommand) -> AppResult<()> {
        self.title_repository
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title not found: {}", command.id)))?;

        self.title_repository.delete(command.id).await?;
        log_info!("Deleted title {} with all descendants", command.id);
        Ok(())
    }
}
