use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::library::domain::repositories::TitleRepository;
use crate::modules::library::domain::value_objects::TitleInfoUrl;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct UpdateTitleCommand {
    pub id: i64,
    pub name: String,
    /// `None` keeps the current URLs, `Some` replaces them wholesale.
    pub title_info_urls: Option<Vec<String>>,
}

pub struct UpdateTitleHandler {
    title_repository: Arc<dyn TitleRepository>,
}

impl UpdateTitleHandler {
    pub fn new(title_repository: Arc<dyn TitleRepository>) -> Self {
        Self { title_repository }
    }
}

#[async_trait]
impl UseCase<UpdateTitleCommand, ()> for UpdateTitleHandler {
    async fn execute(&self, command: UpdateTitleCommand) -> AppResult<()> {
        let mut title = self
            .title_repository
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Title not found: {}", command.id)))?;

        title.update_name(command.name.as_str())?;

        if let Some(urls) = &command.title_info_urls {
            title.clear_title_info_urls();
            for url in urls {
                title.add_title_info_url(TitleInfoUrl::new(url.as_str())?);
            }
        }

        self.title_repository.save(&title).await?;
        Ok(())
    }
}
