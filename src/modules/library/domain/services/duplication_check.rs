use std::sync::Arc;

use crate::modules::library::domain::repositories::TitleRepository;
use crate::shared::errors::AppResult;

/// Checks candidate title names against persisted ones (case-insensitive
/// exact match). Consulted only at title creation; two callers racing on the
/// same name are arbitrated by the storage layer, not here.
pub struct TitleDuplicationCheckService {
    title_repository: Arc<dyn TitleRepository>,
}

impl TitleDuplicationCheckService {
    pub fn new(title_repository: Arc<dyn TitleRepository>) -> Self {
        Self { title_repository }
    }

    pub async fn is_duplicate(&self, name: &str) -> AppResult<bool> {
        self.title_repository.exists_by_name(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::repositories::MockTitleRepository;

    #[tokio::test]
    async fn delegates_to_repository_lookup() {
        let mut repo = MockTitleRepository::new();
        repo.expect_exists_by_name()
            .withf(|name| name == "Frieren")
            .return_once(|_| Ok(true));

        let service = TitleDuplicationCheckService::new(Arc::new(repo));
        assert!(service.is_duplicate("Frieren").await.unwrap());
    }
}
