use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Identifier allocation for new entities.
///
/// Called once per new title, series, episode or viewing record before the
/// entity is constructed. Backed by a database sequence in the default
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityIdentityService: Send + Sync {
    async fn generate_id(&self) -> AppResult<i64>;
}
