use async_trait::async_trait;

use super::{EpisodeDetail, TitleDetail, TitleSummary};
use crate::shared::errors::AppResult;

/// Query-side port for title views. Implementations answer each call with a
/// single query; the detail view is one wide left join folded in memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleReadRepository: Send + Sync {
    async fn find_all_titles(&self) -> AppResult<Vec<TitleSummary>>;

    /// `None` when no rows come back, i.e. the title does not exist.
    async fn find_title_detail(&self, title_id: i64) -> AppResult<Option<TitleDetail>>;
}

/// Query-side port for the episode view with its URL and record children.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeReadRepository: Send + Sync {
    async fn find_episode_detail(
        &self,
        series_id: i64,
        episode_id: i64,
    ) -> AppResult<Option<EpisodeDetail>>;
}
