use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::library::application::read_models::{EpisodeDetail, EpisodeReadRepository};
use crate::schema::{episodes, viewing_records, watch_page_urls};
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

use super::fold;
use super::rows::EpisodeDetailRow;

pub struct EpisodeReadRepositoryImpl {
    db: Arc<Database>,
}

impl EpisodeReadRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EpisodeReadRepository for EpisodeReadRepositoryImpl {
    async fn find_episode_detail(
        &self,
        series_id: i64,
        episode_id: i64,
    ) -> AppResult<Option<EpisodeDetail>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<EpisodeDetail>> {
            let mut conn = db.get_connection()?;

            // Joining both child tables at once fans out into their cross
            // product; the fold collapses it again.
            let rows = episodes::table
                .left_join(watch_page_urls::table)
                .left_join(viewing_records::table)
                .filter(episodes::id.eq(episode_id))
                .filter(episodes::series_id.eq(series_id))
                .order((watch_page_urls::id.asc(), viewing_records::id.asc()))
                .select((
                    episodes::id,
                    episodes::series_id,
                    episodes::episode_info,
                    episodes::watch_status,
                    episodes::created_at,
                    episodes::updated_at,
                    watch_page_urls::url.nullable(),
                    watch_page_urls::platform.nullable(),
                    viewing_records::id.nullable(),
                    viewing_records::episode_id.nullable(),
                    viewing_records::watched_at.nullable(),
                    viewing_records::rating.nullable(),
                    viewing_records::comment.nullable(),
                    viewing_records::recorded_at.nullable(),
                ))
                .load::<EpisodeDetailRow>(&mut conn)?;

            fold::fold_episode_detail(&rows)
        })
        .await?
    }
}
