use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::library::application::read_models::{
    TitleDetail, TitleReadRepository, TitleSummary,
};
use crate::schema::{episodes, series, title_info_urls, titles};
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

use super::fold;
use super::rows::TitleDetailRow;
use crate::modules::library::infrastructure::persistence::models::TitleModel;

pub struct TitleReadRepositoryImpl {
    db: Arc<Database>,
}

impl TitleReadRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TitleReadRepository for TitleReadRepositoryImpl {
    async fn find_all_titles(&self) -> AppResult<Vec<TitleSummary>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<TitleSummary>> {
            let mut conn = db.get_connection()?;
            let models = titles::table
                .order(titles::created_at.asc())
                .load::<TitleModel>(&mut conn)?;
            Ok(models
                .into_iter()
                .map(|model| TitleSummary {
                    id: model.id,
                    name: model.name,
                    created_at: model.created_at,
                    updated_at: model.updated_at,
                })
                .collect())
        })
        .await?
    }

    async fn find_title_detail(&self, title_id: i64) -> AppResult<Option<TitleDetail>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<TitleDetail>> {
            let mut conn = db.get_connection()?;

            // One wide query; the fold groups on identity columns, so the
            // ordering only has to keep parents monotonic.
            let rows = titles::table
                .left_join(title_info_urls::table)
                .left_join(series::table.left_join(episodes::table))
                .filter(titles::id.eq(title_id))
                .order((
                    series::id.asc(),
                    episodes::id.asc(),
                    title_info_urls::id.asc(),
                ))
                .select((
                    titles::id,
                    titles::name,
                    titles::created_at,
                    titles::updated_at,
                    title_info_urls::url.nullable(),
                    series::id.nullable(),
                    series::title_id.nullable(),
                    series::name.nullable(),
                    series::created_at.nullable(),
                    series::updated_at.nullable(),
                    episodes::id.nullable(),
                    episodes::series_id.nullable(),
                    episodes::episode_info.nullable(),
                    episodes::watch_status.nullable(),
                    episodes::created_at.nullable(),
                    episodes::updated_at.nullable(),
                ))
                .load::<TitleDetailRow>(&mut conn)?;

            fold::fold_title_detail(&rows)
        })
        .await?
    }
}
