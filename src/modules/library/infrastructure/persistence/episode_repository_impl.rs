use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use tokio::task;

use crate::modules::library::domain::entities::Episode;
use crate::modules::library::domain::repositories::EpisodeRepository;
use crate::schema::{episodes, viewing_records, watch_page_urls};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

use super::mappers;
use super::models::{EpisodeChangeset, EpisodeModel, ViewingRecordModel, WatchPageUrlModel};

pub struct EpisodeRepositoryImpl {
    db: Arc<Database>,
}

impl EpisodeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn load_one(conn: &mut PgConnection, model: EpisodeModel) -> AppResult<Episode> {
        let url_models = watch_page_urls::table
            .filter(watch_page_urls::episode_id.eq(model.id))
            .order(watch_page_urls::id.asc())
            .load::<WatchPageUrlModel>(conn)?;
        let urls = url_models
            .into_iter()
            .map(mappers::url_to_domain)
            .collect::<AppResult<Vec<_>>>()?;

        let record_models = viewing_records::table
            .filter(viewing_records::episode_id.eq(model.id))
            .order(viewing_records::recorded_at.desc())
            .load::<ViewingRecordModel>(conn)?;
        let records = record_models
            .into_iter()
            .map(mappers::record_to_domain)
            .collect::<AppResult<Vec<_>>>()?;

        mappers::episode_to_domain(model, urls, records)
    }
}

#[async_trait]
impl EpisodeRepository for EpisodeRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Episode>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Episode>> {
            let mut conn = db.get_connection()?;
            let model = episodes::table
                .find(id)
                .first::<EpisodeModel>(&mut conn)
                .optional()?;
            match model {
                Some(model) => Ok(Some(Self::load_one(&mut conn, model)?)),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn find_by_series_id(&self, series_id: i64) -> AppResult<Vec<Episode>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Episode>> {
            let mut conn = db.get_connection()?;
            let mut grouped = mappers::load_episodes_by_series_ids(&mut conn, &[series_id])?;
            Ok(grouped.remove(&series_id).unwrap_or_default())
        })
        .await?
    }

    async fn save(&self, episode: &Episode) -> AppResult<Episode> {
        let db = Arc::clone(&self.db);
        let episode = episode.clone();

        task::spawn_blocking(move || -> AppResult<Episode> {
            let mut conn = db.get_connection()?;
            conn.transaction::<_, AppError, _>(|conn| {
                let stored: bool =
                    select(exists(episodes::table.find(episode.id()))).get_result(conn)?;
                if stored {
                    diesel::update(episodes::table.find(episode.id()))
                        .set(EpisodeChangeset {
                            episode_info: episode.episode_info().to_string(),
                            watch_status: episode.watch_status(),
                            updated_at: episode.updated_at(),
                        })
                        .execute(conn)?;
                } else {
                    diesel::insert_into(episodes::table)
                        .values(mappers::new_episode(&episode))
                        .execute(conn)?;
                }

                mappers::replace_watch_page_urls(conn, &episode)?;
                mappers::insert_missing_viewing_records(conn, &episode)?;
                Ok(episode.clone())
            })
        })
        .await?
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            conn.transaction::<_, AppError, _>(|conn| {
                mappers::delete_episode_graphs(conn, &[id])
            })
        })
        .await?
    }
}
