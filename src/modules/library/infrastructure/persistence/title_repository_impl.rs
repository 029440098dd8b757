use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use tokio::task;

use crate::log_debug;
use crate::modules::library::domain::entities::Title;
use crate::modules::library::domain::repositories::TitleRepository;
use crate::modules::library::domain::value_objects::{TitleInfoUrl, WatchStatus};
use crate::schema::{episodes, series, title_info_urls, titles};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

use super::mappers;
use super::models::{NewTitle, NewTitleInfoUrl, TitleChangeset, TitleInfoUrlModel, TitleModel};

diesel::define_sql_function! {
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

pub struct TitleRepositoryImpl {
    db: Arc<Database>,
}

impl TitleRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Rebuilds full aggregates for the given rows with batched child loads.
    fn load_aggregates(conn: &mut PgConnection, models: Vec<TitleModel>) -> AppResult<Vec<Title>> {
        let title_ids: Vec<i64> = models.iter().map(|t| t.id).collect();

        let mut urls_by_title: HashMap<i64, Vec<TitleInfoUrl>> = HashMap::new();
        if !title_ids.is_empty() {
            let url_models = title_info_urls::table
                .filter(title_info_urls::title_id.eq_any(title_ids.clone()))
                .order(title_info_urls::id.asc())
                .load::<TitleInfoUrlModel>(conn)?;
            for model in url_models {
                urls_by_title
                    .entry(model.title_id)
                    .or_default()
                    .push(TitleInfoUrl::new(model.url)?);
            }
        }

        let mut series_by_title = mappers::load_series_by_title_ids(conn, &title_ids)?;

        models
            .into_iter()
            .map(|model| {
                Title::new(
                    model.id,
                    model.name,
                    urls_by_title.remove(&model.id).unwrap_or_default(),
                    series_by_title.remove(&model.id).unwrap_or_default(),
                    model.created_at,
                    model.updated_at,
                )
            })
            .collect()
    }

    fn insert_info_urls(conn: &mut PgConnection, title: &Title) -> AppResult<()> {
        let rows: Vec<NewTitleInfoUrl> = title
            .title_info_urls()
            .iter()
            .map(|url| NewTitleInfoUrl {
                title_id: title.id(),
                url: url.url().to_string(),
            })
            .collect();
        if !rows.is_empty() {
            diesel::insert_into(title_info_urls::table)
                .values(&rows)
                .execute(conn)?;
        }
        Ok(())
    }
}

#[async_trait]
impl TitleRepository for TitleRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Title>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Title>> {
            let mut conn = db.get_connection()?;
            let model = titles::table
                .find(id)
                .first::<TitleModel>(&mut conn)
                .optional()?;
            match model {
                Some(model) => Ok(Self::load_aggregates(&mut conn, vec![model])?.pop()),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn save(&self, title: &Title) -> AppResult<Title> {
        let db = Arc::clone(&self.db);
        let title = title.clone();

        task::spawn_blocking(move || -> AppResult<Title> {
            let mut conn = db.get_connection()?;
            conn.transaction::<_, AppError, _>(|conn| {
                let stored: bool =
                    select(exists(titles::table.find(title.id()))).get_result(conn)?;
                if stored {
                    diesel::update(titles::table.find(title.id()))
                        .set(TitleChangeset {
                            name: title.name().to_string(),
                            updated_at: title.updated_at(),
                        })
                        .execute(conn)?;
                    diesel::delete(
                        title_info_urls::table.filter(title_info_urls::title_id.eq(title.id())),
                    )
                    .execute(conn)?;
                    Self::insert_info_urls(conn, &title)?;
                } else {
                    diesel::insert_into(titles::table)
                        .values(NewTitle {
                            id: title.id(),
                            name: title.name().to_string(),
                            created_at: title.created_at(),
                            updated_at: title.updated_at(),
                        })
                        .execute(conn)?;
                    Self::insert_info_urls(conn, &title)?;
                    for entry in title.series() {
                        mappers::insert_series_graph(conn, entry)?;
                    }
                }
                Ok(title.clone())
            })
        })
        .await?
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            conn.transaction::<_, AppError, _>(|conn| {
                let series_ids: Vec<i64> = series::table
                    .filter(series::title_id.eq(id))
                    .select(series::id)
                    .load(conn)?;
                mappers::delete_series_graphs(conn, &series_ids)?;
                diesel::delete(
                    title_info_urls::table.filter(title_info_urls::title_id.eq(id)),
                )
                .execute(conn)?;
                diesel::delete(titles::table.find(id)).execute(conn)?;
                log_debug!("Cascade-deleted title {} ({} series)", id, series_ids.len());
                Ok(())
            })
        })
        .await?
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let needle = name.to_lowercase();

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found: bool = select(exists(
                titles::table.filter(lower(titles::name).eq(needle)),
            ))
            .get_result(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn search(
        &self,
        query: Option<String>,
        watch_status: Option<WatchStatus>,
    ) -> AppResult<Vec<Title>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Title>> {
            let mut conn = db.get_connection()?;

            let mut statement = titles::table
                .order(titles::created_at.asc())
                .into_boxed();
            if let Some(text) = query {
                statement = statement.filter(titles::name.ilike(format!("%{}%", text)));
            }
            if let Some(status) = watch_status {
                statement = statement.filter(exists(
                    series::table
                        .inner_join(episodes::table)
                        .filter(series::title_id.eq(titles::id))
                        .filter(episodes::watch_status.eq(status)),
                ));
            }

            let models = statement.load::<TitleModel>(&mut conn)?;
            Self::load_aggregates(&mut conn, models)
        })
        .await?
    }
}
