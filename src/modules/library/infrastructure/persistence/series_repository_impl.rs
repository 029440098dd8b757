use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use tokio::task;

use crate::modules::library::domain::entities::Series;
use crate::modules::library::domain::repositories::SeriesRepository;
use crate::schema::series;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

use super::mappers;
use super::models::{SeriesChangeset, SeriesModel};

pub struct SeriesRepositoryImpl {
    db: Arc<Database>,
}

impl SeriesRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn load_one(conn: &mut PgConnection, model: SeriesModel) -> AppResult<Series> {
        let mut episodes_by_series = mappers::load_episodes_by_series_ids(conn, &[model.id])?;
        Series::new(
            model.id,
            model.title_id,
            model.name,
            episodes_by_series.remove(&model.id).unwrap_or_default(),
            model.created_at,
            model.updated_at,
        )
    }
}

#[async_trait]
impl SeriesRepository for SeriesRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Series>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Series>> {
            let mut conn = db.get_connection()?;
            let model = series::table
                .find(id)
                .first::<SeriesModel>(&mut conn)
                .optional()?;
            match model {
                Some(model) => Ok(Some(Self::load_one(&mut conn, model)?)),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn find_by_title_id(&self, title_id: i64) -> AppResult<Vec<Series>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Series>> {
            let mut conn = db.get_connection()?;
            let mut grouped = mappers::load_series_by_title_ids(&mut conn, &[title_id])?;
            Ok(grouped.remove(&title_id).unwrap_or_default())
        })
        .await?
    }

    async fn save(&self, series_entity: &Series) -> AppResult<Series> {
        let db = Arc::clone(&self.db);
        let series_entity = series_entity.clone();

        task::spawn_blocking(move || -> AppResult<Series> {
            let mut conn = db.get_connection()?;
            conn.transaction::<_, AppError, _>(|conn| {
                let stored: bool =
                    select(exists(series::table.find(series_entity.id()))).get_result(conn)?;
                if stored {
                    diesel::update(series::table.find(series_entity.id()))
                        .set(SeriesChangeset {
                            name: series_entity.name().to_string(),
                            updated_at: series_entity.updated_at(),
                        })
                        .execute(conn)?;
                } else {
                    mappers::insert_series_graph(conn, &series_entity)?;
                }
                Ok(series_entity.clone())
            })
        })
        .await?
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            conn.transaction::<_, AppError, _>(|conn| {
                mappers::delete_series_graphs(conn, &[id])
            })
        })
        .await?
    }
}
