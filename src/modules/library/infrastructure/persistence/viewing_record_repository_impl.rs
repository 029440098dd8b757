use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use tokio::task;

use crate::modules::library::domain::entities::ViewingRecord;
use crate::modules::library::domain::repositories::ViewingRecordRepository;
use crate::schema::viewing_records;
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

use super::mappers;
use super::models::ViewingRecordModel;

pub struct ViewingRecordRepositoryImpl {
    db: Arc<Database>,
}

impl ViewingRecordRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ViewingRecordRepository for ViewingRecordRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<ViewingRecord>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<ViewingRecord>> {
            let mut conn = db.get_connection()?;
            let model = viewing_records::table
                .find(id)
                .first::<ViewingRecordModel>(&mut conn)
                .optional()?;
            model.map(mappers::record_to_domain).transpose()
        })
        .await?
    }

    async fn find_by_episode_id(&self, episode_id: i64) -> AppResult<Vec<ViewingRecord>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<ViewingRecord>> {
            let mut conn = db.get_connection()?;
            let models = viewing_records::table
                .filter(viewing_records::episode_id.eq(episode_id))
                .order(viewing_records::recorded_at.desc())
                .load::<ViewingRecordModel>(&mut conn)?;
            models.into_iter().map(mappers::record_to_domain).collect()
        })
        .await?
    }

    async fn save(&self, record: &ViewingRecord) -> AppResult<ViewingRecord> {
        let db = Arc::clone(&self.db);
        let record = record.clone();

        task::spawn_blocking(move || -> AppResult<ViewingRecord> {
            let mut conn = db.get_connection()?;
            // Records never change after creation; saving an already stored
            // one is a no-op.
            let stored: bool = select(exists(viewing_records::table.find(record.id())))
                .get_result(&mut conn)?;
            if !stored {
                diesel::insert_into(viewing_records::table)
                    .values(mappers::new_viewing_record(&record))
                    .execute(&mut conn)?;
            }
            Ok(record.clone())
        })
        .await?
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(viewing_records::table.find(id)).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }
}
