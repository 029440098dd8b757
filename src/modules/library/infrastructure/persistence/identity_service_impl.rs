use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::library::domain::services::EntityIdentityService;
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

/// Sequence-backed id allocation shared by all entity types.
pub struct EntityIdentityServiceImpl {
    db: Arc<Database>,
}

impl EntityIdentityServiceImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityIdentityService for EntityIdentityServiceImpl {
    async fn generate_id(&self) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let id = diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
                "nextval('entity_ids')",
            ))
            .get_result::<i64>(&mut conn)?;
            Ok(id)
        })
        .await?
    }
}
