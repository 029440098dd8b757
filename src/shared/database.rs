use crate::log_info;
use crate::shared::errors::AppError;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::time::Duration;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Builds the pool from the `DATABASE_URL` environment variable.
    pub fn new() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let database_url = env::var("DATABASE_URL")?;
        Self::from_url(&database_url)
    }

    pub fn from_url(database_url: &str) -> Result<Self, AppError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            .max_size(20)
            .min_idle(Some(3))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| AppError::Database(format!("Failed to create connection pool: {}", e)))?;

        log_info!(
            "Database connection pool initialized with max_size: {}",
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// Applies any pending schema migrations.
    pub fn run_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.get_connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;
        log_info!("Database migrations are up to date");
        Ok(())
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        Ok(self.pool.get()?)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
