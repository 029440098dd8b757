pub mod application;
pub mod database;
pub mod errors;
pub mod utils;

pub use database::{Database, DbConnection, DbPool};
