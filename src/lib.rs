pub mod modules;
mod schema;
pub mod shared;

pub use modules::library;
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;
pub use shared::Database;
