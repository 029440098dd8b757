pub mod episode_repository_impl;
pub mod identity_service_impl;
pub(crate) mod mappers;
pub mod models;
pub mod read;
pub mod series_repository_impl;
pub mod title_repository_impl;
pub mod viewing_record_repository_impl;

pub use episode_repository_impl::EpisodeRepositoryImpl;
pub use identity_service_impl::EntityIdentityServiceImpl;
pub use read::{EpisodeReadRepositoryImpl, TitleReadRepositoryImpl};
pub use series_repository_impl::SeriesRepositoryImpl;
pub use title_repository_impl::TitleRepositoryImpl;
pub use viewing_record_repository_impl::ViewingRecordRepositoryImpl;
