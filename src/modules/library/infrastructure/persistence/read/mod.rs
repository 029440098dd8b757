pub mod episode_read_repository_impl;
pub mod fold;
pub mod rows;
pub mod title_read_repository_impl;

pub use episode_read_repository_impl::EpisodeReadRepositoryImpl;
pub use title_read_repository_impl::TitleReadRepositoryImpl;
