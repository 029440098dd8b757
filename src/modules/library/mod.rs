pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::read_models::{
    EpisodeDetail, EpisodeReadRepository, EpisodeSummary, SeriesDetail, TitleDetail,
    TitleReadRepository, TitleSummary, ViewingRecordDetail, WatchPageLink,
};
pub use domain::{
    Episode, EpisodeRepository, Series, SeriesRepository, Title, TitleInfoUrl, TitleRepository,
    ViewingRecord, ViewingRecordRepository, WatchPageUrl, WatchStatus,
};
