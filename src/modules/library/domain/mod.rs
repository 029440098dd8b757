pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::{Episode, Series, Title, ViewingRecord};
pub use repositories::{
    EpisodeRepository, SeriesRepository, TitleRepository, ViewingRecordRepository,
};
pub use services::{EntityIdentityService, TitleDuplicationCheckService};
pub use value_objects::{TitleInfoUrl, WatchPageUrl, WatchStatus};
