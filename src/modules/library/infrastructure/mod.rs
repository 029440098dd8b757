pub mod persistence;

pub use persistence::{
    EntityIdentityServiceImpl, EpisodeReadRepositoryImpl, EpisodeRepositoryImpl,
    SeriesRepositoryImpl, TitleReadRepositoryImpl, TitleRepositoryImpl,
    ViewingRecordRepositoryImpl,
};
