use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::library::domain::value_objects::WatchStatus;
use crate::schema::{episodes, series, title_info_urls, titles, viewing_records, watch_page_urls};

// ============= TITLE =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = titles)]
pub struct TitleModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = titles)]
pub struct NewTitle {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = titles)]
pub struct TitleChangeset {
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = title_info_urls)]
pub struct TitleInfoUrlModel {
    pub id: i64,
    pub title_id: i64,
    pub url: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = title_info_urls)]
pub struct NewTitleInfoUrl {
    pub title_id: i64,
    pub url: String,
}

// ============= SERIES =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = series)]
pub struct SeriesModel {
    pub id: i64,
    pub title_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = series)]
pub struct NewSeries {
    pub id: i64,
    pub title_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = series)]
pub struct SeriesChangeset {
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

// ============= EPISODE =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = episodes)]
pub struct EpisodeModel {
    pub id: i64,
    pub series_id: i64,
    pub episode_info: String,
    pub watch_status: WatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = episodes)]
pub struct NewEpisode {
    pub id: i64,
    pub series_id: i64,
    pub episode_info: String,
    pub watch_status: WatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = episodes)]
pub struct EpisodeChangeset {
    pub episode_info: String,
    pub watch_status: WatchStatus,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = watch_page_urls)]
pub struct WatchPageUrlModel {
    pub id: i64,
    pub episode_id: i64,
    pub url: String,
    pub platform: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = watch_page_urls)]
pub struct NewWatchPageUrl {
    pub episode_id: i64,
    pub url: String,
    pub platform: Option<String>,
}

// ============= VIEWING RECORD =============

// Immutable entity: queryable and insertable models only, no changeset.
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = viewing_records)]
pub struct ViewingRecordModel {
    pub id: i64,
    pub episode_id: i64,
    pub watched_at: DateTime<Utc>,
    pub rating: i32,
    pub comment: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = viewing_records)]
pub struct NewViewingRecord {
    pub id: i64,
    pub episode_id: i64,
    pub watched_at: DateTime<Utc>,
    pub rating: i32,
    pub comment: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
