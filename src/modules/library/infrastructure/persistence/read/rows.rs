//! Typed shapes for the wide join queries feeding the read-side fold.
//!
//! Each query gets its own struct so a missing or renamed column is a
//! compile error instead of a runtime map lookup; Diesel's deserialization
//! also rejects a storage value that does not fit the declared column type
//! instead of coercing it.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::library::domain::value_objects::WatchStatus;

/// One row of titles ⋈ title_info_urls ⋈ series ⋈ episodes (left joins).
///
/// Child columns repeat their owner's id on every row; the fold keys purely
/// on those id columns, never on row position.
#[derive(Queryable, Debug, Clone)]
pub struct TitleDetailRow {
    pub title_id: i64,
    pub title_name: String,
    pub title_created_at: DateTime<Utc>,
    pub title_updated_at: DateTime<Utc>,
    pub info_url: Option<String>,
    pub series_id: Option<i64>,
    pub series_title_id: Option<i64>,
    pub series_name: Option<String>,
    pub series_created_at: Option<DateTime<Utc>>,
    pub series_updated_at: Option<DateTime<Utc>>,
    pub episode_id: Option<i64>,
    pub episode_series_id: Option<i64>,
    pub episode_info: Option<String>,
    pub episode_watch_status: Option<WatchStatus>,
    pub episode_created_at: Option<DateTime<Utc>>,
    pub episode_updated_at: Option<DateTime<Utc>>,
}

/// One row of episodes ⋈ watch_page_urls ⋈ viewing_records (left joins).
///
/// The two independent child tables fan out into a cross product; the fold
/// collapses it back.
#[derive(Queryable, Debug, Clone)]
pub struct EpisodeDetailRow {
    pub episode_id: i64,
    pub series_id: i64,
    pub episode_info: String,
    pub watch_status: WatchStatus,
    pub episode_created_at: DateTime<Utc>,
    pub episode_updated_at: DateTime<Utc>,
    pub page_url: Option<String>,
    pub page_platform: Option<String>,
    pub record_id: Option<i64>,
    pub record_episode_id: Option<i64>,
    pub watched_at: Option<DateTime<Utc>>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub recorded_at: Option<DateTime<Utc>>,
}
