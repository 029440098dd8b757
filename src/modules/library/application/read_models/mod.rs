//! Query-side view types, materialized from wide join queries instead of
//! aggregate reconstruction. No behavior, serialization-ready.

pub mod repository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::library::domain::value_objects::WatchStatus;

pub use repository::{EpisodeReadRepository, TitleReadRepository};

/// One row of the title list and search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSummary {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Nested title view: info URLs plus the series/episode tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDetail {
    pub id: i64,
    pub name: String,
    pub title_info_urls: Vec<String>,
    pub series: Vec<SeriesDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDetail {
    pub id: i64,
    pub title_id: i64,
    pub name: String,
    pub episodes: Vec<EpisodeSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Episode node inside the title tree. Watch page URLs and viewing records
/// are served by the episode detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSummary {
    pub id: i64,
    pub series_id: i64,
    pub episode_info: String,
    pub watch_status: WatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full episode view with both child collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDetail {
    pub id: i64,
    pub series_id: i64,
    pub episode_info: String,
    pub watch_status: WatchStatus,
    pub watch_page_urls: Vec<WatchPageLink>,
    pub viewing_records: Vec<ViewingRecordDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchPageLink {
    pub url: String,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewingRecordDetail {
    pub id: i64,
    pub episode_id: i64,
    pub watched_at: DateTime<Utc>,
    pub rating: i32,
    pub comment: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
