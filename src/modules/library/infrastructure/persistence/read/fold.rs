//! Collapses flat, fan-out join rows into the nested read models.
//!
//! Rows are consumed in query order and nodes are keyed by their identity
//! columns, first appearance winning the position; repeated sightings of a
//! parent or child are skipped rather than rebuilt. A null child id column
//! contributes nothing (outer-join miss). A present child id whose
//! companion columns are null is a malformed row and fails the whole fold.

use std::collections::{HashMap, HashSet};

use crate::modules::library::application::read_models::{
    EpisodeDetail, EpisodeSummary, SeriesDetail, TitleDetail, ViewingRecordDetail, WatchPageLink,
};
use crate::shared::errors::{AppError, AppResult};

use super::rows::{EpisodeDetailRow, TitleDetailRow};

fn require<T>(value: Option<T>, column: &str, id: i64) -> AppResult<T> {
    value.ok_or_else(|| {
        AppError::Internal(format!(
            "Join row for id {} is missing the {} column",
            id, column
        ))
    })
}

/// Empty input means the title does not exist and folds to `None`; a title
/// whose series columns are all null yields a detail with no series rather
/// than a phantom child.
pub fn fold_title_detail(rows: &[TitleDetailRow]) -> AppResult<Option<TitleDetail>> {
    let first = match rows.first() {
        Some(row) => row,
        None => return Ok(None),
    };

    let mut detail = TitleDetail {
        id: first.title_id,
        name: first.title_name.clone(),
        title_info_urls: Vec::new(),
        series: Vec::new(),
        created_at: first.title_created_at,
        updated_at: first.title_updated_at,
    };
    let mut series_index: HashMap<i64, usize> = HashMap::new();
    let mut seen_episodes: HashSet<i64> = HashSet::new();

    for row in rows {
        if let Some(url) = &row.info_url {
            if !detail.title_info_urls.iter().any(|u| u == url) {
                detail.title_info_urls.push(url.clone());
            }
        }

        if let Some(series_id) = row.series_id {
            if !series_index.contains_key(&series_id) {
                detail.series.push(SeriesDetail {
                    id: series_id,
                    title_id: require(row.series_title_id, "s_title_id", series_id)?,
                    name: require(row.series_name.clone(), "s_name", series_id)?,
                    episodes: Vec::new(),
                    created_at: require(row.series_created_at, "s_created_at", series_id)?,
                    updated_at: require(row.series_updated_at, "s_updated_at", series_id)?,
                });
                series_index.insert(series_id, detail.series.len() - 1);
            }
        }

        if let Some(episode_id) = row.episode_id {
            if seen_episodes.insert(episode_id) {
                let parent_id = require(row.episode_series_id, "e_series_id", episode_id)?;
                let episode = EpisodeSummary {
                    id: episode_id,
                    series_id: parent_id,
                    episode_info: require(row.episode_info.clone(), "e_episode_info", episode_id)?,
                    watch_status: require(row.episode_watch_status, "e_watch_status", episode_id)?,
                    created_at: require(row.episode_created_at, "e_created_at", episode_id)?,
                    updated_at: require(row.episode_updated_at, "e_updated_at", episode_id)?,
                };
                // Attach through the episode's own parent column, not row
                // position.
                if let Some(&index) = series_index.get(&parent_id) {
                    detail.series[index].episodes.push(episode);
                }
            }
        }
    }

    Ok(Some(detail))
}

/// Same contract as [`fold_title_detail`] for the episode view: the fan-out
/// of watch page URLs × viewing records collapses into one node with each
/// child appearing once, in first-appearance order.
pub fn fold_episode_detail(rows: &[EpisodeDetailRow]) -> AppResult<Option<EpisodeDetail>> {
    let first = match rows.first() {
        Some(row) => row,
        None => return Ok(None),
    };

    let mut detail = EpisodeDetail {
        id: first.episode_id,
        series_id: first.series_id,
        episode_info: first.episode_info.clone(),
        watch_status: first.watch_status,
        watch_page_urls: Vec::new(),
        viewing_records: Vec::new(),
        created_at: first.episode_created_at,
        updated_at: first.episode_updated_at,
    };
    let mut seen_records: HashSet<i64> = HashSet::new();

    for row in rows {
        if let Some(url) = &row.page_url {
            if !detail.watch_page_urls.iter().any(|link| &link.url == url) {
                detail.watch_page_urls.push(WatchPageLink {
                    url: url.clone(),
                    platform: row.page_platform.clone(),
                });
            }
        }

        if let Some(record_id) = row.record_id {
            if seen_records.insert(record_id) {
                detail.viewing_records.push(ViewingRecordDetail {
                    id: record_id,
                    episode_id: require(row.record_episode_id, "vr_episode_id", record_id)?,
                    watched_at: require(row.watched_at, "vr_watched_at", record_id)?,
                    rating: require(row.rating, "vr_rating", record_id)?,
                    comment: row.comment.clone(),
                    recorded_at: require(row.recorded_at, "vr_recorded_at", record_id)?,
                });
            }
        }
    }

    Ok(Some(detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::value_objects::WatchStatus;
    use chrono::{DateTime, Duration, Utc};

    fn at(hours_ago: i64) -> DateTime<Utc> {
        Utc::now() - Duration::hours(hours_ago)
    }

    fn title_row() -> TitleDetailRow {
        TitleDetailRow {
            title_id: 1,
            title_name: "Frieren".into(),
            title_created_at: at(48),
            title_updated_at: at(24),
            info_url: None,
            series_id: None,
            series_title_id: None,
            series_name: None,
            series_created_at: None,
            series_updated_at: None,
            episode_id: None,
            episode_series_id: None,
            episode_info: None,
            episode_watch_status: None,
            episode_created_at: None,
            episode_updated_at: None,
        }
    }

    fn title_row_with(series_id: i64, episode_id: i64) -> TitleDetailRow {
        TitleDetailRow {
            series_id: Some(series_id),
            series_title_id: Some(1),
            series_name: Some(format!("Season {}", series_id)),
            series_created_at: Some(at(40)),
            series_updated_at: Some(at(20)),
            episode_id: Some(episode_id),
            episode_series_id: Some(series_id),
            episode_info: Some(format!("Episode {}", episode_id)),
            episode_watch_status: Some(WatchStatus::Unwatched),
            episode_created_at: Some(at(30)),
            episode_updated_at: Some(at(10)),
            ..title_row()
        }
    }

    fn episode_row() -> EpisodeDetailRow {
        EpisodeDetailRow {
            episode_id: 3,
            series_id: 2,
            episode_info: "Episode 1".into(),
            watch_status: WatchStatus::Watched,
            episode_created_at: at(48),
            episode_updated_at: at(1),
            page_url: None,
            page_platform: None,
            record_id: None,
            record_episode_id: None,
            watched_at: None,
            rating: None,
            comment: None,
            recorded_at: None,
        }
    }

    fn episode_row_with_record(record_id: i64) -> EpisodeDetailRow {
        EpisodeDetailRow {
            record_id: Some(record_id),
            record_episode_id: Some(3),
            watched_at: Some(at(5)),
            rating: Some(4),
            comment: None,
            recorded_at: Some(at(4)),
            ..episode_row()
        }
    }

    #[test]
    fn empty_result_folds_to_none() {
        assert!(fold_title_detail(&[]).unwrap().is_none());
        assert!(fold_episode_detail(&[]).unwrap().is_none());
    }

    #[test]
    fn repeated_parent_rows_build_one_node_per_identity() {
        let rows = vec![
            title_row_with(10, 100),
            title_row_with(10, 101),
            title_row_with(11, 110),
        ];
        let detail = fold_title_detail(&rows).unwrap().unwrap();
        assert_eq!(detail.series.len(), 2);
        assert_eq!(detail.series[0].episodes.len(), 2);
        assert_eq!(detail.series[1].episodes.len(), 1);
    }

    #[test]
    fn info_url_fan_out_does_not_duplicate_children() {
        // Two info URLs × two episodes = four rows; every node still appears
        // once, in first-appearance order.
        let mut rows = Vec::new();
        for url in ["https://example.com/a", "https://example.com/b"] {
            for episode_id in [100, 101] {
                let mut row = title_row_with(10, episode_id);
                row.info_url = Some(url.into());
                rows.push(row);
            }
        }
        let detail = fold_title_detail(&rows).unwrap().unwrap();
        assert_eq!(
            detail.title_info_urls,
            vec!["https://example.com/a", "https://example.com/b"]
        );
        assert_eq!(detail.series.len(), 1);
        let ids: Vec<i64> = detail.series[0].episodes.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![100, 101]);
    }

    #[test]
    fn all_null_series_columns_fabricate_no_phantom_series() {
        let detail = fold_title_detail(&[title_row()]).unwrap().unwrap();
        assert_eq!(detail.id, 1);
        assert!(detail.series.is_empty());
        assert!(detail.title_info_urls.is_empty());
    }

    #[test]
    fn present_series_id_with_missing_companion_column_fails_loudly() {
        let mut row = title_row_with(10, 100);
        row.series_created_at = None;
        let err = fold_title_detail(&[row]).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn episode_fan_out_dedups_records_and_survives_null_children() {
        // Two rows share the episode and differ only in vr_id; the third has
        // a URL but no record. One node, two records, no error.
        let mut url_only = episode_row();
        url_only.page_url = Some("https://netflix.com/watch/1".into());
        url_only.page_platform = Some("Netflix".into());
        let rows = vec![
            episode_row_with_record(7),
            episode_row_with_record(8),
            url_only,
        ];

        let detail = fold_episode_detail(&rows).unwrap().unwrap();
        assert_eq!(detail.id, 3);
        assert_eq!(detail.viewing_records.len(), 2);
        assert_eq!(detail.watch_page_urls.len(), 1);
        assert_eq!(detail.watch_page_urls[0].platform.as_deref(), Some("Netflix"));
    }

    #[test]
    fn record_order_follows_first_appearance() {
        let rows = vec![
            episode_row_with_record(8),
            episode_row_with_record(7),
            episode_row_with_record(8),
        ];
        let detail = fold_episode_detail(&rows).unwrap().unwrap();
        let ids: Vec<i64> = detail.viewing_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![8, 7]);
    }

    #[test]
    fn record_id_without_rating_fails_loudly() {
        let mut row = episode_row_with_record(7);
        row.rating = None;
        let err = fold_episode_detail(&[row]).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
