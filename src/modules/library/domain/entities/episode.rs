use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::library::domain::entities::ViewingRecord;
use crate::modules::library::domain::value_objects::{WatchPageUrl, WatchStatus};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// An individual episode within a series.
///
/// Owns its watch page URLs and viewing records and enforces the
/// watch-status state machine:
/// - `complete` moves Unwatched → Watched together with the first record;
/// - records can only be added while Watched;
/// - removing the last record reverts to Unwatched;
/// - a direct transition back to Unwatched is never allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    id: i64,
    series_id: i64,
    episode_info: String,
    watch_page_urls: Vec<WatchPageUrl>,
    watch_status: WatchStatus,
    viewing_records: Vec<ViewingRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Episode {
    /// Full constructor, used when rehydrating from storage.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        series_id: i64,
        episode_info: impl Into<String>,
        watch_page_urls: Vec<WatchPageUrl>,
        watch_status: WatchStatus,
        viewing_records: Vec<ViewingRecord>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let episode_info = episode_info.into();
        Validator::validate_episode_info(&episode_info)?;
        Ok(Self {
            id,
            series_id,
            episode_info,
            watch_page_urls,
            watch_status,
            viewing_records,
            created_at,
            updated_at,
        })
    }

    /// Creates a fresh unwatched episode.
    pub fn create(id: i64, series_id: i64, episode_info: impl Into<String>) -> AppResult<Self> {
        let now = Utc::now();
        Self::new(
            id,
            series_id,
            episode_info,
            Vec::new(),
            WatchStatus::Unwatched,
            Vec::new(),
            now,
            now,
        )
    }

    /// Default episode with empty info, materialized alongside new series.
    pub fn create_default(id: i64, series_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            series_id,
            episode_info: String::new(),
            watch_page_urls: Vec::new(),
            watch_status: WatchStatus::Unwatched,
            viewing_records: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the episode watched and stores the first viewing record in the
    /// same step.
    pub fn complete(&mut self, record: ViewingRecord) -> AppResult<()> {
        if self.watch_status == WatchStatus::Watched {
            return Err(AppError::InvalidStateTransition(
                "Cannot complete an episode that is already watched".to_string(),
            ));
        }
        self.watch_status = WatchStatus::Watched;
        self.push_record(record);
        self.touch();
        Ok(())
    }

    /// Appends another viewing record. Legal only while already watched.
    pub fn add_viewing_record(&mut self, record: ViewingRecord) -> AppResult<()> {
        if self.watch_status != WatchStatus::Watched {
            return Err(AppError::InvalidStateTransition(
                "Can only add viewing records to watched episodes".to_string(),
            ));
        }
        self.push_record(record);
        self.touch();
        Ok(())
    }

    /// Removes a viewing record by id. Removing the last record reverts the
    /// episode to unwatched.
    pub fn remove_viewing_record(&mut self, record_id: i64) {
        self.viewing_records.retain(|r| r.id() != record_id);
        if self.viewing_records.is_empty() {
            self.watch_status = WatchStatus::Unwatched;
        }
        self.touch();
    }

    /// Direct unwatch is never legal; the status only reverts when the last
    /// viewing record is removed.
    pub fn mark_unwatched(&mut self) -> AppResult<()> {
        Err(AppError::InvalidStateTransition(
            "Cannot mark an episode unwatched directly".to_string(),
        ))
    }

    pub fn add_watch_page_url(&mut self, url: WatchPageUrl) {
        if !self.watch_page_urls.contains(&url) {
            self.watch_page_urls.push(url);
            self.touch();
        }
    }

    pub fn remove_watch_page_url(&mut self, url: &WatchPageUrl) {
        self.watch_page_urls.retain(|u| u != url);
        self.touch();
    }

    pub fn clear_watch_page_urls(&mut self) {
        self.watch_page_urls.clear();
        self.touch();
    }

    pub fn update_episode_info(&mut self, episode_info: impl Into<String>) -> AppResult<()> {
        let episode_info = episode_info.into();
        Validator::validate_episode_info(&episode_info)?;
        self.episode_info = episode_info;
        self.touch();
        Ok(())
    }

    fn push_record(&mut self, record: ViewingRecord) {
        if !self.viewing_records.iter().any(|r| r.id() == record.id()) {
            self.viewing_records.push(record);
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn series_id(&self) -> i64 {
        self.series_id
    }

    pub fn episode_info(&self) -> &str {
        &self.episode_info
    }

    pub fn watch_page_urls(&self) -> &[WatchPageUrl] {
        &self.watch_page_urls
    }

    pub fn watch_status(&self) -> WatchStatus {
        self.watch_status
    }

    pub fn viewing_records(&self) -> &[ViewingRecord] {
        &self.viewing_records
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(id: i64) -> ViewingRecord {
        ViewingRecord::create(id, 10, Utc::now() - Duration::hours(1), 4, Some("x".into()))
            .unwrap()
    }

    fn episode() -> Episode {
        Episode::create(10, 1, "Episode 1").unwrap()
    }

    #[test]
    fn starts_unwatched() {
        let episode = episode();
        assert_eq!(episode.watch_status(), WatchStatus::Unwatched);
        assert!(episode.viewing_records().is_empty());
    }

    #[test]
    fn complete_transitions_and_stores_first_record() {
        let mut episode = episode();
        episode.complete(record(1)).unwrap();
        assert_eq!(episode.watch_status(), WatchStatus::Watched);
        assert_eq!(episode.viewing_records().len(), 1);
    }

    #[test]
    fn complete_twice_is_rejected_and_leaves_records_unchanged() {
        let mut episode = episode();
        episode.complete(record(1)).unwrap();
        let err = episode.complete(record(2)).unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
        assert_eq!(episode.viewing_records().len(), 1);
    }

    #[test]
    fn add_record_requires_watched_state() {
        let mut episode = episode();
        let err = episode.add_viewing_record(record(1)).unwrap_err();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));

        episode.complete(record(1)).unwrap();
        episode.add_viewing_record(record(2)).unwrap();
        assert_eq!(episode.viewing_records().len(), 2);
    }

    #[test]
    fn duplicate_record_id_is_ignored() {
        let mut episode = episode();
        episode.complete(record(1)).unwrap();
        episode.add_viewing_record(record(1)).unwrap();
        assert_eq!(episode.viewing_records().len(), 1);
    }

    #[test]
    fn removing_last_record_reverts_to_unwatched() {
        let mut episode = episode();
        episode.complete(record(1)).unwrap();
        episode.remove_viewing_record(1);
        assert_eq!(episode.watch_status(), WatchStatus::Unwatched);
        assert!(episode.viewing_records().is_empty());
    }

    #[test]
    fn removing_one_of_two_records_stays_watched() {
        let mut episode = episode();
        episode.complete(record(1)).unwrap();
        episode.add_viewing_record(record(2)).unwrap();
        episode.remove_viewing_record(1);
        assert_eq!(episode.watch_status(), WatchStatus::Watched);
        assert_eq!(episode.viewing_records().len(), 1);
    }

    #[test]
    fn direct_unwatch_is_always_rejected() {
        let mut episode = episode();
        assert!(episode.mark_unwatched().is_err());
        episode.complete(record(1)).unwrap();
        assert!(episode.mark_unwatched().is_err());
        episode.remove_viewing_record(1);
        // Even with no records left the direct transition stays illegal.
        assert!(episode.mark_unwatched().is_err());
    }

    #[test]
    fn watch_page_urls_dedup_by_url() {
        let mut episode = episode();
        episode.add_watch_page_url(WatchPageUrl::new("https://netflix.com/watch/1").unwrap());
        episode.add_watch_page_url(
            WatchPageUrl::with_platform("https://netflix.com/watch/1", Some("Netflix".into()))
                .unwrap(),
        );
        assert_eq!(episode.watch_page_urls().len(), 1);
    }

    #[test]
    fn episode_info_length_is_bounded() {
        assert!(Episode::create(1, 1, "x".repeat(200)).is_ok());
        assert!(Episode::create(1, 1, "x".repeat(201)).is_err());
        let mut episode = episode();
        assert!(episode.update_episode_info("x".repeat(201)).is_err());
        assert_eq!(episode.episode_info(), "Episode 1");
    }
}
