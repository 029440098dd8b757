use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::library::domain::entities::Series;
use crate::modules::library::domain::value_objects::TitleInfoUrl;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Aggregate root for one show, film or franchise entry.
///
/// Owns its info URLs (deduplicated by URL, insertion-ordered) and its
/// series list, which is never empty: the creation factory materializes a
/// default series with a default episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    id: i64,
    name: String,
    title_info_urls: Vec<TitleInfoUrl>,
    series: Vec<Series>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Title {
    /// Full constructor, used when rehydrating from storage.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        title_info_urls: Vec<TitleInfoUrl>,
        series: Vec<Series>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let name = name.into();
        Validator::validate_title_name(&name)?;
        if series.is_empty() {
            return Err(AppError::Validation(
                "Title must hold at least one series".to_string(),
            ));
        }
        Ok(Self {
            id,
            name,
            title_info_urls,
            series,
            created_at,
            updated_at,
        })
    }

    /// Creates a title together with its default series.
    pub fn create(id: i64, name: impl Into<String>, default_series: Series) -> AppResult<Self> {
        let now = Utc::now();
        Self::new(id, name, Vec::new(), vec![default_series], now, now)
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        let name = name.into();
        Validator::validate_title_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    pub fn add_title_info_url(&mut self, url: TitleInfoUrl) {
        if !self.title_info_urls.contains(&url) {
            self.title_info_urls.push(url);
        }
        self.touch();
    }

    pub fn remove_title_info_url(&mut self, url: &TitleInfoUrl) {
        self.title_info_urls.retain(|u| u != url);
        self.touch();
    }

    pub fn clear_title_info_urls(&mut self) {
        self.title_info_urls.clear();
        self.touch();
    }

    pub fn add_series(&mut self, series: Series) {
        if !self.series.iter().any(|s| s.id() == series.id()) {
            self.series.push(series);
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title_info_urls(&self) -> &[TitleInfoUrl] {
        &self.title_info_urls
    }

    pub fn series(&self) -> &[Series] {
        &self.series
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

    fn title() -> Title {
        Title::create(1, "Frieren", Series::create_default(2, 1, 3)).unwrap()
    }

    #[test]
    fn created_title_holds_series_and_episode() {
        let title = title();
        assert_eq!(title.series().len(), 1);
        assert_eq!(title.series()[0].episodes().len(), 1);
    }

    #[test]
    fn rejects_blank_and_overlong_names() {
        let series = || Series::create_default(2, 1, 3);
        assert!(Title::create(1, "", series()).is_err());
        assert!(Title::create(1, "  ", series()).is_err());
        assert!(Title::create(1, "x".repeat(201), series()).is_err());
    }

    #[test]
    fn rehydration_rejects_empty_series_list() {
        let now = Utc::now();
        let err = Title::new(1, "Frieren", Vec::new(), Vec::new(), now, now).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn info_urls_dedup_preserving_insertion_order() {
        let mut title = title();
        title.add_title_info_url(TitleInfoUrl::new("https://example.com/b").unwrap());
        title.add_title_info_url(TitleInfoUrl::new("https://example.com/a").unwrap());
        title.add_title_info_url(TitleInfoUrl::new("https://example.com/b").unwrap());
        let urls: Vec<&str> = title.title_info_urls().iter().map(|u| u.url()).collect();
        assert_eq!(urls, vec!["https://example.com/b", "https://example.com/a"]);
    }
}
