use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Link to a page where an episode can be watched (Netflix, Prime and the
/// like). The optional platform label is display metadata and takes no part
/// in equality or deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchPageUrl {
    url: String,
    platform: Option<String>,
}

impl WatchPageUrl {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        Self::with_platform(url, None)
    }

    pub fn with_platform(url: impl Into<String>, platform: Option<String>) -> AppResult<Self> {
        let url = url.into();
        Validator::validate_url(&url)?;
        Ok(Self { url, platform })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }
}

impl PartialEq for WatchPageUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for WatchPageUrl {}

impl Hash for WatchPageUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_does_not_affect_equality() {
        let a = WatchPageUrl::with_platform("https://netflix.com/watch/1", Some("Netflix".into()))
            .unwrap();
        let b = WatchPageUrl::new("https://netflix.com/watch/1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn url_is_validated() {
        assert!(WatchPageUrl::new("short").is_err());
        assert!(WatchPageUrl::new("https://netflix.com/watch/1").is_ok());
    }
}
