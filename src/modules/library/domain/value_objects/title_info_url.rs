use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Link to a title information page (Wikipedia, IMDb and the like).
///
/// Immutable; equality and deduplication are by the URL string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleInfoUrl {
    url: String,
}

impl TitleInfoUrl {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let url = url.into();
        Validator::validate_url(&url)?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_urls() {
        assert!(TitleInfoUrl::new("https://example.com/show").is_ok());
        assert!(TitleInfoUrl::new("file:///etc/passwd").is_err());
        assert!(TitleInfoUrl::new("https://").is_err());
    }

    #[test]
    fn equality_is_by_url() {
        let a = TitleInfoUrl::new("https://example.com/a").unwrap();
        let b = TitleInfoUrl::new("https://example.com/a").unwrap();
        assert_eq!(a, b);
    }
}
