use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_title_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "Title name must not be blank".to_string(),
            ));
        }
        if name.chars().count() > 200 {
            return Err(AppError::Validation(
                "Title name must not exceed 200 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_series_name(name: &str) -> Result<(), AppError> {
        if name.chars().count() > 100 {
            return Err(AppError::Validation(
                "Series name must not exceed 100 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_episode_info(info: &str) -> Result<(), AppError> {
        if info.chars().count() > 200 {
            return Err(AppError::Validation(
                "Episode info must not exceed 200 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<(), AppError> {
        if url.chars().count() < 10 {
            return Err(AppError::Validation(
                "URL must be at least 10 characters".to_string(),
            ));
        }
        if url.chars().count() > 2000 {
            return Err(AppError::Validation(
                "URL must not exceed 2000 characters".to_string(),
            ));
        }
        let re = Regex::new(r"^https?://").unwrap();
        if !re.is_match(url) {
            return Err(AppError::Validation(
                "URL must start with http:// or https://".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating(rating: i32) -> Result<(), AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_comment(comment: &str) -> Result<(), AppError> {
        if comment.chars().count() > 2000 {
            return Err(AppError::Validation(
                "Comment must not exceed 2000 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_name_bounds() {
        assert!(Validator::validate_title_name("Frieren").is_ok());
        assert!(Validator::validate_title_name("").is_err());
        assert!(Validator::validate_title_name("   ").is_err());
        assert!(Validator::validate_title_name(&"x".repeat(200)).is_ok());
        assert!(Validator::validate_title_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn empty_series_name_is_valid() {
        assert!(Validator::validate_series_name("").is_ok());
        assert!(Validator::validate_series_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn url_shape() {
        assert!(Validator::validate_url("https://example.com/a").is_ok());
        assert!(Validator::validate_url("http://a.io").is_ok());
        assert!(Validator::validate_url("ftp://example.com").is_err());
        assert!(Validator::validate_url("https://").is_err()); // below minimum length
        let long = format!("https://e.com/{}", "x".repeat(2000));
        assert!(Validator::validate_url(&long).is_err());
    }

    #[test]
    fn rating_range() {
        assert!(Validator::validate_rating(1).is_ok());
        assert!(Validator::validate_rating(5).is_ok());
        assert!(Validator::validate_rating(0).is_err());
        assert!(Validator::validate_rating(6).is_err());
    }
}
