use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// One viewing of an episode. Immutable once constructed; the only lifecycle
/// event after creation is removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewingRecord {
    id: i64,
    episode_id: i64,
    watched_at: DateTime<Utc>,
    rating: i32,
    comment: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl ViewingRecord {
    pub fn new(
        id: i64,
        episode_id: i64,
        watched_at: DateTime<Utc>,
        rating: i32,
        comment: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Validator::validate_rating(rating)?;
        if let Some(ref comment) = comment {
            Validator::validate_comment(comment)?;
        }
        if watched_at > Utc::now() {
            return Err(AppError::Validation(
                "Watched date must not be in the future".to_string(),
            ));
        }
        Ok(Self {
            id,
            episode_id,
            watched_at,
            rating,
            comment,
            recorded_at,
        })
    }

    /// Creates a new record stamped with the current time.
    pub fn create(
        id: i64,
        episode_id: i64,
        watched_at: DateTime<Utc>,
        rating: i32,
        comment: Option<String>,
    ) -> AppResult<Self> {
        Self::new(id, episode_id, watched_at, rating, comment, Utc::now())
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn episode_id(&self) -> i64 {
        self.episode_id
    }

    pub fn watched_at(&self) -> DateTime<Utc> {
        self.watched_at
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn past() -> DateTime<Utc> {
        Utc::now() - Duration::hours(2)
    }

    #[test]
    fn creates_with_valid_fields() {
        let record = ViewingRecord::create(1, 10, past(), 4, Some("great finale".into())).unwrap();
        assert_eq!(record.rating(), 4);
        assert_eq!(record.comment(), Some("great finale"));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert!(ViewingRecord::create(1, 10, past(), 0, None).is_err());
        assert!(ViewingRecord::create(1, 10, past(), 6, None).is_err());
    }

    #[test]
    fn rejects_overlong_comment() {
        let comment = "x".repeat(2001);
        assert!(ViewingRecord::create(1, 10, past(), 3, Some(comment)).is_err());
    }

    #[test]
    fn comment_at_limit_is_accepted() {
        let comment = "x".repeat(2000);
        assert!(ViewingRecord::create(1, 10, past(), 3, Some(comment)).is_ok());
    }

    #[test]
    fn rejects_future_watched_at() {
        let future = Utc::now() + Duration::hours(1);
        let err = ViewingRecord::create(1, 10, future, 3, None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
