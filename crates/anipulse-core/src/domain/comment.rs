use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Highest rating a comment may carry.
pub const MAX_RATING: i32 = 5;

/// Comment entity - a reader's comment on a post.
///
/// A rating of 0 means "no rating given" and is excluded from the post's
/// aggregate rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub rating: i32,
}

/// A comment as submitted, before the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i32,
    pub user_name: String,
    pub content: String,
    pub rating: i32,
}

impl NewComment {
    /// Check presence and range constraints.
    ///
    /// Out-of-range ratings are rejected rather than clamped, so a bad
    /// submission never skews the post aggregate.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.post_id <= 0 {
            return Err(StoreError::InvalidInput("postId is required".into()));
        }
        if self.user_name.trim().is_empty() {
            return Err(StoreError::InvalidInput("userName is required".into()));
        }
        if self.content.trim().is_empty() {
            return Err(StoreError::InvalidInput("content is required".into()));
        }
        if !(0..=MAX_RATING).contains(&self.rating) {
            return Err(StoreError::InvalidInput(format!(
                "rating must be between 0 and {MAX_RATING}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewComment {
        NewComment {
            post_id: 1,
            user_name: "Sakura".to_string(),
            content: "Ótimo texto!".to_string(),
            rating: 4,
        }
    }

    #[test]
    fn accepts_valid_comment() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn accepts_unrated_comment() {
        let mut c = valid();
        c.rating = 0;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_blank_user_name() {
        let mut c = valid();
        c.user_name = "   ".to_string();
        assert!(matches!(c.validate(), Err(StoreError::InvalidInput(_))));
    }

    #[test]
    fn rejects_missing_post_id() {
        let mut c = valid();
        c.post_id = 0;
        assert!(matches!(c.validate(), Err(StoreError::InvalidInput(_))));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        for rating in [-1, 6, 42] {
            let mut c = valid();
            c.rating = rating;
            assert!(matches!(c.validate(), Err(StoreError::InvalidInput(_))));
        }
    }
}
