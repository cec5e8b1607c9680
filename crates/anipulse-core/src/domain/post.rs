use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog article as stored.
///
/// `rating` is derived state: the mean of this post's comment ratings
/// greater than zero, maintained by the store on comment creation.
/// It is never written directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category_id: i32,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub rating: f64,
    pub views: i32,
}

/// A post with its category and author resolved, ready for rendering.
///
/// This is the shape both the listing and detail endpoints return: the
/// view layer renders category names and author bylines without issuing
/// follow-up lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category_id: i32,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub rating: f64,
    pub views: i32,
    pub category_name: String,
    pub category_slug: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
}
