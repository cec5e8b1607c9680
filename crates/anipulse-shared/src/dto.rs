//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/comments`.
///
/// The client sends camelCase keys (`postId`, `userName`); responses use
/// the snake_case row shape, so only the request side needs renaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub post_id: i32,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub content: String,
    /// Omitted rating means "no rating given".
    #[serde(default)]
    pub rating: i32,
}
