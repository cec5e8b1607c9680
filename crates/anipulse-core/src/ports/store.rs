use async_trait::async_trait;

use crate::domain::{Category, Comment, NewComment, PostDetail};
use crate::error::StoreError;

/// The content-and-comment data service.
///
/// Owns all persisted blog state; the HTTP layer holds request-scoped
/// copies only. Implementations must make `create_comment` atomic: the
/// comment insert and the post-rating recompute are one logical unit.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All categories in insertion order.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Posts with category and author resolved, newest first.
    ///
    /// A `category_slug` that matches no category yields an empty list,
    /// not an error.
    async fn list_posts(
        &self,
        category_slug: Option<&str>,
    ) -> Result<Vec<PostDetail>, StoreError>;

    /// Look up a single post by its slug.
    async fn get_post_by_slug(&self, slug: &str) -> Result<PostDetail, StoreError>;

    /// Comments on a post, newest first. Empty for unknown posts.
    async fn list_comments_for_post(&self, post_id: i32) -> Result<Vec<Comment>, StoreError>;

    /// Validate and persist a comment, updating the post's aggregate
    /// rating when the comment carries one.
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, StoreError>;
}
