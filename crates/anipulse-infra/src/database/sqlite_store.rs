//! SQLite implementation of the content store port.

use async_trait::async_trait;
use sea_orm::prelude::DateTimeUtc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set, TransactionTrait,
};

use anipulse_core::domain::{Category, Comment, NewComment, PostDetail};
use anipulse_core::error::StoreError;
use anipulse_core::ports::ContentStore;

use super::entity::{author, category, comment, post};

/// SQLite content store.
///
/// All persisted blog state goes through this type; handlers receive it
/// as `Arc<dyn ContentStore>` and never touch the connection directly.
pub struct SqliteContentStore {
    db: DbConn,
}

impl SqliteContentStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Base query for posts joined with their category and author.
    fn posts_with_refs() -> Select<post::Entity> {
        post::Entity::find()
            .join(JoinType::InnerJoin, post::Relation::Category.def())
            .join(JoinType::InnerJoin, post::Relation::Author.def())
            .column_as(category::Column::Name, "category_name")
            .column_as(category::Column::Slug, "category_slug")
            .column_as(author::Column::Name, "author_name")
            .column_as(author::Column::Avatar, "author_avatar")
    }
}

/// Row shape produced by [`SqliteContentStore::posts_with_refs`].
#[derive(Debug, FromQueryResult)]
struct PostJoinRow {
    id: i32,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    image: String,
    category_id: i32,
    author_id: i32,
    created_at: DateTimeUtc,
    rating: f64,
    views: i32,
    category_name: String,
    category_slug: String,
    author_name: String,
    author_avatar: Option<String>,
}

impl From<PostJoinRow> for PostDetail {
    fn from(row: PostJoinRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            image: row.image,
            category_id: row.category_id,
            author_id: row.author_id,
            created_at: row.created_at,
            rating: row.rating,
            views: row.views,
            category_name: row.category_name,
            category_slug: row.category_slug,
            author_name: row.author_name,
            author_avatar: row.author_avatar,
        }
    }
}

fn storage_err(err: sea_orm::DbErr) -> StoreError {
    StoreError::Storage(err.to_string())
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_posts(
        &self,
        category_slug: Option<&str>,
    ) -> Result<Vec<PostDetail>, StoreError> {
        let mut query = Self::posts_with_refs().order_by_desc(post::Column::CreatedAt);

        if let Some(slug) = category_slug {
            let found = category::Entity::find()
                .filter(category::Column::Slug.eq(slug))
                .one(&self.db)
                .await
                .map_err(storage_err)?;

            // An unknown category is not an error, just an empty listing.
            let Some(cat) = found else {
                return Ok(Vec::new());
            };
            query = query.filter(post::Column::CategoryId.eq(cat.id));
        }

        let rows = query
            .into_model::<PostJoinRow>()
            .all(&self.db)
            .await
            .map_err(storage_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<PostDetail, StoreError> {
        let row = Self::posts_with_refs()
            .filter(post::Column::Slug.eq(slug))
            .into_model::<PostJoinRow>()
            .one(&self.db)
            .await
            .map_err(storage_err)?;

        row.map(Into::into)
            .ok_or_else(|| StoreError::not_found("post", slug))
    }

    async fn list_comments_for_post(&self, post_id: i32) -> Result<Vec<Comment>, StoreError> {
        let rows = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_desc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(storage_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, StoreError> {
        new_comment.validate()?;
        let NewComment {
            post_id,
            user_name,
            content,
            rating,
        } = new_comment;

        // Insert and aggregate-recompute are one logical unit: both run in
        // a single transaction so a concurrent submission for the same post
        // cannot read a stale comment set.
        let txn = self.db.begin().await.map_err(storage_err)?;

        let inserted = comment::ActiveModel {
            post_id: Set(post_id),
            user_name: Set(user_name),
            content: Set(content),
            created_at: Set(chrono::Utc::now()),
            rating: Set(rating),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(storage_err)?;

        // A rating of 0 means "no rating given" and leaves the post as is.
        if rating > 0 {
            let ratings: Vec<i32> = comment::Entity::find()
                .select_only()
                .column(comment::Column::Rating)
                .filter(comment::Column::PostId.eq(post_id))
                .filter(comment::Column::Rating.gt(0))
                .into_tuple()
                .all(&txn)
                .await
                .map_err(storage_err)?;

            // Never empty: the comment inserted above qualifies.
            let average = ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64;

            post::Entity::update_many()
                .col_expr(post::Column::Rating, Expr::value(average))
                .filter(post::Column::Id.eq(post_id))
                .exec(&txn)
                .await
                .map_err(storage_err)?;
        }

        txn.commit().await.map_err(storage_err)?;

        tracing::debug!(
            comment_id = inserted.id,
            post_id = inserted.post_id,
            rating = inserted.rating,
            "Comment created"
        );

        Ok(inserted.into())
    }
}
