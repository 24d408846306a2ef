//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Blog;
use blog_core::traits::{BlogQuery, BlogRepository, RepoResult};
use blog_core::value_objects::{Page, Snowflake};

use crate::models::BlogModel;

use super::error::{like_pattern, map_db_error};

const SORTABLE: &[(&str, &str)] = &[
    ("createdAt", "created_at"),
    ("name", "name"),
    ("description", "description"),
    ("websiteUrl", "website_url"),
];

#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r"
            SELECT id, name, description, website_url, is_membership, created_at
            FROM blogs
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &BlogQuery) -> RepoResult<Page<Blog>> {
        let name = query.search_name_term.as_deref().map(like_pattern);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM blogs WHERE $1::text IS NULL OR name ILIKE $1",
        )
        .bind(&name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let sql = format!(
            r"
            SELECT id, name, description, website_url, is_membership, created_at
            FROM blogs
            WHERE $1::text IS NULL OR name ILIKE $1
            ORDER BY {column} {dir}, id {dir}
            LIMIT $2 OFFSET $3
            ",
            column = query.page.sort_column(SORTABLE),
            dir = query.page.sort_direction.as_sql(),
        );
        let rows = sqlx::query_as::<_, BlogModel>(&sql)
            .bind(&name)
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Blog::from).collect(),
            total,
            &query.page,
        ))
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO blogs (id, name, description, website_url, is_membership, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(blog.id.into_inner())
        .bind(&blog.name)
        .bind(&blog.description)
        .bind(&blog.website_url)
        .bind(blog.is_membership)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn update(&self, blog: &Blog) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE blogs
            SET name = $2, description = $3, website_url = $4
            WHERE id = $1
            ",
        )
        .bind(blog.id.into_inner())
        .bind(&blog.name)
        .bind(&blog.description)
        .bind(&blog.website_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Likes are polymorphic and have no FK to their targets
        sqlx::query(
            r"
            DELETE FROM likes
            WHERE (target_type = 'post' AND target_id IN (SELECT id FROM posts WHERE blog_id = $1))
               OR (target_type = 'comment' AND target_id IN (
                      SELECT c.id FROM comments c JOIN posts p ON p.id = c.post_id
                      WHERE p.blog_id = $1))
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
