//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Post;
use blog_core::traits::{PostRepository, RepoResult};
use blog_core::value_objects::{Page, PageQuery, Snowflake};

use crate::models::PostModel;

use super::error::map_db_error;

const SORTABLE: &[(&str, &str)] = &[
    ("createdAt", "p.created_at"),
    ("title", "p.title"),
    ("shortDescription", "p.short_description"),
    ("content", "p.content"),
    ("blogId", "p.blog_id"),
    ("blogName", "b.name"),
];

#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.blog_id, b.name AS blog_name, p.title, p.short_description,
                   p.content, p.created_at
            FROM posts p
            JOIN blogs b ON b.id = p.blog_id
            WHERE p.id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        blog_id: Option<Snowflake>,
        query: &PageQuery,
    ) -> RepoResult<Page<Post>> {
        let blog_id = blog_id.map(Snowflake::into_inner);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE $1::bigint IS NULL OR blog_id = $1",
        )
        .bind(blog_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let sql = format!(
            r"
            SELECT p.id, p.blog_id, b.name AS blog_name, p.title, p.short_description,
                   p.content, p.created_at
            FROM posts p
            JOIN blogs b ON b.id = p.blog_id
            WHERE $1::bigint IS NULL OR p.blog_id = $1
            ORDER BY {column} {dir}, p.id {dir}
            LIMIT $2 OFFSET $3
            ",
            column = query.sort_column(SORTABLE),
            dir = query.sort_direction.as_sql(),
        );
        let rows = sqlx::query_as::<_, PostModel>(&sql)
            .bind(blog_id)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(Post::from).collect(), total, query))
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, blog_id, title, short_description, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.blog_id.into_inner())
        .bind(&post.title)
        .bind(&post.short_description)
        .bind(&post.content)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET blog_id = $2, title = $3, short_description = $4, content = $5
            WHERE id = $1
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.blog_id.into_inner())
        .bind(&post.title)
        .bind(&post.short_description)
        .bind(&post.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM likes
            WHERE (target_type = 'post' AND target_id = $1)
               OR (target_type = 'comment' AND target_id IN (SELECT id FROM comments WHERE post_id = $1))
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
