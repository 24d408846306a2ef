//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::User;
use blog_core::traits::{RepoResult, UserQuery, UserRepository};
use blog_core::value_objects::{Page, Snowflake};

use crate::models::UserModel;

use super::error::{like_pattern, map_db_error, map_unique_violation, user_conflict};

const USER_COLUMNS: &str = "id, login, email, password_hash, confirmation_code, \
    confirmation_expires_at, is_confirmed, recovery_code, recovery_expires_at, created_at";

const SORTABLE: &[(&str, &str)] = &[
    ("createdAt", "created_at"),
    ("login", "login"),
    ("email", "email"),
];

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, predicate: &str, value: &str) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {predicate}");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_login_or_email(&self, login_or_email: &str) -> RepoResult<Option<User>> {
        self.find_one("login = $1 OR email = $1", login_or_email).await
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_one("email = $1", email).await
    }

    #[instrument(skip(self, code))]
    async fn find_by_confirmation_code(&self, code: Uuid) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE confirmation_code = $1");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn login_exists(&self, login: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE login = $1)")
            .bind(login)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, login, email, password_hash, confirmation_code,
                               confirmation_expires_at, is_confirmed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.login)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.email_confirmation.code)
        .bind(user.email_confirmation.expires_at)
        .bind(user.email_confirmation.is_confirmed)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, user_conflict))?;

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn confirm_email(&self, code: Uuid, now: DateTime<Utc>) -> RepoResult<Option<Snowflake>> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE users
            SET is_confirmed = TRUE
            WHERE confirmation_code = $1
              AND confirmation_expires_at > $2
              AND NOT is_confirmed
            RETURNING id
            ",
        )
        .bind(code)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id.map(Snowflake::new))
    }

    #[instrument(skip(self, code))]
    async fn update_confirmation_code(
        &self,
        id: Snowflake,
        code: Uuid,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE users
            SET confirmation_code = $2, confirmation_expires_at = $3
            WHERE id = $1 AND NOT is_confirmed
            ",
        )
        .bind(id.into_inner())
        .bind(code)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn set_recovery_code(
        &self,
        id: Snowflake,
        code: Uuid,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        sqlx::query("UPDATE users SET recovery_code = $2, recovery_expires_at = $3 WHERE id = $1")
            .bind(id.into_inner())
            .bind(code)
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, code, password_hash))]
    async fn reset_password(
        &self,
        code: Uuid,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<Snowflake>> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE users
            SET password_hash = $2, recovery_code = NULL, recovery_expires_at = NULL
            WHERE recovery_code = $1 AND recovery_expires_at > $3
            RETURNING id
            ",
        )
        .bind(code)
        .bind(password_hash)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id.map(Snowflake::new))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &UserQuery) -> RepoResult<Page<User>> {
        let login = query.search_login_term.as_deref().map(like_pattern);
        let email = query.search_email_term.as_deref().map(like_pattern);
        let filter = r"
            ($1::text IS NULL AND $2::text IS NULL)
            OR login ILIKE $1
            OR email ILIKE $2
        ";

        let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM users WHERE {filter}"))
            .bind(&login)
            .bind(&email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {filter} ORDER BY {} {}, id {} LIMIT $3 OFFSET $4",
            query.page.sort_column(SORTABLE),
            query.page.sort_direction.as_sql(),
            query.page.sort_direction.as_sql(),
        );
        let rows = sqlx::query_as::<_, UserModel>(&sql)
            .bind(&login)
            .bind(&email)
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(User::from).collect(),
            total,
            &query.page,
        ))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Comments cascade with the user; likes on them do not
        sqlx::query(
            r#"
            DELETE FROM likes
            WHERE target_type = 'comment'
              AND target_id IN (SELECT id FROM comments WHERE user_id = $1)
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
