//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::Session;
use blog_core::traits::{RepoResult, SessionRepository};
use blog_core::value_objects::Snowflake;

use crate::models::SessionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SessionRepository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self, session), fields(user_id = %session.user_id, device_id = %session.device_id))]
    async fn create(&self, session: &Session) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO sessions (device_id, token_key, user_id, ip, user_agent, issued_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(session.device_id)
        .bind(session.token_key)
        .bind(session.user_id.into_inner())
        .bind(&session.ip)
        .bind(&session.user_agent)
        .bind(session.issued_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token_key))]
    async fn find_by_token_key(
        &self,
        user_id: Snowflake,
        token_key: Uuid,
    ) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT device_id, token_key, user_id, ip, user_agent, issued_at, expires_at
            FROM sessions
            WHERE user_id = $1 AND token_key = $2 AND expires_at > NOW()
            ",
        )
        .bind(user_id.into_inner())
        .bind(token_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }

    #[instrument(skip(self))]
    async fn find_by_device(&self, device_id: Uuid) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT device_id, token_key, user_id, ip, user_agent, issued_at, expires_at
            FROM sessions
            WHERE device_id = $1
            ",
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }

    #[instrument(skip(self))]
    async fn find_active_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Session>> {
        let results = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT device_id, token_key, user_id, ip, user_agent, issued_at, expires_at
            FROM sessions
            WHERE user_id = $1 AND expires_at > NOW()
            ORDER BY issued_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Session::from).collect())
    }

    #[instrument(skip(self, previous_key, rotated), fields(device_id = %rotated.device_id))]
    async fn rotate(&self, previous_key: Uuid, rotated: &Session) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE sessions
            SET token_key = $3, issued_at = $4, expires_at = $5
            WHERE device_id = $1 AND token_key = $2
            ",
        )
        .bind(rotated.device_id)
        .bind(previous_key)
        .bind(rotated.token_key)
        .bind(rotated.issued_at)
        .bind(rotated.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self, token_key))]
    async fn exists(&self, user_id: Snowflake, token_key: Uuid) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM sessions WHERE user_id = $1 AND token_key = $2)",
        )
        .bind(user_id.into_inner())
        .bind(token_key)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, token_key))]
    async fn delete_by_token_key(&self, token_key: Uuid) -> RepoResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token_key = $1")
            .bind(token_key)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_device(&self, device_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE device_id = $1")
            .bind(device_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
