//! PostgreSQL implementation of LikeRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Like, LikeCounts, LikeDetails, LikeStatus, LikeTarget};
use blog_core::traits::{LikeRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::{LikeCountsModel, LikeDetailsModel, LikeStatusModel};

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self, like), fields(user_id = %like.user_id, status = %like.status))]
    async fn set_status(&self, like: &Like) -> RepoResult<()> {
        if like.is_removal() {
            sqlx::query(
                "DELETE FROM likes WHERE user_id = $1 AND target_type = $2 AND target_id = $3",
            )
            .bind(like.user_id.into_inner())
            .bind(like.target.kind())
            .bind(like.target.id().into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Ok(());
        }

        // Re-sending the same status keeps the original timestamp
        sqlx::query(
            r"
            INSERT INTO likes (user_id, target_type, target_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (user_id, target_type, target_id) DO UPDATE
            SET status = EXCLUDED.status, updated_at = EXCLUDED.updated_at
            WHERE likes.status <> EXCLUDED.status
            ",
        )
        .bind(like.user_id.into_inner())
        .bind(like.target.kind())
        .bind(like.target.id().into_inner())
        .bind(like.status.as_str())
        .bind(like.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, targets), fields(targets = targets.len()))]
    async fn statuses_of(
        &self,
        user_id: Snowflake,
        targets: &[LikeTarget],
    ) -> RepoResult<HashMap<LikeTarget, LikeStatus>> {
        if targets.is_empty() {
            return Ok(HashMap::new());
        }
        let (kinds, ids) = target_arrays(targets);

        let rows = sqlx::query_as::<_, LikeStatusModel>(
            r"
            SELECT l.target_type, l.target_id, l.status
            FROM likes l
            JOIN UNNEST($2::text[], $3::bigint[]) AS w(target_type, target_id)
              ON l.target_type = w.target_type AND l.target_id = w.target_id
            WHERE l.user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .bind(kinds)
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut statuses: HashMap<LikeTarget, LikeStatus> = HashMap::with_capacity(rows.len());
        for row in rows {
            if let Some(target) = row.target() {
                statuses.insert(target, row.status.parse()?);
            }
        }
        Ok(statuses)
    }

    #[instrument(skip(self, targets), fields(targets = targets.len()))]
    async fn counts(&self, targets: &[LikeTarget]) -> RepoResult<HashMap<LikeTarget, LikeCounts>> {
        if targets.is_empty() {
            return Ok(HashMap::new());
        }
        let (kinds, ids) = target_arrays(targets);

        let rows = sqlx::query_as::<_, LikeCountsModel>(
            r"
            SELECT l.target_type, l.target_id,
                   COUNT(*) FILTER (WHERE l.status = 'Like')    AS likes,
                   COUNT(*) FILTER (WHERE l.status = 'Dislike') AS dislikes
            FROM likes l
            JOIN UNNEST($1::text[], $2::bigint[]) AS w(target_type, target_id)
              ON l.target_type = w.target_type AND l.target_id = w.target_id
            GROUP BY l.target_type, l.target_id
            ",
        )
        .bind(kinds)
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| Some((row.target()?, LikeCounts::from(row))))
            .collect())
    }

    #[instrument(skip(self, targets), fields(targets = targets.len()))]
    async fn newest_likes(
        &self,
        targets: &[LikeTarget],
        limit: i64,
    ) -> RepoResult<HashMap<LikeTarget, Vec<LikeDetails>>> {
        if targets.is_empty() {
            return Ok(HashMap::new());
        }
        let (kinds, ids) = target_arrays(targets);

        let rows = sqlx::query_as::<_, LikeDetailsModel>(
            r"
            SELECT target_type, target_id, user_id, login, added_at
            FROM (
                SELECT l.target_type, l.target_id, l.user_id, u.login, l.updated_at AS added_at,
                       ROW_NUMBER() OVER (
                           PARTITION BY l.target_type, l.target_id
                           ORDER BY l.updated_at DESC
                       ) AS rn
                FROM likes l
                JOIN UNNEST($1::text[], $2::bigint[]) AS w(target_type, target_id)
                  ON l.target_type = w.target_type AND l.target_id = w.target_id
                JOIN users u ON u.id = l.user_id
                WHERE l.status = 'Like'
            ) ranked
            WHERE rn <= $3
            ORDER BY target_id, added_at DESC
            ",
        )
        .bind(kinds)
        .bind(ids)
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut newest: HashMap<LikeTarget, Vec<LikeDetails>> = HashMap::new();
        for row in rows {
            if let Some(target) = row.target() {
                newest.entry(target).or_default().push(LikeDetails::from(row));
            }
        }
        Ok(newest)
    }
}

/// Parallel discriminator and id arrays for `UNNEST`
fn target_arrays(targets: &[LikeTarget]) -> (Vec<String>, Vec<i64>) {
    targets
        .iter()
        .map(|target| (target.kind().to_string(), target.id().into_inner()))
        .unzip()
}
