//! Whole-database operations: test resets and health probes

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use blog_core::traits::{MaintenanceRepository, RepoResult};

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgMaintenanceRepository {
    pool: PgPool,
}

impl PgMaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceRepository for PgMaintenanceRepository {
    #[instrument(skip(self))]
    async fn clear_all(&self) -> RepoResult<()> {
        warn!("Truncating all tables");
        sqlx::query("TRUNCATE likes, comments, posts, blogs, sessions, users")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
