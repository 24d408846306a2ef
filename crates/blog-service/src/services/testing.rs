//! Test-support and health operations

use tracing::{error, instrument, warn};

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Maintenance service
pub struct TestingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TestingService<'a> {
    /// Create a new TestingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Wipe every table
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> ServiceResult<()> {
        warn!("Clearing all data");
        self.ctx.maintenance_repo().clear_all().await?;
        Ok(())
    }

    /// Database reachability for the readiness probe
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_healthy = match self.ctx.maintenance_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Database health check failed");
                false
            }
        };
        ReadinessResponse::ready(database_healthy)
    }
}
