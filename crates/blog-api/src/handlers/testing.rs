//! Test-support handlers

use axum::extract::State;
use blog_service::TestingService;

use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Truncate every table
///
/// DELETE /testing/all-data
pub async fn clear_all_data(State(state): State<AppState>) -> ApiResult<NoContent> {
    TestingService::new(state.services()).clear_all().await?;
    Ok(NoContent)
}
