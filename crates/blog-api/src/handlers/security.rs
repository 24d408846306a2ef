//! Security device handlers
//!
//! Every route requires a live refresh-token cookie.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{DeviceResponse, SecurityService};

use crate::extractors::RefreshSession;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /security/devices
pub async fn list_devices(
    State(state): State<AppState>,
    session: RefreshSession,
) -> ApiResult<Json<Vec<DeviceResponse>>> {
    let devices = SecurityService::new(state.services())
        .list_devices(session.user_id, session.binding)
        .await?;
    Ok(Json(devices))
}

/// DELETE /security/devices
pub async fn terminate_all(
    State(state): State<AppState>,
    session: RefreshSession,
) -> ApiResult<NoContent> {
    SecurityService::new(state.services())
        .terminate_all(session.user_id, session.binding)
        .await?;
    Ok(NoContent)
}

/// DELETE /security/devices/:device_id
pub async fn terminate_device(
    State(state): State<AppState>,
    session: RefreshSession,
    Path(device_id): Path<String>,
) -> ApiResult<NoContent> {
    SecurityService::new(state.services())
        .terminate_device(session.user_id, session.binding, &device_id)
        .await?;
    Ok(NoContent)
}
