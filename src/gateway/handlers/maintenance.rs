//! Maintenance schedule handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ok, ApiResult};
use crate::core_types::RecordRef;
use crate::maintenance::{CompletionRequest, MaintenanceLog, ScheduleView};

/// Completion result: the rolled-forward schedule and the log row
#[derive(Debug, Serialize, ToSchema)]
pub struct CompletionResponse {
    pub schedule: ScheduleView,
    pub log: MaintenanceLog,
}

/// List maintenance schedules in alert order
///
/// GET /api/v1/maintenance
///
/// Every entry carries its derived live status and days-until-due; overdue
/// tasks come first, then due-soon, each group by ascending due date.
#[utoipa::path(
    get,
    path = "/api/v1/maintenance",
    responses(
        (status = 200, description = "Schedules in alert order", body = Vec<ScheduleView>)
    ),
    tag = "Maintenance"
)]
pub async fn list_maintenance(State(state): State<Arc<AppState>>) -> ApiResult<Vec<ScheduleView>> {
    let views = state.maintenance.list().await?;
    ok(views)
}

/// Fetch one schedule by surrogate id or code
///
/// GET /api/v1/maintenance/{reference}
#[utoipa::path(
    get,
    path = "/api/v1/maintenance/{reference}",
    params(
        ("reference" = String, Path, description = "Schedule surrogate id or human code")
    ),
    responses(
        (status = 200, description = "Schedule with derived state", body = ScheduleView),
        (status = 404, description = "Schedule not found")
    ),
    tag = "Maintenance"
)]
pub async fn get_maintenance(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> ApiResult<ScheduleView> {
    let view = state.maintenance.get(&RecordRef::new(reference)).await?;
    ok(view)
}

/// Record a completion event
///
/// POST /api/v1/maintenance/{reference}/complete
///
/// Writes the immutable log and rolls the schedule to its next occurrence
/// in one atomic unit; the stored status resets to Scheduled.
#[utoipa::path(
    post,
    path = "/api/v1/maintenance/{reference}/complete",
    params(
        ("reference" = String, Path, description = "Schedule surrogate id or human code")
    ),
    request_body = CompletionRequest,
    responses(
        (status = 200, description = "Completion recorded", body = CompletionResponse),
        (status = 400, description = "Missing completion date or completer"),
        (status = 404, description = "Schedule not found")
    ),
    tag = "Maintenance"
)]
pub async fn complete_maintenance(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
    Json(request): Json<CompletionRequest>,
) -> ApiResult<CompletionResponse> {
    let (schedule, log) = state
        .maintenance
        .complete(&RecordRef::new(reference), request)
        .await?;
    ok(CompletionResponse { schedule, log })
}
