//! Transfer workflow handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::super::state::AppState;
use super::super::types::{ok, ApiResult};
use crate::core_types::{RecordRef, UserId};
use crate::transfer::{DecisionAction, Transfer, TransferDraft, TransferStatus};

/// An approval-stage decision as submitted by the caller
#[derive(Debug, Deserialize, ToSchema)]
pub struct DecisionRequest {
    pub action: DecisionAction,
    pub decided_by: UserId,
    /// Mandatory at both stages
    pub comment: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTransfersQuery {
    /// Restrict to one workflow status
    pub status: Option<TransferStatus>,
}

/// Submit a relocation request
///
/// POST /api/v1/transfers
///
/// Creates the transfer in Pending state with the asset's current location
/// snapshotted, and notifies every Operations Manager.
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = TransferDraft,
    responses(
        (status = 200, description = "Transfer created in Pending state", body = Transfer),
        (status = 400, description = "Missing required field or duplicate code"),
        (status = 404, description = "Asset reference does not resolve")
    ),
    tag = "Transfer"
)]
pub async fn submit_transfer(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<TransferDraft>,
) -> ApiResult<Transfer> {
    let transfer = state.workflow.submit(draft).await?;
    ok(transfer)
}

/// List transfers
///
/// GET /api/v1/transfers
#[utoipa::path(
    get,
    path = "/api/v1/transfers",
    params(ListTransfersQuery),
    responses(
        (status = 200, description = "Transfers, newest first", body = Vec<Transfer>)
    ),
    tag = "Transfer"
)]
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTransfersQuery>,
) -> ApiResult<Vec<Transfer>> {
    let transfers = state.workflow.list(query.status).await?;
    ok(transfers)
}

/// Fetch one transfer by surrogate id or code
///
/// GET /api/v1/transfers/{reference}
#[utoipa::path(
    get,
    path = "/api/v1/transfers/{reference}",
    params(
        ("reference" = String, Path, description = "Transfer surrogate id or human code")
    ),
    responses(
        (status = 200, description = "Transfer detail", body = Transfer),
        (status = 404, description = "Transfer not found")
    ),
    tag = "Transfer"
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> ApiResult<Transfer> {
    let transfer = state.workflow.get(&RecordRef::new(reference)).await?;
    ok(transfer)
}

/// Stage-1 (operations manager) decision
///
/// POST /api/v1/transfers/{reference}/ops-decision
///
/// Requires the transfer to still be Pending; a concurrent decision that
/// moved it first surfaces as 409 naming the current status.
#[utoipa::path(
    post,
    path = "/api/v1/transfers/{reference}/ops-decision",
    params(
        ("reference" = String, Path, description = "Transfer surrogate id or human code")
    ),
    request_body = DecisionRequest,
    responses(
        (status = 200, description = "Decision recorded", body = Transfer),
        (status = 400, description = "Missing comment"),
        (status = 404, description = "Transfer not found"),
        (status = 409, description = "Transfer is not Pending")
    ),
    tag = "Transfer"
)]
pub async fn decide_ops(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
    Json(req): Json<DecisionRequest>,
) -> ApiResult<Transfer> {
    let transfer = state
        .workflow
        .approve_ops(
            &RecordRef::new(reference),
            req.action,
            req.decided_by,
            &req.comment,
        )
        .await?;
    ok(transfer)
}

/// Stage-2 (asset manager) decision
///
/// POST /api/v1/transfers/{reference}/mgr-decision
///
/// On approve the asset is relocated, history appended and a broadcast
/// recorded — all in one atomic unit with the status change.
#[utoipa::path(
    post,
    path = "/api/v1/transfers/{reference}/mgr-decision",
    params(
        ("reference" = String, Path, description = "Transfer surrogate id or human code")
    ),
    request_body = DecisionRequest,
    responses(
        (status = 200, description = "Decision recorded", body = Transfer),
        (status = 400, description = "Missing comment"),
        (status = 404, description = "Transfer not found"),
        (status = 409, description = "Transfer is not OpsApproved")
    ),
    tag = "Transfer"
)]
pub async fn decide_mgr(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
    Json(req): Json<DecisionRequest>,
) -> ApiResult<Transfer> {
    let transfer = state
        .workflow
        .approve_mgr(
            &RecordRef::new(reference),
            req.action,
            req.decided_by,
            &req.comment,
        )
        .await?;
    ok(transfer)
}

/// Cancel (hard-delete) a transfer
///
/// DELETE /api/v1/transfers/{reference}
#[utoipa::path(
    delete,
    path = "/api/v1/transfers/{reference}",
    params(
        ("reference" = String, Path, description = "Transfer surrogate id or human code")
    ),
    responses(
        (status = 200, description = "Transfer cancelled"),
        (status = 404, description = "Transfer not found"),
        (status = 409, description = "Transfer is not Pending or OnHold")
    ),
    tag = "Transfer"
)]
pub async fn cancel_transfer(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> ApiResult<()> {
    state.workflow.cancel(&RecordRef::new(reference)).await?;
    ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_request_deserialization() {
        let json = r#"{"action": "approve", "decided_by": 2002, "comment": "ok to move"}"#;
        let req: DecisionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.action, DecisionAction::Approve);
        assert_eq!(req.decided_by, 2002);
        assert_eq!(req.comment, "ok to move");
    }

    #[test]
    fn test_decision_request_rejects_unknown_action() {
        let json = r#"{"action": "escalate", "decided_by": 2002, "comment": "?"}"#;
        let result: Result<DecisionRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
