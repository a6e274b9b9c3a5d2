//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::{CompletionResponse, DecisionRequest, HealthResponse};
use crate::maintenance::{
    CompletionRequest, LiveStatus, MaintenanceLog, MaintenanceSchedule, ScheduleView, StoredStatus,
};
use crate::transfer::{
    DecisionAction, Priority, StageDecision, Transfer, TransferDraft, TransferKind, TransferStatus,
};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rigtrack API",
        version = "1.0.0",
        description = "Rig equipment tracking: two-stage transfer approvals and maintenance scheduling.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::submit_transfer,
        crate::gateway::handlers::list_transfers,
        crate::gateway::handlers::get_transfer,
        crate::gateway::handlers::decide_ops,
        crate::gateway::handlers::decide_mgr,
        crate::gateway::handlers::cancel_transfer,
        crate::gateway::handlers::list_maintenance,
        crate::gateway::handlers::get_maintenance,
        crate::gateway::handlers::complete_maintenance,
    ),
    components(
        schemas(
            HealthResponse,
            Transfer,
            TransferDraft,
            TransferStatus,
            TransferKind,
            Priority,
            DecisionAction,
            StageDecision,
            DecisionRequest,
            MaintenanceSchedule,
            MaintenanceLog,
            ScheduleView,
            StoredStatus,
            LiveStatus,
            CompletionRequest,
            CompletionResponse,
        )
    ),
    tags(
        (name = "Transfer", description = "Two-stage transfer approval workflow"),
        (name = "Maintenance", description = "Maintenance schedules with derived urgency"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("OpenAPI document should serialize");
        assert!(json.contains("/api/v1/transfers"));
        assert!(json.contains("/api/v1/maintenance"));
    }
}
