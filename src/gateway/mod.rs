//! HTTP gateway
//!
//! Maps submit / decision / cancel / read requests onto the workflow and
//! maintenance service, and the core error taxonomy onto HTTP statuses.
//! The gateway holds no business rules of its own.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .route(
            "/api/v1/transfers",
            post(handlers::submit_transfer).get(handlers::list_transfers),
        )
        .route(
            "/api/v1/transfers/{reference}",
            get(handlers::get_transfer).delete(handlers::cancel_transfer),
        )
        .route(
            "/api/v1/transfers/{reference}/ops-decision",
            post(handlers::decide_ops),
        )
        .route(
            "/api/v1/transfers/{reference}/mgr-decision",
            post(handlers::decide_mgr),
        )
        .route("/api/v1/maintenance", get(handlers::list_maintenance))
        .route(
            "/api/v1/maintenance/{reference}",
            get(handlers::get_maintenance),
        )
        .route(
            "/api/v1/maintenance/{reference}/complete",
            post(handlers::complete_maintenance),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Gateway listening on http://{addr} (docs at /docs)");
    axum::serve(listener, app).await?;
    Ok(())
}
