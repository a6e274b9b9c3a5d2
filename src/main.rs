//! Rigtrack service binary
//!
//! Config -> logging -> PostgreSQL -> schema bootstrap -> gateway.

use std::sync::Arc;

use rigtrack::clock::{Clock, SystemClock};
use rigtrack::config::AppConfig;
use rigtrack::db::{self, Database};
use rigtrack::gateway::{self, state::AppState};
use rigtrack::maintenance::{MaintenanceService, MaintenanceStore, PgMaintenanceStore};
use rigtrack::notify::{NotificationEmitter, PgNotificationEmitter, PgRoleDirectory, RoleDirectory};
use rigtrack::transfer::{PgTransferStore, TransferStore, TransferWorkflow};
use rigtrack::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("RIGTRACK_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = AppConfig::load(&env);
    let _guard = logging::init_logging(&config);

    tracing::info!(version = env!("GIT_HASH"), env = %env, "Rigtrack starting");

    let database = Arc::new(Database::connect(&config.postgres_url).await?);
    db::init_schema(database.pool()).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let roles: Arc<dyn RoleDirectory> = Arc::new(PgRoleDirectory::new(database.pool().clone()));
    let notifier: Arc<dyn NotificationEmitter> =
        Arc::new(PgNotificationEmitter::new(database.pool().clone(), roles));
    let transfer_store: Arc<dyn TransferStore> =
        Arc::new(PgTransferStore::new(database.pool().clone()));
    let maintenance_store: Arc<dyn MaintenanceStore> =
        Arc::new(PgMaintenanceStore::new(database.pool().clone()));

    let workflow = Arc::new(TransferWorkflow::new(
        transfer_store,
        notifier,
        clock.clone(),
    ));
    let maintenance = Arc::new(MaintenanceService::new(maintenance_store, clock));

    let state = Arc::new(AppState::new(workflow, maintenance, database));
    gateway::serve(state, &config.gateway.host, config.gateway.port).await
}
