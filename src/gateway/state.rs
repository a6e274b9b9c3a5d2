use std::sync::Arc;

use crate::db::Database;
use crate::maintenance::MaintenanceService;
use crate::transfer::TransferWorkflow;

/// Gateway shared state
pub struct AppState {
    pub workflow: Arc<TransferWorkflow>,
    pub maintenance: Arc<MaintenanceService>,
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(
        workflow: Arc<TransferWorkflow>,
        maintenance: Arc<MaintenanceService>,
        db: Arc<Database>,
    ) -> Self {
        Self {
            workflow,
            maintenance,
            db,
        }
    }
}
