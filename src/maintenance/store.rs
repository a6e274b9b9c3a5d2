//! Persistence contract for maintenance schedules

use async_trait::async_trait;

use super::types::{MaintenanceLog, MaintenanceSchedule, NewMaintenanceLog};
use crate::core_types::RecordRef;
use crate::error::CoreResult;

#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    /// Resolve a schedule by surrogate id or human code.
    async fn find_schedule(&self, reference: &RecordRef) -> CoreResult<Option<MaintenanceSchedule>>;

    /// Load all schedules. Ordering is applied by the caller through the
    /// status engine's comparator.
    async fn list_schedules(&self) -> CoreResult<Vec<MaintenanceSchedule>>;

    /// Commit a completion: log insert + schedule update, one atomic unit.
    /// If either write fails, neither is applied.
    async fn commit_completion(
        &self,
        updated: &MaintenanceSchedule,
        log: &NewMaintenanceLog,
    ) -> CoreResult<MaintenanceLog>;
}
