//! Maintenance scheduling
//!
//! Stored schedules carry only dates and a lifecycle flag; the user-visible
//! urgency ("Overdue", "Due Soon", ...) is derived at read time by
//! [`status`]. A completion event recomputes the next occurrence and writes
//! the log and the schedule update as one atomic unit.

pub mod db;
pub mod service;
pub mod status;
pub mod store;
pub mod types;

pub use db::PgMaintenanceStore;
pub use service::MaintenanceService;
pub use status::{complete_task, derive_live_status, order_for_alerts, urgency_rank, LiveState};
pub use store::MaintenanceStore;
pub use types::{
    CompletionRequest, LiveStatus, MaintenanceLog, MaintenanceSchedule, NewMaintenanceLog,
    ScheduleView, StoredStatus,
};
