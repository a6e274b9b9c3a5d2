//! Rigtrack - Rig Equipment Tracking Service
//!
//! Physical equipment moves between drilling rigs, warehouses and owners
//! only through a two-stage approval workflow; maintenance schedules derive
//! their urgency from stored dates at read time, never storing it.
//!
//! # Modules
//!
//! - [`core_types`] - Shared identifier types (`RecordRef`, `UserId`)
//! - [`error`] - Crate-wide error taxonomy
//! - [`clock`] - Injected current-date capability
//! - [`asset`] - Asset lookup, relocation update, history trail
//! - [`transfer`] - Two-stage transfer approval workflow
//! - [`maintenance`] - Schedules, status derivation, completion handling
//! - [`notify`] - Role directory and notification recording sink
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`gateway`] - HTTP API layer
//! - [`config`] / [`logging`] - Service configuration and tracing setup

pub mod asset;
pub mod clock;
pub mod config;
pub mod core_types;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod maintenance;
pub mod notify;
pub mod transfer;

// Convenient re-exports at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use core_types::{RecordRef, UserId};
pub use db::Database;
pub use error::{CoreError, CoreResult};
pub use maintenance::{MaintenanceService, MaintenanceStore, PgMaintenanceStore};
pub use notify::{NotificationEmitter, PgNotificationEmitter, PgRoleDirectory, Role, RoleDirectory};
pub use transfer::{
    DecisionAction, PgTransferStore, Transfer, TransferDraft, TransferStatus, TransferStore,
    TransferWorkflow,
};
