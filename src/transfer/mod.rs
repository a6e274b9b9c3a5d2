//! Transfer approval workflow
//!
//! A relocation request passes two independent, ordered human decisions
//! before the asset record is touched. Stage 1 is the operations manager,
//! stage 2 the asset manager; only the final approval mutates the asset,
//! and it does so inside one atomic bundle.

pub mod db;
pub mod relocation;
pub mod state;
pub mod store;
pub mod types;
pub mod workflow;

pub use db::PgTransferStore;
pub use relocation::AssetRelocationApplier;
pub use state::{ApprovalStage, DecisionAction, TransferStatus};
pub use store::TransferStore;
pub use types::{Priority, StageDecision, Transfer, TransferDraft, TransferKind};
pub use workflow::TransferWorkflow;
