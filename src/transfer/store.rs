//! Persistence contract the workflow is written against
//!
//! One implementation runs on PostgreSQL (`PgTransferStore`); tests inject
//! in-memory fakes. Every status-changing method is conditional on the
//! expected prior status so concurrent decisions cannot both win.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::state::{ApprovalStage, TransferStatus};
use super::types::{StageDecision, Transfer, TransferDraft};
use crate::asset::{Asset, AssetHistoryEntry, RelocationUpdate};
use crate::core_types::RecordRef;
use crate::error::CoreResult;
use crate::notify::NotificationPayload;

#[async_trait]
pub trait TransferStore: Send + Sync {
    /// Resolve an asset by surrogate id or human code.
    async fn find_asset(&self, reference: &RecordRef) -> CoreResult<Option<Asset>>;

    /// Resolve a transfer by surrogate id or human code.
    async fn find_transfer(&self, reference: &RecordRef) -> CoreResult<Option<Transfer>>;

    /// List transfers, newest first, optionally filtered by status.
    async fn list_transfers(&self, status: Option<TransferStatus>) -> CoreResult<Vec<Transfer>>;

    async fn transfer_code_exists(&self, code: &str) -> CoreResult<bool>;

    /// Insert a new Pending transfer with the asset's location snapshot.
    async fn insert_transfer(
        &self,
        draft: &TransferDraft,
        asset: &Asset,
        requested_on: NaiveDate,
    ) -> CoreResult<Transfer>;

    /// Record a stage decision and move the status, conditional on the
    /// stage's required status still holding at write time.
    ///
    /// Returns false when the condition failed (another decision won).
    async fn commit_stage_decision(
        &self,
        transfer_id: i64,
        stage: ApprovalStage,
        decision: &StageDecision,
        to: TransferStatus,
    ) -> CoreResult<bool>;

    /// The final-approval atomic bundle, one all-or-nothing unit:
    /// transfer row to Completed (conditional on OpsApproved) + asset
    /// relocation + history append + broadcast notification. Returns false
    /// on the status condition failing; any other failure leaves no
    /// partial effects.
    async fn commit_final_approval(
        &self,
        transfer_id: i64,
        decision: &StageDecision,
        relocation: &RelocationUpdate,
        history: &AssetHistoryEntry,
        broadcast: &NotificationPayload,
    ) -> CoreResult<bool>;

    /// Hard-delete, conditional on the status still being cancellable.
    async fn delete_cancellable(&self, transfer_id: i64) -> CoreResult<bool>;
}
