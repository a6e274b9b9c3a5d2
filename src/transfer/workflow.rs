//! Two-stage transfer approval workflow
//!
//! Orchestrates submit / stage decisions / cancel against the persisted
//! state. Every decision is guarded twice: once at load (to name the actual
//! status in the conflict) and once at write time (conditional update), so
//! of two concurrent decisions exactly one wins.

use std::sync::Arc;

use tracing::{info, warn};

use super::relocation::AssetRelocationApplier;
use super::state::{ApprovalStage, DecisionAction, TransferStatus};
use super::store::TransferStore;
use super::types::{StageDecision, Transfer, TransferDraft};
use crate::clock::Clock;
use crate::core_types::{RecordRef, UserId};
use crate::error::{CoreError, CoreResult};
use crate::notify::{NotificationEmitter, NotificationPayload, Role};

pub struct TransferWorkflow {
    store: Arc<dyn TransferStore>,
    notifier: Arc<dyn NotificationEmitter>,
    clock: Arc<dyn Clock>,
}

impl TransferWorkflow {
    pub fn new(
        store: Arc<dyn TransferStore>,
        notifier: Arc<dyn NotificationEmitter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            notifier,
            clock,
        }
    }

    /// Create a new transfer request in Pending state.
    ///
    /// Snapshots the asset's current location onto the transfer and notifies
    /// every Operations Manager.
    pub async fn submit(&self, draft: TransferDraft) -> CoreResult<Transfer> {
        if draft.transfer_code.trim().is_empty() {
            return Err(CoreError::validation("transfer code is required"));
        }
        if draft.destination.trim().is_empty() {
            return Err(CoreError::validation("destination is required"));
        }
        if draft.reason.trim().is_empty() {
            return Err(CoreError::validation("reason is required"));
        }

        let requested_on = self.clock.today();
        if let Some(required_by) = draft.required_by {
            if required_by < requested_on {
                return Err(CoreError::validation(
                    "required-by date must not precede the request date",
                ));
            }
        }

        let asset = self
            .store
            .find_asset(&draft.asset)
            .await?
            .ok_or_else(|| CoreError::not_found("asset", &draft.asset))?;

        if self.store.transfer_code_exists(&draft.transfer_code).await? {
            return Err(CoreError::validation(format!(
                "transfer code {} already in use",
                draft.transfer_code
            )));
        }

        let transfer = self
            .store
            .insert_transfer(&draft, &asset, requested_on)
            .await?;

        info!(
            transfer_code = %transfer.transfer_code,
            asset_code = %asset.asset_code,
            destination = %transfer.destination,
            "Transfer submitted"
        );

        self.emit_role(
            Role::OperationsManager,
            NotificationPayload::transfer_submitted(&transfer),
        )
        .await;

        Ok(transfer)
    }

    /// Stage-1 (operations manager) decision. Requires status Pending.
    pub async fn approve_ops(
        &self,
        reference: &RecordRef,
        action: DecisionAction,
        decided_by: UserId,
        comment: &str,
    ) -> CoreResult<Transfer> {
        self.decide(ApprovalStage::Ops, reference, action, decided_by, comment)
            .await
    }

    /// Stage-2 (asset manager) decision. Requires status OpsApproved.
    ///
    /// On approve the store runs the atomic bundle: transfer row + asset
    /// relocation + history entry + broadcast, all-or-nothing.
    pub async fn approve_mgr(
        &self,
        reference: &RecordRef,
        action: DecisionAction,
        decided_by: UserId,
        comment: &str,
    ) -> CoreResult<Transfer> {
        self.decide(ApprovalStage::Mgr, reference, action, decided_by, comment)
            .await
    }

    async fn decide(
        &self,
        stage: ApprovalStage,
        reference: &RecordRef,
        action: DecisionAction,
        decided_by: UserId,
        comment: &str,
    ) -> CoreResult<Transfer> {
        if comment.trim().is_empty() {
            return Err(CoreError::validation("a decision comment is required"));
        }

        let transfer = self.load(reference).await?;
        let expected = stage.required_status();

        let to = transfer
            .status
            .next(stage, action)
            .ok_or_else(|| conflict_wrong_status(&transfer.transfer_code, transfer.status, expected))?;

        let decision = StageDecision {
            decided_by,
            action,
            decided_on: self.clock.today(),
            comment: comment.trim().to_string(),
        };

        let committed = if stage == ApprovalStage::Mgr && action == DecisionAction::Approve {
            let (update, history) = AssetRelocationApplier::plan(&transfer, decided_by);
            let broadcast = NotificationPayload::transfer_completed(&transfer);
            self.store
                .commit_final_approval(
                    transfer.transfer_id,
                    &decision,
                    &update,
                    &history,
                    &broadcast,
                )
                .await?
        } else {
            self.store
                .commit_stage_decision(transfer.transfer_id, stage, &decision, to)
                .await?
        };

        if !committed {
            // A concurrent decision moved the transfer first; report the
            // status as it stands now.
            let current = self.load(reference).await?;
            return Err(conflict_wrong_status(
                &current.transfer_code,
                current.status,
                expected,
            ));
        }

        info!(
            transfer_code = %transfer.transfer_code,
            stage = stage.as_str(),
            action = %action,
            status = %to,
            "Transfer decision recorded"
        );

        if stage == ApprovalStage::Ops && action == DecisionAction::Approve {
            let payload = NotificationPayload::transfer_ops_approved(&transfer);
            self.emit_role(Role::Admin, payload.clone()).await;
            self.emit_role(Role::AssetManager, payload).await;
        }

        self.load(reference).await
    }

    /// Cancel (hard-delete) a transfer. Allowed from Pending or OnHold only.
    pub async fn cancel(&self, reference: &RecordRef) -> CoreResult<()> {
        let transfer = self.load(reference).await?;

        if !transfer.status.is_cancellable() {
            return Err(CoreError::conflict(format!(
                "transfer {} is {} and cannot be cancelled",
                transfer.transfer_code, transfer.status
            )));
        }

        if !self.store.delete_cancellable(transfer.transfer_id).await? {
            // Lost the race: either a decision moved it, or another cancel
            // already removed it.
            let current = self.load(reference).await?;
            return Err(CoreError::conflict(format!(
                "transfer {} is {} and cannot be cancelled",
                current.transfer_code, current.status
            )));
        }

        info!(transfer_code = %transfer.transfer_code, "Transfer cancelled");
        Ok(())
    }

    /// Fetch one transfer by id or code.
    pub async fn get(&self, reference: &RecordRef) -> CoreResult<Transfer> {
        self.load(reference).await
    }

    /// List transfers, optionally filtered by status.
    pub async fn list(&self, status: Option<TransferStatus>) -> CoreResult<Vec<Transfer>> {
        self.store.list_transfers(status).await
    }

    async fn load(&self, reference: &RecordRef) -> CoreResult<Transfer> {
        self.store
            .find_transfer(reference)
            .await?
            .ok_or_else(|| CoreError::not_found("transfer", reference))
    }

    async fn emit_role(&self, role: Role, payload: NotificationPayload) {
        // Fire-and-forget: a notification failure never fails the request.
        if let Err(e) = self.notifier.notify_role(role, &payload).await {
            warn!(role = %role, error = %e, "Notification emission failed");
        }
    }
}

fn conflict_wrong_status(
    code: &str,
    actual: TransferStatus,
    expected: TransferStatus,
) -> CoreError {
    CoreError::conflict(format!(
        "transfer {} is {}, expected {}",
        code, actual, expected
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_both_statuses() {
        let err = conflict_wrong_status(
            "TRF-1",
            TransferStatus::Pending,
            TransferStatus::OpsApproved,
        );
        let msg = err.to_string();
        assert!(msg.contains("TRF-1"));
        assert!(msg.contains("Pending"));
        assert!(msg.contains("OpsApproved"));
        assert_eq!(err.http_status(), 409);
    }
}
