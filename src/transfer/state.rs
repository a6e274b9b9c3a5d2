//! Transfer approval state machine
//!
//! Statuses are stored in PostgreSQL as the exact strings below; existing
//! rows stay readable across versions. Transitions go through the explicit
//! table in [`TransferStatus::next`] — never string comparison at call
//! sites.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authoritative workflow state of a transfer
///
/// Pending is initial. Completed and Rejected are terminal. OnHold has no
/// outgoing decision transition; cancellation is its only exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TransferStatus {
    /// Awaiting the stage-1 (operations) decision
    Pending,
    /// Stage-1 approved, awaiting the stage-2 (asset manager) decision
    OpsApproved,
    /// Terminal: both stages approved, asset relocated
    Completed,
    /// Terminal: rejected at either stage
    Rejected,
    /// Parked at either stage; no resume path exists
    OnHold,
}

/// Decision taken at an approval stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    Approve,
    Reject,
    Hold,
}

/// The two sequential human decision points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStage {
    /// Stage 1: operations manager
    Ops,
    /// Stage 2: asset manager
    Mgr,
}

impl TransferStatus {
    /// Transition table: (current status, stage, action) -> next status.
    ///
    /// Returns None when the transfer is not in the stage's required state,
    /// which callers surface as a conflict naming the actual status.
    pub fn next(self, stage: ApprovalStage, action: DecisionAction) -> Option<TransferStatus> {
        match (self, stage, action) {
            (Self::Pending, ApprovalStage::Ops, DecisionAction::Approve) => Some(Self::OpsApproved),
            (Self::Pending, ApprovalStage::Ops, DecisionAction::Reject) => Some(Self::Rejected),
            (Self::Pending, ApprovalStage::Ops, DecisionAction::Hold) => Some(Self::OnHold),
            (Self::OpsApproved, ApprovalStage::Mgr, DecisionAction::Approve) => {
                Some(Self::Completed)
            }
            (Self::OpsApproved, ApprovalStage::Mgr, DecisionAction::Reject) => Some(Self::Rejected),
            (Self::OpsApproved, ApprovalStage::Mgr, DecisionAction::Hold) => Some(Self::OnHold),
            _ => None,
        }
    }

    /// Check if this is a terminal state (the record is never mutated again)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Completed | TransferStatus::Rejected)
    }

    /// Check if cancellation (hard delete) is allowed from this state
    #[inline]
    pub fn is_cancellable(&self) -> bool {
        matches!(self, TransferStatus::Pending | TransferStatus::OnHold)
    }

    /// The stored status text
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::OpsApproved => "OpsApproved",
            TransferStatus::Completed => "Completed",
            TransferStatus::Rejected => "Rejected",
            TransferStatus::OnHold => "OnHold",
        }
    }

    /// Convert from the stored status text
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(TransferStatus::Pending),
            "OpsApproved" => Some(TransferStatus::OpsApproved),
            "Completed" => Some(TransferStatus::Completed),
            "Rejected" => Some(TransferStatus::Rejected),
            "OnHold" => Some(TransferStatus::OnHold),
            _ => None,
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DecisionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionAction::Approve => "approve",
            DecisionAction::Reject => "reject",
            DecisionAction::Hold => "hold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "approve" => Some(DecisionAction::Approve),
            "reject" => Some(DecisionAction::Reject),
            "hold" => Some(DecisionAction::Hold),
            _ => None,
        }
    }
}

impl fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ApprovalStage {
    /// The only status a stage's decision may act on
    pub fn required_status(self) -> TransferStatus {
        match self {
            ApprovalStage::Ops => TransferStatus::Pending,
            ApprovalStage::Mgr => TransferStatus::OpsApproved,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStage::Ops => "operations",
            ApprovalStage::Mgr => "asset-manager",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [TransferStatus; 5] = [
        TransferStatus::Pending,
        TransferStatus::OpsApproved,
        TransferStatus::Completed,
        TransferStatus::Rejected,
        TransferStatus::OnHold,
    ];

    const ALL_ACTIONS: [DecisionAction; 3] = [
        DecisionAction::Approve,
        DecisionAction::Reject,
        DecisionAction::Hold,
    ];

    #[test]
    fn test_ops_transitions_from_pending() {
        let s = TransferStatus::Pending;
        assert_eq!(
            s.next(ApprovalStage::Ops, DecisionAction::Approve),
            Some(TransferStatus::OpsApproved)
        );
        assert_eq!(
            s.next(ApprovalStage::Ops, DecisionAction::Reject),
            Some(TransferStatus::Rejected)
        );
        assert_eq!(
            s.next(ApprovalStage::Ops, DecisionAction::Hold),
            Some(TransferStatus::OnHold)
        );
    }

    #[test]
    fn test_mgr_transitions_from_ops_approved() {
        let s = TransferStatus::OpsApproved;
        assert_eq!(
            s.next(ApprovalStage::Mgr, DecisionAction::Approve),
            Some(TransferStatus::Completed)
        );
        assert_eq!(
            s.next(ApprovalStage::Mgr, DecisionAction::Reject),
            Some(TransferStatus::Rejected)
        );
        assert_eq!(
            s.next(ApprovalStage::Mgr, DecisionAction::Hold),
            Some(TransferStatus::OnHold)
        );
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        // Ops acts on Pending only, Mgr on OpsApproved only; everything
        // else must be refused for every action.
        for status in ALL_STATUSES {
            for action in ALL_ACTIONS {
                if status != TransferStatus::Pending {
                    assert_eq!(status.next(ApprovalStage::Ops, action), None);
                }
                if status != TransferStatus::OpsApproved {
                    assert_eq!(status.next(ApprovalStage::Mgr, action), None);
                }
            }
        }
    }

    #[test]
    fn test_on_hold_has_no_outgoing_transition() {
        for action in ALL_ACTIONS {
            assert_eq!(TransferStatus::OnHold.next(ApprovalStage::Ops, action), None);
            assert_eq!(TransferStatus::OnHold.next(ApprovalStage::Mgr, action), None);
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(TransferStatus::Completed.is_terminal());
        assert!(TransferStatus::Rejected.is_terminal());

        assert!(!TransferStatus::Pending.is_terminal());
        assert!(!TransferStatus::OpsApproved.is_terminal());
        assert!(!TransferStatus::OnHold.is_terminal());
    }

    #[test]
    fn test_cancellable_states() {
        assert!(TransferStatus::Pending.is_cancellable());
        assert!(TransferStatus::OnHold.is_cancellable());

        assert!(!TransferStatus::OpsApproved.is_cancellable());
        assert!(!TransferStatus::Completed.is_cancellable());
        assert!(!TransferStatus::Rejected.is_cancellable());
    }

    #[test]
    fn test_status_text_roundtrip() {
        for status in ALL_STATUSES {
            let recovered = TransferStatus::from_str(status.as_str()).unwrap();
            assert_eq!(status, recovered);
        }
        assert!(TransferStatus::from_str("pending").is_none());
        assert!(TransferStatus::from_str("").is_none());
    }

    #[test]
    fn test_action_text_roundtrip() {
        for action in ALL_ACTIONS {
            let recovered = DecisionAction::from_str(action.as_str()).unwrap();
            assert_eq!(action, recovered);
        }
        assert!(DecisionAction::from_str("Approve").is_none());
    }

    #[test]
    fn test_required_status() {
        assert_eq!(
            ApprovalStage::Ops.required_status(),
            TransferStatus::Pending
        );
        assert_eq!(
            ApprovalStage::Mgr.required_status(),
            TransferStatus::OpsApproved
        );
    }

    #[test]
    fn test_serde_status_strings() {
        // Stored and serialized forms must agree
        let json = serde_json::to_string(&TransferStatus::OpsApproved).unwrap();
        assert_eq!(json, "\"OpsApproved\"");

        let json = serde_json::to_string(&DecisionAction::Approve).unwrap();
        assert_eq!(json, "\"approve\"");
    }
}
