//! Relocation planning for finally-approved transfers
//!
//! Reached only from the approve branch of the stage-2 decision. The plan is
//! pure; the transfer store executes it inside the approval transaction.

use crate::asset::{AssetHistoryAction, AssetHistoryEntry, RelocationUpdate};
use crate::core_types::UserId;

use super::types::Transfer;

pub struct AssetRelocationApplier;

impl AssetRelocationApplier {
    /// Compute the exact asset mutation and audit entry for an approved
    /// transfer.
    ///
    /// Destination rig/company left as None keep the asset's existing
    /// links; the update never clears a reference.
    pub fn plan(transfer: &Transfer, decided_by: UserId) -> (RelocationUpdate, AssetHistoryEntry) {
        let update = RelocationUpdate {
            asset_id: transfer.asset_id,
            location: transfer.destination.clone(),
            rig_id: transfer.dest_rig_id,
            company_id: transfer.dest_company_id,
        };

        let entry = AssetHistoryEntry {
            asset_id: transfer.asset_id,
            action: AssetHistoryAction::Relocated,
            detail: format!(
                "Relocated from {} to {} (transfer {})",
                transfer.from_location, transfer.destination, transfer.transfer_code
            ),
            recorded_by: decided_by,
        };

        (update, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::state::TransferStatus;
    use crate::transfer::types::{Priority, TransferKind};
    use chrono::{NaiveDate, Utc};

    fn transfer_to(destination: &str, dest_rig_id: Option<i64>) -> Transfer {
        Transfer {
            transfer_id: 7,
            transfer_code: "TRF-2025-007".to_string(),
            asset_id: 42,
            from_location: "Rig 2".to_string(),
            destination: destination.to_string(),
            dest_rig_id,
            dest_company_id: None,
            priority: Priority::Normal,
            transfer_type: TransferKind::RigToRig,
            reason: "scheduled move".to_string(),
            instructions: None,
            requested_by: 1001,
            requested_on: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            required_by: None,
            status: TransferStatus::OpsApproved,
            ops_decision: None,
            mgr_decision: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_plan_with_destination_rig() {
        let transfer = transfer_to("Rig 5", Some(5));
        let (update, entry) = AssetRelocationApplier::plan(&transfer, 2002);

        assert_eq!(update.asset_id, 42);
        assert_eq!(update.location, "Rig 5");
        assert_eq!(update.rig_id, Some(5));
        assert_eq!(update.company_id, None);

        assert_eq!(entry.asset_id, 42);
        assert_eq!(entry.action, AssetHistoryAction::Relocated);
        assert_eq!(entry.recorded_by, 2002);
        assert!(entry.detail.contains("Rig 2"));
        assert!(entry.detail.contains("Rig 5"));
        assert!(entry.detail.contains("TRF-2025-007"));
    }

    #[test]
    fn test_plan_without_structured_refs_keeps_links() {
        let transfer = transfer_to("Warehouse A", None);
        let (update, _) = AssetRelocationApplier::plan(&transfer, 2002);

        // None means "leave the existing rig/company link alone"
        assert_eq!(update.rig_id, None);
        assert_eq!(update.company_id, None);
        assert_eq!(update.location, "Warehouse A");
    }
}
