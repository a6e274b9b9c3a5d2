//! Transfer core types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::state::{DecisionAction, TransferStatus};
use crate::core_types::{RecordRef, UserId};

/// Urgency attached to a relocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Priority {
    Critical,
    High,
    Normal,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Normal => "Normal",
            Priority::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Priority::Critical),
            "High" => Some(Priority::High),
            "Normal" => Some(Priority::Normal),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Kind of relocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TransferKind {
    FieldToField,
    FieldToWarehouse,
    WarehouseToField,
    RigToRig,
    ForMaintenance,
    ForInspection,
    ReturnToOwner,
}

impl TransferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferKind::FieldToField => "field-to-field",
            TransferKind::FieldToWarehouse => "field-to-warehouse",
            TransferKind::WarehouseToField => "warehouse-to-field",
            TransferKind::RigToRig => "rig-to-rig",
            TransferKind::ForMaintenance => "for-maintenance",
            TransferKind::ForInspection => "for-inspection",
            TransferKind::ReturnToOwner => "return-to-owner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "field-to-field" => Some(TransferKind::FieldToField),
            "field-to-warehouse" => Some(TransferKind::FieldToWarehouse),
            "warehouse-to-field" => Some(TransferKind::WarehouseToField),
            "rig-to-rig" => Some(TransferKind::RigToRig),
            "for-maintenance" => Some(TransferKind::ForMaintenance),
            "for-inspection" => Some(TransferKind::ForInspection),
            "return-to-owner" => Some(TransferKind::ReturnToOwner),
            _ => None,
        }
    }
}

/// One stage's recorded decision
///
/// Populated exactly once, at the transition out of the stage's required
/// status; never cleared afterwards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StageDecision {
    pub decided_by: UserId,
    pub action: DecisionAction,
    pub decided_on: NaiveDate,
    pub comment: String,
}

/// Transfer record as persisted
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Transfer {
    pub transfer_id: i64,
    pub transfer_code: String,
    pub asset_id: i64,
    /// Asset location snapshotted at submission time
    pub from_location: String,
    pub destination: String,
    pub dest_rig_id: Option<i64>,
    pub dest_company_id: Option<i64>,
    pub priority: Priority,
    pub transfer_type: TransferKind,
    pub reason: String,
    pub instructions: Option<String>,
    pub requested_by: UserId,
    pub requested_on: NaiveDate,
    pub required_by: Option<NaiveDate>,
    pub status: TransferStatus,
    /// Stage-1 (operations) decision, set iff status has left Pending
    pub ops_decision: Option<StageDecision>,
    /// Stage-2 (asset manager) decision, set iff status was reached from
    /// OpsApproved
    pub mgr_decision: Option<StageDecision>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submission input, before the asset is resolved
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransferDraft {
    pub transfer_code: String,
    /// Asset reference: surrogate id or human code
    #[schema(value_type = String)]
    pub asset: RecordRef,
    pub destination: String,
    pub dest_rig_id: Option<i64>,
    pub dest_company_id: Option<i64>,
    pub priority: Priority,
    pub transfer_type: TransferKind,
    pub reason: String,
    pub instructions: Option<String>,
    pub requested_by: UserId,
    pub required_by: Option<NaiveDate>,
}
