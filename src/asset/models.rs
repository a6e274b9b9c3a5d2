//! Asset model types

use serde::{Deserialize, Serialize};

use crate::core_types::UserId;

/// Asset record, as far as the core is concerned.
///
/// `location` is free text ("Rig 2", "Warehouse A"); `rig_id`/`company_id`
/// are the optional structured references a completed transfer may rewrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: i64,
    pub asset_code: String,
    pub name: String,
    pub location: String,
    pub rig_id: Option<i64>,
    pub company_id: Option<i64>,
}

/// Field-level asset update produced by a finally-approved transfer.
///
/// A `None` rig/company keeps the asset's existing link; relocation never
/// clears a reference the destination does not replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationUpdate {
    pub asset_id: i64,
    pub location: String,
    pub rig_id: Option<i64>,
    pub company_id: Option<i64>,
}

/// Kind of audit entry on an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetHistoryAction {
    Created,
    Updated,
    Relocated,
}

impl AssetHistoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetHistoryAction::Created => "Created",
            AssetHistoryAction::Updated => "Updated",
            AssetHistoryAction::Relocated => "Relocated",
        }
    }
}

/// Append-only audit entry. Never mutated once written.
#[derive(Debug, Clone)]
pub struct AssetHistoryEntry {
    pub asset_id: i64,
    pub action: AssetHistoryAction,
    pub detail: String,
    pub recorded_by: UserId,
}
