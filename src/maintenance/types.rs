//! Maintenance core types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core_types::UserId;

/// Authoritative lifecycle flag, independent of due-date math.
///
/// Set only by explicit user action, with one exception: every completion
/// event resets it to Scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StoredStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl StoredStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoredStatus::Scheduled => "Scheduled",
            StoredStatus::InProgress => "In Progress",
            StoredStatus::Completed => "Completed",
            StoredStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Scheduled" => Some(StoredStatus::Scheduled),
            "In Progress" => Some(StoredStatus::InProgress),
            "Completed" => Some(StoredStatus::Completed),
            "Cancelled" => Some(StoredStatus::Cancelled),
            _ => None,
        }
    }
}

/// Urgency label derived at read time. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LiveStatus {
    Overdue,
    #[serde(rename = "Due Soon")]
    DueSoon,
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl LiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiveStatus::Overdue => "Overdue",
            LiveStatus::DueSoon => "Due Soon",
            LiveStatus::Scheduled => "Scheduled",
            LiveStatus::InProgress => "In Progress",
            LiveStatus::Completed => "Completed",
            LiveStatus::Cancelled => "Cancelled",
        }
    }
}

/// Recurring upkeep task bound to one asset
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaintenanceSchedule {
    pub schedule_id: i64,
    pub schedule_code: String,
    pub asset_id: i64,
    pub task: String,
    /// Recurrence cadence in calendar days (> 0)
    pub frequency_days: i32,
    pub last_done: Option<NaiveDate>,
    pub next_due: NaiveDate,
    /// Days before next_due during which the task is flagged Due Soon
    pub alert_days: i32,
    pub status: StoredStatus,
}

/// Schedule plus its derived state, as returned by every read
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleView {
    pub schedule: MaintenanceSchedule,
    pub live_status: LiveStatus,
    /// next_due - today; negative when overdue
    pub days_until_due: i64,
}

/// Immutable completion record
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaintenanceLog {
    pub log_id: i64,
    pub schedule_id: i64,
    pub completed_on: NaiveDate,
    pub completed_by: UserId,
    #[schema(value_type = Option<f64>)]
    pub actual_hours: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub actual_cost: Option<Decimal>,
    pub parts_used: Option<String>,
    pub notes: Option<String>,
    /// The next-due date computed for this completion
    pub next_due: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Completion record before insertion
#[derive(Debug, Clone)]
pub struct NewMaintenanceLog {
    pub schedule_id: i64,
    pub completed_on: NaiveDate,
    pub completed_by: UserId,
    pub actual_hours: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub parts_used: Option<String>,
    pub notes: Option<String>,
    pub next_due: NaiveDate,
}

/// Completion event input.
///
/// Date and completer are required but arrive optional so the engine, not
/// the transport, owns the validation error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CompletionRequest {
    pub completed_on: Option<NaiveDate>,
    pub completed_by: Option<UserId>,
    #[schema(value_type = Option<f64>)]
    pub actual_hours: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub actual_cost: Option<Decimal>,
    pub parts_used: Option<String>,
    pub notes: Option<String>,
    /// Explicit next-due override; defaults to completed_on + frequency
    pub next_due: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_status_roundtrip() {
        for s in [
            StoredStatus::Scheduled,
            StoredStatus::InProgress,
            StoredStatus::Completed,
            StoredStatus::Cancelled,
        ] {
            assert_eq!(StoredStatus::from_str(s.as_str()), Some(s));
        }
        assert_eq!(StoredStatus::from_str("InProgress"), None);
    }

    #[test]
    fn test_serde_matches_stored_text() {
        let json = serde_json::to_string(&StoredStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let json = serde_json::to_string(&LiveStatus::DueSoon).unwrap();
        assert_eq!(json, "\"Due Soon\"");
    }
}
