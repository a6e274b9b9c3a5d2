//! Maintenance status derivation engine
//!
//! Pure functions over a schedule and the current date. Nothing here reads
//! or writes storage; the service layer feeds in `Clock::today()` and the
//! store commits what `complete_task` computed.

use chrono::{Duration, NaiveDate};

use super::types::{
    CompletionRequest, LiveStatus, MaintenanceSchedule, NewMaintenanceLog, StoredStatus,
};
use crate::error::{CoreError, CoreResult};

/// Derived state of a schedule at a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveState {
    pub status: LiveStatus,
    /// next_due - today; negative when overdue
    pub days_until_due: i64,
}

/// Derive the live status and days-until-due.
///
/// Precedence, first match wins:
/// 1. stored Completed/Cancelled/In Progress pass through untouched
/// 2. next_due < today            -> Overdue
/// 3. next_due <= today + alert   -> Due Soon (due today counts here)
/// 4. otherwise                   -> Scheduled
pub fn derive_live_status(schedule: &MaintenanceSchedule, today: NaiveDate) -> LiveState {
    let days_until_due = (schedule.next_due - today).num_days();

    let status = match schedule.status {
        StoredStatus::Completed => LiveStatus::Completed,
        StoredStatus::Cancelled => LiveStatus::Cancelled,
        StoredStatus::InProgress => LiveStatus::InProgress,
        StoredStatus::Scheduled => {
            if schedule.next_due < today {
                LiveStatus::Overdue
            } else if schedule.next_due <= today + Duration::days(schedule.alert_days as i64) {
                LiveStatus::DueSoon
            } else {
                LiveStatus::Scheduled
            }
        }
    };

    LiveState {
        status,
        days_until_due,
    }
}

/// Compute the effect of a completion event.
///
/// Returns the updated schedule (last-done set, next occurrence computed,
/// stored status reset to Scheduled) and the log row to insert. Both must
/// be committed as one atomic unit by the store.
pub fn complete_task(
    schedule: &MaintenanceSchedule,
    request: &CompletionRequest,
) -> CoreResult<(MaintenanceSchedule, NewMaintenanceLog)> {
    let completed_on = request
        .completed_on
        .ok_or_else(|| CoreError::validation("completion date is required"))?;
    let completed_by = request
        .completed_by
        .ok_or_else(|| CoreError::validation("completed-by is required"))?;

    // Calendar-day arithmetic; an explicit override wins.
    let next_due = request
        .next_due
        .unwrap_or_else(|| completed_on + Duration::days(schedule.frequency_days as i64));

    let mut updated = schedule.clone();
    updated.last_done = Some(completed_on);
    updated.next_due = next_due;
    // Always reset, clearing any In Progress flag.
    updated.status = StoredStatus::Scheduled;

    let log = NewMaintenanceLog {
        schedule_id: schedule.schedule_id,
        completed_on,
        completed_by,
        actual_hours: request.actual_hours,
        actual_cost: request.actual_cost,
        parts_used: request.parts_used.clone(),
        notes: request.notes.clone(),
        next_due,
    };

    Ok((updated, log))
}

/// Alert-list rank: 1 = overdue, 2 = due soon, 3 = everything else.
///
/// Uses the raw date predicates with only stored Completed/Cancelled
/// excluded, so an overdue In Progress task still tops the list.
pub fn urgency_rank(schedule: &MaintenanceSchedule, today: NaiveDate) -> u8 {
    if matches!(
        schedule.status,
        StoredStatus::Completed | StoredStatus::Cancelled
    ) {
        return 3;
    }

    if schedule.next_due < today {
        1
    } else if schedule.next_due <= today + Duration::days(schedule.alert_days as i64) {
        2
    } else {
        3
    }
}

/// Order schedules for user-facing alert lists: rank ascending, then
/// next-due ascending within a rank.
pub fn order_for_alerts(schedules: &mut [MaintenanceSchedule], today: NaiveDate) {
    schedules.sort_by_key(|s| (urgency_rank(s, today), s.next_due));
}
