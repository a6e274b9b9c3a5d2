//! Maintenance read/complete orchestration
//!
//! Reads pass stored schedules through the status engine before returning;
//! nothing is written on a read. Completion recomputes the next occurrence
//! and hands the store one atomic unit to commit.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::status::{complete_task, derive_live_status, order_for_alerts};
use super::store::MaintenanceStore;
use super::types::{CompletionRequest, MaintenanceLog, MaintenanceSchedule, ScheduleView};
use crate::clock::Clock;
use crate::core_types::RecordRef;
use crate::error::{CoreError, CoreResult};

pub struct MaintenanceService {
    store: Arc<dyn MaintenanceStore>,
    clock: Arc<dyn Clock>,
}

impl MaintenanceService {
    pub fn new(store: Arc<dyn MaintenanceStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// List all schedules in alert order, with derived state attached.
    pub async fn list(&self) -> CoreResult<Vec<ScheduleView>> {
        let mut schedules = self.store.list_schedules().await?;
        let today = self.clock.today();

        order_for_alerts(&mut schedules, today);
        Ok(schedules.into_iter().map(|s| view(s, today)).collect())
    }

    /// Fetch one schedule by id or code, with derived state attached.
    pub async fn get(&self, reference: &RecordRef) -> CoreResult<ScheduleView> {
        let schedule = self.load(reference).await?;
        Ok(view(schedule, self.clock.today()))
    }

    /// Record a completion event: writes the immutable log and rolls the
    /// schedule forward to its next occurrence in one atomic unit.
    pub async fn complete(
        &self,
        reference: &RecordRef,
        request: CompletionRequest,
    ) -> CoreResult<(ScheduleView, MaintenanceLog)> {
        let schedule = self.load(reference).await?;
        let (updated, new_log) = complete_task(&schedule, &request)?;
        let log = self.store.commit_completion(&updated, &new_log).await?;

        info!(
            schedule_code = %updated.schedule_code,
            completed_on = %log.completed_on,
            next_due = %updated.next_due,
            "Maintenance completion recorded"
        );

        Ok((view(updated, self.clock.today()), log))
    }

    async fn load(&self, reference: &RecordRef) -> CoreResult<MaintenanceSchedule> {
        self.store
            .find_schedule(reference)
            .await?
            .ok_or_else(|| CoreError::not_found("maintenance schedule", reference))
    }
}

fn view(schedule: MaintenanceSchedule, today: NaiveDate) -> ScheduleView {
    let live = derive_live_status(&schedule, today);
    ScheduleView {
        schedule,
        live_status: live.status,
        days_until_due: live.days_until_due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::maintenance::types::{LiveStatus, NewMaintenanceLog, StoredStatus};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory store: schedules keyed by position, logs appended.
    struct MemMaintenanceStore {
        schedules: Mutex<Vec<MaintenanceSchedule>>,
        logs: Mutex<Vec<MaintenanceLog>>,
        fail_commit: bool,
    }

    impl MemMaintenanceStore {
        fn new(schedules: Vec<MaintenanceSchedule>) -> Self {
            Self {
                schedules: Mutex::new(schedules),
                logs: Mutex::new(Vec::new()),
                fail_commit: false,
            }
        }
    }

    #[async_trait]
    impl MaintenanceStore for MemMaintenanceStore {
        async fn find_schedule(
            &self,
            reference: &RecordRef,
        ) -> CoreResult<Option<MaintenanceSchedule>> {
            let schedules = self.schedules.lock().unwrap();
            Ok(schedules
                .iter()
                .find(|s| {
                    s.schedule_id == reference.id_candidate()
                        || s.schedule_code == reference.as_str()
                })
                .cloned())
        }

        async fn list_schedules(&self) -> CoreResult<Vec<MaintenanceSchedule>> {
            Ok(self.schedules.lock().unwrap().clone())
        }

        async fn commit_completion(
            &self,
            updated: &MaintenanceSchedule,
            log: &NewMaintenanceLog,
        ) -> CoreResult<MaintenanceLog> {
            if self.fail_commit {
                return Err(CoreError::Persistence("induced commit failure".into()));
            }

            let mut schedules = self.schedules.lock().unwrap();
            let slot = schedules
                .iter_mut()
                .find(|s| s.schedule_id == updated.schedule_id)
                .expect("schedule exists");
            *slot = updated.clone();

            let mut logs = self.logs.lock().unwrap();
            let stored = MaintenanceLog {
                log_id: logs.len() as i64 + 1,
                schedule_id: log.schedule_id,
                completed_on: log.completed_on,
                completed_by: log.completed_by,
                actual_hours: log.actual_hours,
                actual_cost: log.actual_cost,
                parts_used: log.parts_used.clone(),
                notes: log.notes.clone(),
                next_due: log.next_due,
                created_at: Utc::now(),
            };
            logs.push(stored.clone());
            Ok(stored)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(id: i64, code: &str, next_due: NaiveDate) -> MaintenanceSchedule {
        MaintenanceSchedule {
            schedule_id: id,
            schedule_code: code.to_string(),
            asset_id: 42,
            task: "Inspect mud pump liners".to_string(),
            frequency_days: 30,
            last_done: Some(date(2024, 12, 20)),
            next_due,
            alert_days: 14,
            status: StoredStatus::Scheduled,
        }
    }

    fn service(schedules: Vec<MaintenanceSchedule>, today: NaiveDate) -> MaintenanceService {
        MaintenanceService::new(
            Arc::new(MemMaintenanceStore::new(schedules)),
            Arc::new(FixedClock(today)),
        )
    }

    #[tokio::test]
    async fn test_list_is_alert_ordered_with_derived_state() {
        let today = date(2025, 1, 20);
        let svc = service(
            vec![
                schedule(1, "MNT-001", date(2025, 6, 1)),
                schedule(2, "MNT-002", date(2025, 1, 10)),
                schedule(3, "MNT-003", date(2025, 1, 25)),
            ],
            today,
        );

        let views = svc.list().await.unwrap();
        let codes: Vec<&str> = views
            .iter()
            .map(|v| v.schedule.schedule_code.as_str())
            .collect();
        assert_eq!(codes, vec!["MNT-002", "MNT-003", "MNT-001"]);

        assert_eq!(views[0].live_status, LiveStatus::Overdue);
        assert_eq!(views[0].days_until_due, -10);
        assert_eq!(views[1].live_status, LiveStatus::DueSoon);
        assert_eq!(views[2].live_status, LiveStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_get_by_id_and_code() {
        let today = date(2025, 1, 20);
        let svc = service(vec![schedule(7, "MNT-007", date(2025, 2, 1))], today);

        let by_code = svc.get(&RecordRef::new("MNT-007")).await.unwrap();
        let by_id = svc.get(&RecordRef::from(7_i64)).await.unwrap();
        assert_eq!(by_code.schedule.schedule_id, by_id.schedule.schedule_id);

        let missing = svc.get(&RecordRef::new("MNT-404")).await;
        assert!(matches!(missing, Err(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_complete_rolls_schedule_forward() {
        let today = date(2025, 1, 19);
        let svc = service(vec![schedule(1, "MNT-001", date(2025, 1, 19))], today);

        let request = CompletionRequest {
            completed_on: Some(date(2025, 1, 19)),
            completed_by: Some(1001),
            ..Default::default()
        };

        let (view, log) = svc.complete(&RecordRef::new("MNT-001"), request).await.unwrap();
        assert_eq!(view.schedule.next_due, date(2025, 2, 18));
        assert_eq!(view.schedule.last_done, Some(date(2025, 1, 19)));
        assert_eq!(view.schedule.status, StoredStatus::Scheduled);
        assert_eq!(log.next_due, date(2025, 2, 18));

        // The stored schedule reflects the commit
        let reloaded = svc.get(&RecordRef::new("MNT-001")).await.unwrap();
        assert_eq!(reloaded.schedule.next_due, date(2025, 2, 18));
    }

    #[tokio::test]
    async fn test_complete_without_date_is_validation_error() {
        let today = date(2025, 1, 19);
        let svc = service(vec![schedule(1, "MNT-001", date(2025, 1, 19))], today);

        let request = CompletionRequest {
            completed_by: Some(1001),
            ..Default::default()
        };
        let result = svc.complete(&RecordRef::new("MNT-001"), request).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));

        // Nothing committed
        let reloaded = svc.get(&RecordRef::new("MNT-001")).await.unwrap();
        assert_eq!(reloaded.schedule.next_due, date(2025, 1, 19));
        assert_eq!(reloaded.schedule.last_done, Some(date(2024, 12, 20)));
    }
}
