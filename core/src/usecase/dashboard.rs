use serde::Serialize;

use crate::model::notification::Notification;
use crate::service::dto::{BarPoint, ComplianceBreakdown, DailyRow, WeeklyRow};
use crate::service::tracker::AttendanceTracker;

/// Everything the output surfaces show, read from one tracker state.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub daily_rows: Vec<DailyRow>,
    pub weekly_rows: Vec<WeeklyRow>,
    pub notification: Notification,
    pub weekly_hours: Vec<BarPoint>,
    pub compliance: ComplianceBreakdown,
}

impl Dashboard {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct DashboardUseCase<'a> {
    tracker: &'a AttendanceTracker,
}

impl<'a> DashboardUseCase<'a> {
    pub fn new(tracker: &'a AttendanceTracker) -> Self {
        Self { tracker }
    }

    pub fn build(&self) -> Dashboard {
        let daily_rows = self.tracker.entries().iter().map(DailyRow::from).collect();

        let mut weekly_rows = Vec::new();
        let mut weekly_hours = Vec::new();
        let mut compliance = ComplianceBreakdown::default();

        for (person, summary) in self.tracker.summaries().iter() {
            weekly_rows.push(WeeklyRow::new(person, summary));
            weekly_hours.push(BarPoint {
                person: person.to_string(),
                total_hours: summary.total_hours(),
            });
            if summary.weekly_compliant() {
                compliance.compliant += 1;
            } else {
                compliance.non_compliant += 1;
            }
        }

        Dashboard {
            daily_rows,
            weekly_rows,
            notification: self.tracker.notification(),
            weekly_hours,
            compliance,
        }
    }
}
