use serde::Serialize;

use crate::model::thresholds::ComplianceThresholds;
use crate::time::round_hours;

/// Hours per weekday for one person. `total_hours` is always the sum of the slots.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct WeeklySummary {
    hours_by_day: [f64; 7],
    total_hours: f64,
    weekly_compliant: bool,
}

impl WeeklySummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hours_by_day(&self) -> &[f64; 7] {
        &self.hours_by_day
    }

    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn weekly_compliant(&self) -> bool {
        self.weekly_compliant
    }

    /// Overwrites one day slot, then recomputes the total and the compliance flag.
    pub fn set_day(&mut self, slot: usize, hours: f64, thresholds: &ComplianceThresholds) {
        self.hours_by_day[slot] = hours;
        // slots hold 2-digit values, so rounding only strips float noise from the sum
        self.total_hours = round_hours(self.hours_by_day.iter().sum());
        self.weekly_compliant = thresholds.is_weekly_compliant(self.total_hours);
    }
}
