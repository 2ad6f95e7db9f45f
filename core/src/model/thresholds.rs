pub const DEFAULT_DAILY_MIN_HOURS: f64 = 3.0;
pub const DEFAULT_WEEKLY_MIN_HOURS: f64 = 28.0;

/// Minimum hours for a day and for a week to count as compliant. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceThresholds {
    pub daily_min_hours: f64,
    pub weekly_min_hours: f64,
}

impl Default for ComplianceThresholds {
    fn default() -> Self {
        Self {
            daily_min_hours: DEFAULT_DAILY_MIN_HOURS,
            weekly_min_hours: DEFAULT_WEEKLY_MIN_HOURS,
        }
    }
}

impl ComplianceThresholds {
    pub fn is_daily_compliant(&self, hours: f64) -> bool {
        hours >= self.daily_min_hours
    }

    pub fn is_weekly_compliant(&self, hours: f64) -> bool {
        hours >= self.weekly_min_hours
    }
}
