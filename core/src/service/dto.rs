use serde::Serialize;

use crate::model::entry::DailyEntry;
use crate::model::summary::WeeklySummary;

/// One line of the chronological entry table.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub person: String,
    pub date: String, // YYYY-MM-DD
    pub start: String, // HH:MM
    pub end: String,
    pub hours: f64,
    pub daily_compliant: bool,
}

impl From<&DailyEntry> for DailyRow {
    fn from(entry: &DailyEntry) -> Self {
        Self {
            person: entry.person.clone(),
            date: entry.date.format("%Y-%m-%d").to_string(),
            start: entry.start_time.format("%H:%M").to_string(),
            end: entry.end_time.format("%H:%M").to_string(),
            hours: entry.total_hours,
            daily_compliant: entry.daily_compliant,
        }
    }
}

/// One line of the per-person weekly table; `hours_by_day` starts on Sunday.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeeklyRow {
    pub person: String,
    pub hours_by_day: [f64; 7],
    pub total_hours: f64,
    pub weekly_compliant: bool,
}

impl WeeklyRow {
    pub fn new(person: &str, summary: &WeeklySummary) -> Self {
        Self {
            person: person.to_string(),
            hours_by_day: *summary.hours_by_day(),
            total_hours: summary.total_hours(),
            weekly_compliant: summary.weekly_compliant(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub person: String,
    pub total_hours: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplianceBreakdown {
    pub compliant: usize,
    pub non_compliant: usize,
}

impl ComplianceBreakdown {
    pub fn total(&self) -> usize {
        self.compliant + self.non_compliant
    }

    /// Share of compliant persons; 0 when nobody is tracked.
    pub fn compliant_ratio(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.compliant as f64 / self.total() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_daily_row_formats_clock_values() {
        let entry = DailyEntry {
            person: "Ana".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            total_hours: 8.42,
            daily_compliant: true,
        };
        let row = DailyRow::from(&entry);
        assert_eq!(row.date, "2024-03-04");
        assert_eq!(row.start, "09:05");
        assert_eq!(row.end, "17:30");
    }

    #[test]
    fn test_compliant_ratio() {
        assert_eq!(ComplianceBreakdown::default().compliant_ratio(), 0.0);
        let breakdown = ComplianceBreakdown { compliant: 1, non_compliant: 3 };
        assert_eq!(breakdown.total(), 4);
        assert_eq!(breakdown.compliant_ratio(), 0.25);
    }
}
