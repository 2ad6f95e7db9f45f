use tracing::debug;

use crate::model::entry::{DailyEntry, Submission};
use crate::model::thresholds::ComplianceThresholds;
use crate::time::elapsed_hours;

/// Append-only log of recorded days, in submission order.
#[derive(Debug, Default)]
pub struct EntryRecorder {
    log: Vec<DailyEntry>,
}

impl EntryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_entry(
        &mut self,
        submission: Submission,
        thresholds: &ComplianceThresholds,
    ) -> &DailyEntry {
        let total_hours = elapsed_hours(submission.start, submission.end);
        let entry = DailyEntry {
            person: submission.person,
            date: submission.date,
            start_time: submission.start,
            end_time: submission.end,
            total_hours,
            daily_compliant: thresholds.is_daily_compliant(total_hours),
        };
        debug!(
            person = %entry.person,
            date = %entry.date,
            hours = entry.total_hours,
            compliant = entry.daily_compliant,
            "recorded entry"
        );

        self.log.push(entry);
        &self.log[self.log.len() - 1]
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use proptest::prelude::*;

    fn submission(person: &str, start: (u32, u32), end: (u32, u32)) -> Submission {
        Submission::new(
            person,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_record_full_day() {
        let mut recorder = EntryRecorder::new();
        let entry = recorder.record_entry(submission("Ana", (9, 0), (17, 30)), &ComplianceThresholds::default());
        assert_eq!(entry.total_hours, 8.5);
        assert!(entry.daily_compliant);
    }

    #[test]
    fn test_three_hours_is_compliant() {
        let mut recorder = EntryRecorder::new();
        let thresholds = ComplianceThresholds::default();
        assert!(recorder.record_entry(submission("Ana", (9, 0), (12, 0)), &thresholds).daily_compliant);
        assert!(!recorder.record_entry(submission("Ana", (9, 0), (11, 59)), &thresholds).daily_compliant);
    }

    #[test]
    fn test_end_before_start_is_kept_negative() {
        let mut recorder = EntryRecorder::new();
        let entry = recorder.record_entry(submission("Ben", (17, 0), (9, 0)), &ComplianceThresholds::default());
        assert_eq!(entry.total_hours, -8.0);
        assert!(!entry.daily_compliant);
    }

    #[test]
    fn test_log_keeps_submission_order() {
        let mut recorder = EntryRecorder::new();
        let thresholds = ComplianceThresholds::default();
        recorder.record_entry(submission("Ana", (9, 0), (10, 0)), &thresholds);
        recorder.record_entry(submission("Ben", (9, 0), (11, 0)), &thresholds);
        recorder.record_entry(submission("Ana", (9, 0), (12, 0)), &thresholds);

        let people: Vec<&str> = recorder.entries().iter().map(|e| e.person.as_str()).collect();
        assert_eq!(people, vec!["Ana", "Ben", "Ana"]);
    }

    proptest! {
        #[test]
        fn daily_mark_follows_threshold(start in 0u32..720, len in 0u32..720) {
            let end = start + len;
            let mut recorder = EntryRecorder::new();
            let entry = recorder.record_entry(
                submission("Ana", (start / 60, start % 60), (end / 60, end % 60)),
                &ComplianceThresholds::default(),
            );
            prop_assert_eq!(entry.daily_compliant, entry.total_hours >= 3.0);
            prop_assert!(entry.total_hours >= 0.0);
        }
    }
}
