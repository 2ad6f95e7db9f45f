use crate::model::entry::{DailyEntry, Submission};
use crate::model::notification::Notification;
use crate::model::summary::WeeklySummary;
use crate::model::thresholds::ComplianceThresholds;
use crate::service::aggregator::WeeklyAggregator;
use crate::service::notification::derive_notification;
use crate::service::recorder::EntryRecorder;

/// Result of one submission: the recorded entry and the person's updated week.
#[derive(Debug)]
pub struct Recorded<'a> {
    pub entry: &'a DailyEntry,
    pub summary: &'a WeeklySummary,
}

/// The whole session state: entry log plus weekly summaries. Lives as long as
/// the session and has no reset.
#[derive(Debug, Default)]
pub struct AttendanceTracker {
    thresholds: ComplianceThresholds,
    recorder: EntryRecorder,
    aggregator: WeeklyAggregator,
}

impl AttendanceTracker {
    pub fn new(thresholds: ComplianceThresholds) -> Self {
        Self {
            thresholds,
            recorder: EntryRecorder::new(),
            aggregator: WeeklyAggregator::new(),
        }
    }

    pub fn submit(&mut self, submission: Submission) -> Recorded<'_> {
        let entry = self.recorder.record_entry(submission, &self.thresholds);
        let summary = self.aggregator.apply_entry(entry, &self.thresholds);
        Recorded { entry, summary }
    }

    pub fn thresholds(&self) -> &ComplianceThresholds {
        &self.thresholds
    }

    pub fn entries(&self) -> &[DailyEntry] {
        self.recorder.entries()
    }

    pub fn summaries(&self) -> &WeeklyAggregator {
        &self.aggregator
    }

    pub fn notification(&self) -> Notification {
        derive_notification(&self.aggregator)
    }
}
