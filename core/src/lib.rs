pub mod error;
pub mod input;
pub mod model;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::SubmissionError;
pub use model::entry::{DailyEntry, Submission};
pub use model::notification::Notification;
pub use model::summary::WeeklySummary;
pub use model::thresholds::ComplianceThresholds;
pub use service::aggregator::WeeklyAggregator;
pub use service::notification::derive_notification;
pub use service::recorder::EntryRecorder;
pub use service::tracker::{AttendanceTracker, Recorded};
pub use time::{day_slot, elapsed_hours, DAY_LABELS};
pub use usecase::dashboard::{Dashboard, DashboardUseCase};
