pub mod entry;
pub mod notification;
pub mod summary;
pub mod thresholds;
