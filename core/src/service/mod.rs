pub mod aggregator;
pub mod dto;
pub mod notification;
pub mod recorder;
pub mod tracker;
