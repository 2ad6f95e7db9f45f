use std::collections::HashMap;

use tracing::debug;

use crate::model::entry::DailyEntry;
use crate::model::summary::WeeklySummary;
use crate::model::thresholds::ComplianceThresholds;
use crate::time::day_slot;

/// Per-person weekly summaries, iterated in order of first appearance.
#[derive(Debug, Default)]
pub struct WeeklyAggregator {
    order: Vec<String>,
    summaries: HashMap<String, WeeklySummary>,
}

impl WeeklyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the entry's hours in its weekday slot. A later entry for the same
    /// weekday replaces the earlier value instead of adding to it.
    pub fn apply_entry(
        &mut self,
        entry: &DailyEntry,
        thresholds: &ComplianceThresholds,
    ) -> &WeeklySummary {
        let slot = day_slot(entry.date);

        if !self.summaries.contains_key(&entry.person) {
            self.order.push(entry.person.clone());
        }
        let summary = self.summaries.entry(entry.person.clone()).or_default();
        summary.set_day(slot, entry.total_hours, thresholds);

        debug!(
            person = %entry.person,
            slot,
            total = summary.total_hours(),
            compliant = summary.weekly_compliant(),
            "updated weekly summary"
        );
        summary
    }

    pub fn get(&self, person: &str) -> Option<&WeeklySummary> {
        self.summaries.get(person)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeeklySummary)> + '_ {
        self.order
            .iter()
            .filter_map(|person| self.summaries.get(person).map(|s| (person.as_str(), s)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveTime};
    use proptest::prelude::*;

    // 2024-03-04 is a Monday
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn entry(person: &str, date: NaiveDate, hours: f64) -> DailyEntry {
        DailyEntry {
            person: person.to_string(),
            date,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            total_hours: hours,
            daily_compliant: hours >= 3.0,
        }
    }

    #[test]
    fn test_first_entry_creates_summary() {
        let mut aggregator = WeeklyAggregator::new();
        let summary = aggregator.apply_entry(&entry("Ana", monday(), 8.5), &ComplianceThresholds::default());

        assert_eq!(summary.hours_by_day(), &[0.0, 8.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(summary.total_hours(), 8.5);
        assert!(!summary.weekly_compliant());
    }

    #[test]
    fn test_same_weekday_overwrites() {
        let mut aggregator = WeeklyAggregator::new();
        let thresholds = ComplianceThresholds::default();
        aggregator.apply_entry(&entry("Ana", monday(), 8.0), &thresholds);
        // next Monday lands in the same slot
        aggregator.apply_entry(&entry("Ana", monday() + Duration::days(7), 2.0), &thresholds);

        let summary = aggregator.get("Ana").unwrap();
        assert_eq!(summary.hours_by_day()[1], 2.0);
        assert_eq!(summary.total_hours(), 2.0);
    }

    #[test]
    fn test_reaching_weekly_minimum() {
        let mut aggregator = WeeklyAggregator::new();
        let thresholds = ComplianceThresholds::default();
        for day in 0..4 {
            aggregator.apply_entry(&entry("Ana", monday() + Duration::days(day), 7.0), &thresholds);
        }

        let summary = aggregator.get("Ana").unwrap();
        assert_eq!(summary.total_hours(), 28.0);
        assert!(summary.weekly_compliant());
    }

    #[test]
    fn test_iter_follows_first_appearance() {
        let mut aggregator = WeeklyAggregator::new();
        let thresholds = ComplianceThresholds::default();
        aggregator.apply_entry(&entry("Zoe", monday(), 1.0), &thresholds);
        aggregator.apply_entry(&entry("Ana", monday(), 1.0), &thresholds);
        aggregator.apply_entry(&entry("Zoe", monday() + Duration::days(1), 1.0), &thresholds);

        let people: Vec<&str> = aggregator.iter().map(|(p, _)| p).collect();
        assert_eq!(people, vec!["Zoe", "Ana"]);
        assert_eq!(aggregator.len(), 2);
    }

    proptest! {
        #[test]
        fn total_tracks_latest_value_per_slot(
            writes in proptest::collection::vec((0i64..14, 0u32..1200), 1..30)
        ) {
            let mut aggregator = WeeklyAggregator::new();
            let thresholds = ComplianceThresholds::default();
            let mut expected = [0u32; 7];

            for (offset, cents) in &writes {
                let date = monday() + Duration::days(*offset);
                expected[day_slot(date)] = *cents;
                aggregator.apply_entry(&entry("Ana", date, *cents as f64 / 100.0), &thresholds);
            }

            let summary = aggregator.get("Ana").unwrap();
            let expected_total = expected.iter().sum::<u32>() as f64 / 100.0;
            prop_assert!((summary.total_hours() - expected_total).abs() < 1e-9);
            prop_assert_eq!(summary.weekly_compliant(), expected.iter().sum::<u32>() >= 2800);
        }
    }
}
