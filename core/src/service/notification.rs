use crate::model::notification::Notification;
use crate::service::aggregator::WeeklyAggregator;

/// Lists everyone under the weekly minimum, or `AllCompliant` when nobody is
/// (including when nobody has been tracked yet).
pub fn derive_notification(aggregator: &WeeklyAggregator) -> Notification {
    let non_compliant: Vec<String> = aggregator
        .iter()
        .filter(|(_, summary)| !summary.weekly_compliant())
        .map(|(person, _)| person.to_string())
        .collect();

    if non_compliant.is_empty() {
        Notification::AllCompliant
    } else {
        Notification::NonCompliant(non_compliant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::DailyEntry;
    use crate::model::thresholds::ComplianceThresholds;
    use chrono::{Duration, NaiveDate, NaiveTime};

    fn apply(aggregator: &mut WeeklyAggregator, person: &str, day: i64, hours: f64) {
        let entry = DailyEntry {
            person: person.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap() + Duration::days(day),
            start_time: NaiveTime::MIN,
            end_time: NaiveTime::MIN,
            total_hours: hours,
            daily_compliant: true,
        };
        aggregator.apply_entry(&entry, &ComplianceThresholds::default());
    }

    #[test]
    fn test_empty_state_is_all_compliant() {
        assert_eq!(derive_notification(&WeeklyAggregator::new()), Notification::AllCompliant);
    }

    #[test]
    fn test_lists_non_compliant_in_first_appearance_order() {
        let mut aggregator = WeeklyAggregator::new();
        apply(&mut aggregator, "Zoe", 1, 4.0);
        apply(&mut aggregator, "Ana", 1, 14.0);
        apply(&mut aggregator, "Ana", 2, 14.0);
        apply(&mut aggregator, "Ben", 1, 8.0);

        let notification = derive_notification(&aggregator);
        assert_eq!(
            notification,
            Notification::NonCompliant(vec!["Zoe".to_string(), "Ben".to_string()])
        );
        assert_eq!(notification.to_string(), "Non-compliant: Zoe, Ben");
    }

    #[test]
    fn test_everyone_compliant() {
        let mut aggregator = WeeklyAggregator::new();
        for day in 1..5 {
            apply(&mut aggregator, "Ana", day, 7.0);
        }
        let notification = derive_notification(&aggregator);
        assert_eq!(notification, Notification::AllCompliant);
        assert_eq!(notification.to_string(), "Everyone met the weekly hours");
    }
}
