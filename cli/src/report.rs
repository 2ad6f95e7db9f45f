use std::fmt::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};
use timecard_core::service::dto::{DailyRow, WeeklyRow};
use timecard_core::{Dashboard, DAY_LABELS};
use unicode_width::UnicodeWidthStr;

use crate::chart::bar_lengths;

const BAR_WIDTH: usize = 40;

pub const DAILY_MARK_OK: &str = "✓";
pub const DAILY_MARK_MISS: &str = "✗";
pub const WEEKLY_MARK_OK: &str = "😊";
pub const WEEKLY_MARK_MISS: &str = "☹";

#[derive(Tabled)]
struct DailyTableRow {
    #[tabled(rename = "Name")]
    person: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "In")]
    start: String,
    #[tabled(rename = "Out")]
    end: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Daily")]
    mark: &'static str,
}

#[derive(Tabled)]
struct WeeklyTableRow {
    #[tabled(rename = "Name")]
    person: String,
    #[tabled(rename = "Sun")]
    sun: String,
    #[tabled(rename = "Mon")]
    mon: String,
    #[tabled(rename = "Tue")]
    tue: String,
    #[tabled(rename = "Wed")]
    wed: String,
    #[tabled(rename = "Thu")]
    thu: String,
    #[tabled(rename = "Fri")]
    fri: String,
    #[tabled(rename = "Sat")]
    sat: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Weekly")]
    mark: &'static str,
}

/// Shortest decimal form: 8.50 -> "8.5", 28.00 -> "28".
pub fn format_hours(hours: f64) -> String {
    let text = format!("{:.2}", hours);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

pub fn daily_mark(compliant: bool) -> &'static str {
    if compliant { DAILY_MARK_OK } else { DAILY_MARK_MISS }
}

pub fn weekly_mark(compliant: bool) -> &'static str {
    if compliant { WEEKLY_MARK_OK } else { WEEKLY_MARK_MISS }
}

fn daily_table(rows: &[DailyRow]) -> String {
    let rows: Vec<DailyTableRow> = rows
        .iter()
        .map(|row| DailyTableRow {
            person: row.person.clone(),
            date: row.date.clone(),
            start: row.start.clone(),
            end: row.end.clone(),
            hours: format_hours(row.hours),
            mark: daily_mark(row.daily_compliant),
        })
        .collect();
    Table::new(rows).with(Style::modern()).to_string()
}

fn weekly_table(rows: &[WeeklyRow]) -> String {
    let rows: Vec<WeeklyTableRow> = rows
        .iter()
        .map(|row| {
            let [sun, mon, tue, wed, thu, fri, sat] = row.hours_by_day.map(format_hours);
            WeeklyTableRow {
                person: row.person.clone(),
                sun,
                mon,
                tue,
                wed,
                thu,
                fri,
                sat,
                total: format_hours(row.total_hours),
                mark: weekly_mark(row.weekly_compliant),
            }
        })
        .collect();
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn build_text_report(dashboard: &Dashboard, weekly_min_hours: f64) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Daily Entries");
    if dashboard.daily_rows.is_empty() {
        let _ = writeln!(output, "No entries recorded.");
    } else {
        let _ = writeln!(output, "{}", daily_table(&dashboard.daily_rows));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "# Weekly Hours ({})", DAY_LABELS.join(" "));
    if dashboard.weekly_rows.is_empty() {
        let _ = writeln!(output, "No one tracked yet.");
    } else {
        let _ = writeln!(output, "{}", weekly_table(&dashboard.weekly_rows));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "# Notifications");
    let _ = writeln!(output, "{}", dashboard.notification);

    let _ = writeln!(output);
    let _ = writeln!(output, "# Hours per Person (minimum {})", format_hours(weekly_min_hours));
    let name_width = dashboard
        .weekly_hours
        .iter()
        .map(|p| p.person.width())
        .max()
        .unwrap_or(0);
    let lengths = bar_lengths(&dashboard.weekly_hours, weekly_min_hours, BAR_WIDTH);
    for (point, length) in dashboard.weekly_hours.iter().zip(lengths) {
        let padding = " ".repeat(name_width - point.person.width());
        let _ = writeln!(
            output,
            "{}{} |{} {}",
            point.person,
            padding,
            "█".repeat(length),
            format_hours(point.total_hours)
        );
    }

    let compliance = &dashboard.compliance;
    let _ = writeln!(output);
    let _ = writeln!(output, "# Compliance");
    let _ = writeln!(
        output,
        "{} compliant / {} non-compliant ({:.0}% compliant)",
        compliance.compliant,
        compliance.non_compliant,
        compliance.compliant_ratio() * 100.0
    );

    output
}
