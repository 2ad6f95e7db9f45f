use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Clear, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};
use timecard_core::{Notification, DAY_LABELS};

use crate::chart::{bar_value, chart_max};
use crate::report::{daily_mark, format_hours, weekly_mark};
use crate::tui::app::{App, InputMode, FIELD_LABELS};

const OK: Color = Color::Green;
const MISS: Color = Color::Red;
const MUTED: Color = Color::DarkGray;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED))
        .title(title)
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(8),     // Tables
            Constraint::Length(12), // Charts
            Constraint::Length(1),  // Footer
        ])
        .split(size);

    let header = Paragraph::new("TIMECARD")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let table_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);
    draw_daily_table(f, app, table_chunks[0]);
    draw_weekly_table(f, app, table_chunks[1]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[2]);
    draw_hours_chart(f, app, chart_chunks[0]);
    draw_compliance(f, app, chart_chunks[1]);

    let footer = Paragraph::new("a: Add entry | j/k: Scroll | q: Quit")
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    if let InputMode::Editing = app.input_mode {
        draw_entry_form(f, app, size);
    }
}

fn draw_daily_table(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app.dashboard.daily_rows.iter().map(|row| {
        let mark_style = Style::default().fg(if row.daily_compliant { OK } else { MISS });
        Row::new(vec![
            Span::raw(row.person.clone()),
            Span::raw(row.date.clone()),
            Span::raw(row.start.clone()),
            Span::raw(row.end.clone()),
            Span::raw(format_hours(row.hours)),
            Span::styled(daily_mark(row.daily_compliant), mark_style),
        ])
    }).collect();

    let widths = [
        Constraint::Min(8),
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(2),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Name", "Date", "In", "Out", "Hours", ""])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(panel(" Daily Entries "))
        .row_highlight_style(Style::default().bg(Color::DarkGray));

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_weekly_table(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app.dashboard.weekly_rows.iter().map(|row| {
        let mut cells = vec![Span::raw(row.person.clone())];
        cells.extend(row.hours_by_day.iter().map(|h| Span::raw(format_hours(*h))));
        cells.push(Span::styled(
            format_hours(row.total_hours),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        cells.push(Span::raw(weekly_mark(row.weekly_compliant)));
        Row::new(cells)
    }).collect();

    let mut header = vec!["Name"];
    header.extend(DAY_LABELS);
    header.extend(["Total", ""]);

    let mut widths = vec![Constraint::Min(8)];
    widths.extend([Constraint::Length(5); 7]);
    widths.extend([Constraint::Length(6), Constraint::Length(2)]);

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(panel(" Weekly Hours "));
    f.render_widget(table, area);
}

fn draw_hours_chart(f: &mut Frame, app: &App, area: Rect) {
    let points = &app.dashboard.weekly_hours;
    let weekly_min = app.tracker.thresholds().weekly_min_hours;

    let bars: Vec<Bar> = app.dashboard.weekly_rows.iter().zip(points).map(|(row, point)| {
        Bar::default()
            .label(point.person.as_str())
            .value(bar_value(point.total_hours))
            .style(Style::default().fg(if row.weekly_compliant { OK } else { MISS }))
            .text_value(format_hours(point.total_hours))
    }).collect();

    let chart = BarChart::default()
        .block(panel(" Hours per Person "))
        .bar_width(7)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
        .max(chart_max(points, weekly_min));
    f.render_widget(chart, area);
}

fn draw_compliance(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let notification = &app.dashboard.notification;
    let color = match notification {
        Notification::AllCompliant => OK,
        Notification::NonCompliant(_) => MISS,
    };
    let notifications = Paragraph::new(Span::styled(notification.to_string(), Style::default().fg(color)))
        .wrap(Wrap { trim: true })
        .block(panel(" Notifications "));
    f.render_widget(notifications, chunks[0]);

    let compliance = &app.dashboard.compliance;
    let gauge = Gauge::default()
        .block(panel(" Compliance "))
        .gauge_style(Style::default().fg(OK).bg(if compliance.total() > 0 { MISS } else { Color::Reset }))
        .ratio(compliance.compliant_ratio())
        .label(format!("{}/{} compliant", compliance.compliant, compliance.total()));
    f.render_widget(gauge, chunks[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    area
}

fn draw_entry_form(f: &mut Frame, app: &App, area: Rect) {
    let area = centered(area, 44, 9);
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = FIELD_LABELS.iter().zip(&app.form.fields).enumerate().map(|(i, (label, value))| {
        let label_style = if i == app.form.focus {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        Line::from(vec![
            Span::styled(format!("{:<6}", label), label_style),
            Span::raw(value.clone()),
        ])
    }).collect();
    lines.push(Line::from(""));
    lines.push(match &app.form.error {
        Some(error) => Line::from(Span::styled(error.clone(), Style::default().fg(MISS))),
        None => Line::from(Span::styled("Enter: save | Tab: next | Esc: cancel", Style::default().fg(MUTED))),
    });

    let form = Paragraph::new(lines).block(panel(" Daily Entry "));
    f.render_widget(form, area);

    // border + label column
    let cursor_x = area.x + 1 + 6 + app.form.fields[app.form.focus].chars().count() as u16;
    let cursor_y = area.y + 1 + app.form.focus as u16;
    f.set_cursor_position((cursor_x, cursor_y));
}
