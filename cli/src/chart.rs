use timecard_core::service::dto::BarPoint;

/// Bar values carry one decimal of hours; negative totals draw as empty bars.
pub fn bar_value(hours: f64) -> u64 {
    (hours.max(0.0) * 10.0).round() as u64
}

/// Upper bound of the bar scale, never below the weekly minimum so the
/// threshold stays visible.
pub fn chart_max(points: &[BarPoint], weekly_min_hours: f64) -> u64 {
    points
        .iter()
        .map(|p| bar_value(p.total_hours))
        .chain(std::iter::once(bar_value(weekly_min_hours)))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Bar lengths in character cells for a text chart of `width` cells.
pub fn bar_lengths(points: &[BarPoint], weekly_min_hours: f64, width: usize) -> Vec<usize> {
    let max = chart_max(points, weekly_min_hours) as f64;
    points
        .iter()
        .map(|p| ((bar_value(p.total_hours) as f64 / max) * width as f64).round() as usize)
        .collect()
}
