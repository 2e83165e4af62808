//! Rolling trend sparklines per zone: temperature, setpoint, heater drive.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Sparkline},
};

use thermotop_core::{Sample, Zone};

pub fn draw_zone_trend(f: &mut ratatui::Frame<'_>, area: Rect, zone: Zone, window: &[Sample]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let now = window.last();

    // Temperature and setpoint are drawn relative to the window floor so a
    // reading band like 25–30°C doesn't render as a flat full-height bar.
    let floor = window
        .iter()
        .map(|s| s.temperature.min(s.setpoint))
        .fold(f64::INFINITY, f64::min);
    let floor = if floor.is_finite() {
        (floor - 1.0).floor()
    } else {
        0.0
    };

    draw_series(
        f,
        rows[0],
        &format!(
            "{} temp (°C) — now: {}",
            zone.label(),
            fmt_now(now.map(|s| s.temperature))
        ),
        window,
        |s| tenths_above(s.temperature, floor),
        Color::Cyan,
        None,
    );
    draw_series(
        f,
        rows[1],
        &format!(
            "{} setpoint (°C) — now: {}",
            zone.label(),
            fmt_now(now.map(|s| s.setpoint))
        ),
        window,
        |s| tenths_above(s.setpoint, floor),
        Color::Yellow,
        None,
    );
    draw_series(
        f,
        rows[2],
        &format!(
            "{} drive (%) — now: {}",
            zone.label(),
            fmt_now(now.map(|s| s.heater_output))
        ),
        window,
        |s| s.heater_output.clamp(0.0, 100.0).round() as u64,
        Color::Green,
        Some(100),
    );
}

fn draw_series(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    window: &[Sample],
    value: impl Fn(&Sample) -> u64,
    color: Color,
    max: Option<u64>,
) {
    let max_points = area.width.saturating_sub(2) as usize;
    let start = window.len().saturating_sub(max_points);
    let data: Vec<u64> = window.iter().skip(start).map(&value).collect();

    let mut spark = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        )
        .data(&data)
        .style(Style::default().fg(color));
    if let Some(m) = max {
        spark = spark.max(m);
    }
    f.render_widget(spark, area);
}

fn tenths_above(v: f64, floor: f64) -> u64 {
    ((v - floor).max(0.0) * 10.0).round() as u64
}

fn fmt_now(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.1}")).unwrap_or_else(|| "--".into())
}
