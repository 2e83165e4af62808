//! Per-zone status panel: setpoint, latest reading, heater drive gauge.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use thermotop_core::{Sample, Zone};

pub fn draw_zone_panel(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    zone: Zone,
    setpoint: f64,
    latest: Option<&Sample>,
    heater_on: bool,
    selected: bool,
) {
    let title = if selected {
        format!("{} ◂", zone.label())
    } else {
        zone.label().to_string()
    };
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let temp = latest
        .map(|s| format!("{:.1}°C", s.temperature))
        .unwrap_or_else(|| "--.-°C".into());
    f.render_widget(
        Paragraph::new(format!("Temp: {temp}   Set: {setpoint:.1}°C")),
        rows[0],
    );

    let (state, color) = if heater_on {
        ("Heater: ON", Color::Green)
    } else {
        ("Heater: OFF", Color::Red)
    };
    let line = Line::from(Span::styled(
        state,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(line), rows[1]);

    let drive = latest
        .map(|s| s.heater_output)
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    let g = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(drive.round() as u16)
        .label(format!("drive {drive:.0}%"));
    f.render_widget(g, rows[2]);
}
