//! Setup screen: PID gain entry and stepper manual jog state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use thermotop_core::hal::{ControllerIo, PidGains, SimBench};
use thermotop_core::Zone;

use crate::app::GainField;

pub fn draw_setup(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    gains: &PidGains,
    selected: GainField,
    bench: &SimBench,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_gains(f, cols[0], gains, selected);
    draw_steppers(f, cols[1], bench);
}

fn draw_gains(f: &mut ratatui::Frame<'_>, area: Rect, gains: &PidGains, selected: GainField) {
    let row = |field: GainField, name: &str, value: f64| {
        let marker = if field == selected { "▸ " } else { "  " };
        let style = if field == selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!("{marker}{name}: {value:.2}"), style))
    };

    let lines = vec![
        row(GainField::Kp, "KP", gains.kp),
        row(GainField::Ki, "KI", gains.ki),
        row(GainField::Kd, "KD", gains.kd),
        Line::from(""),
        Line::from("Gains are stored only; no control loop runs."),
    ];
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("PID gains (↑/↓ select, ←/→ adjust)"),
    );
    f.render_widget(p, area);
}

fn draw_steppers(f: &mut ratatui::Frame<'_>, area: Rect, bench: &SimBench) {
    let mut lines = Vec::new();
    for zone in Zone::ALL {
        let interlock = if bench.manual_enabled(zone) {
            "manual"
        } else {
            "locked"
        };
        lines.push(Line::from(format!(
            "{}: position {:+} steps [{}]",
            zone.label(),
            bench.stepper_position(zone),
            interlock
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("e/E enable A/B   f/F forward   v/V reverse"));
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Steppers"));
    f.render_widget(p, area);
}
