//! Bottom line: key hints, retention summary, and the last notice.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use thermotop_core::Retention;

use crate::app::Screen;

pub fn draw_footer(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    screen: Screen,
    notice: Option<&str>,
    retention: Retention,
    display_window: usize,
) {
    let line = if let Some(msg) = notice {
        Line::from(Span::styled(
            msg.to_string(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let policy = match retention {
            Retention::Count(n) => format!("last {n} samples"),
            Retention::Span(secs) => format!("last {secs:.0}s"),
        };
        let hints = match screen {
            Screen::Main => {
                "←/→ zone  ↑/↓ setpoint  1/2 heater  [/] window  ,/. retention  m mode  c clear"
            }
            Screen::Setup => "↑/↓ field  ←/→ adjust  e/E enable  f/F fwd  v/V rev",
        };
        Line::from(format!(
            "window: {display_window}  retention: {policy}  |  {hints}"
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}
