//! Top header with the wall clock and screen switch hint.

use chrono::Local;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use crate::app::Screen;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, screen: Screen) {
    let clock = Local::now().format("%H:%M:%S");
    let title = match screen {
        Screen::Main => {
            format!("thermotop — dual-zone controller | {clock}  (Tab: setup, 'q' to quit)")
        }
        Screen::Setup => {
            format!("thermotop — setup | {clock}  (Tab: main screen, 'q' to quit)")
        }
    };
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
