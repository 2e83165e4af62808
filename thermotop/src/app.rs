//! App state and main loop: input handling, ticking the simulated rig,
//! updating the per-zone histories, and drawing.

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tokio::time::sleep;

use thermotop_core::hal::{ControllerIo, JogDirection, PidGains, SimBench};
use thermotop_core::sim::SimSource;
use thermotop_core::{Retention, SampleBuffer, Zone};

use crate::ui::{footer::draw_footer, header::draw_header, setup::draw_setup, trend, zones};

// Chart slice bounds, matching the prototype slider range
const WINDOW_MIN: usize = 10;
const WINDOW_MAX: usize = 2000;
const WINDOW_STEP: usize = 10;

const SETPOINT_STEP: f64 = 0.5;
const GAIN_STEP: f64 = 0.1;
const RETENTION_COUNT_STEP: usize = 100;
const RETENTION_SPAN_STEP: f64 = 10.0;
const DEFAULT_SPAN_SECS: f64 = 120.0;
const DEFAULT_COUNT: usize = 2000;

// How many ticks a footer notice stays visible
const NOTICE_TICKS: u8 = 5;

/// Which screen is showing, mirroring the two frames of the prototype GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Setup,
}

/// Setup-screen row selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainField {
    Kp,
    Ki,
    Kd,
}

impl GainField {
    fn next(self) -> Self {
        match self {
            GainField::Kp => GainField::Ki,
            GainField::Ki => GainField::Kd,
            GainField::Kd => GainField::Kp,
        }
    }

    fn prev(self) -> Self {
        match self {
            GainField::Kp => GainField::Kd,
            GainField::Ki => GainField::Kp,
            GainField::Kd => GainField::Ki,
        }
    }
}

pub struct App {
    // One rolling history per zone; both share the same retention policy.
    buffers: [SampleBuffer; 2],
    sources: [SimSource; 2],
    bench: SimBench,
    gains: PidGains,
    setpoints: [f64; 2],

    screen: Screen,
    selected_zone: Zone,
    gain_field: GainField,
    // Chart slice size in samples; independent of retention
    display_window: usize,
    // Single-zone benches run with zone B disabled entirely
    zone_b_enabled: bool,
    notice: Option<String>,
    notice_ticks: u8,

    should_quit: bool,
    tick: Duration,
}

impl App {
    pub fn new(tick: Duration, retention: Retention, zone_b_enabled: bool) -> Result<Self> {
        let tick_secs = tick.as_secs_f64();
        Ok(Self {
            buffers: [
                SampleBuffer::new(retention)?,
                SampleBuffer::new(retention)?,
            ],
            sources: [SimSource::new(tick_secs), SimSource::new(tick_secs)],
            bench: SimBench::new(),
            gains: PidGains::default(),
            setpoints: [27.0, 27.0],
            screen: Screen::Main,
            selected_zone: Zone::A,
            gain_field: GainField::Kp,
            display_window: 60,
            zone_b_enabled,
            notice: None,
            notice_ticks: 0,
            should_quit: false,
            tick,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    self.handle_key(k.code);
                }
            }
            if self.should_quit {
                break;
            }

            // One simulated reading per zone, then redraw
            self.tick_rig();
            terminal.draw(|f| self.draw(f))?;

            // Tick rate
            sleep(self.tick).await;
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if matches!(
            code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) {
            self.should_quit = true;
            return;
        }
        if code == KeyCode::Tab {
            self.screen = match self.screen {
                Screen::Main => Screen::Setup,
                Screen::Setup => Screen::Main,
            };
            return;
        }
        match self.screen {
            Screen::Main => self.handle_main_key(code),
            Screen::Setup => self.handle_setup_key(code),
        }
    }

    fn handle_main_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Right => {
                if self.zone_b_enabled {
                    self.selected_zone = match self.selected_zone {
                        Zone::A => Zone::B,
                        Zone::B => Zone::A,
                    };
                }
            }
            KeyCode::Up => self.nudge_setpoint(SETPOINT_STEP),
            KeyCode::Down => self.nudge_setpoint(-SETPOINT_STEP),
            KeyCode::Char('1') => self.toggle_heater(Zone::A),
            KeyCode::Char('2') => {
                if self.zone_b_enabled {
                    self.toggle_heater(Zone::B);
                }
            }
            KeyCode::Char('[') => {
                self.display_window = self
                    .display_window
                    .saturating_sub(WINDOW_STEP)
                    .max(WINDOW_MIN);
            }
            KeyCode::Char(']') => {
                self.display_window = (self.display_window + WINDOW_STEP).min(WINDOW_MAX);
            }
            KeyCode::Char(',') => self.adjust_retention(-1),
            KeyCode::Char('.') => self.adjust_retention(1),
            KeyCode::Char('m') => self.switch_retention_mode(),
            KeyCode::Char('c') => {
                for buf in &mut self.buffers {
                    buf.clear();
                }
                self.set_notice("history cleared".into());
            }
            _ => {}
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.gain_field = self.gain_field.prev(),
            KeyCode::Down => self.gain_field = self.gain_field.next(),
            KeyCode::Left | KeyCode::Char('-') => self.nudge_gain(-GAIN_STEP),
            KeyCode::Right | KeyCode::Char('+') => self.nudge_gain(GAIN_STEP),
            KeyCode::Char('e') => self.toggle_manual_enable(Zone::A),
            KeyCode::Char('E') => {
                if self.zone_b_enabled {
                    self.toggle_manual_enable(Zone::B);
                }
            }
            KeyCode::Char('f') => self.bench.jog_stepper(Zone::A, JogDirection::Forward),
            KeyCode::Char('F') => {
                if self.zone_b_enabled {
                    self.bench.jog_stepper(Zone::B, JogDirection::Forward);
                }
            }
            KeyCode::Char('v') => self.bench.jog_stepper(Zone::A, JogDirection::Reverse),
            KeyCode::Char('V') => {
                if self.zone_b_enabled {
                    self.bench.jog_stepper(Zone::B, JogDirection::Reverse);
                }
            }
            _ => {}
        }
    }

    fn nudge_setpoint(&mut self, delta: f64) {
        let sp = &mut self.setpoints[self.selected_zone.index()];
        *sp = (*sp + delta).clamp(0.0, 100.0);
    }

    fn nudge_gain(&mut self, delta: f64) {
        let gain = match self.gain_field {
            GainField::Kp => &mut self.gains.kp,
            GainField::Ki => &mut self.gains.ki,
            GainField::Kd => &mut self.gains.kd,
        };
        *gain = (*gain + delta).max(0.0);
    }

    fn toggle_heater(&mut self, zone: Zone) {
        let on = !self.bench.heater_on(zone);
        self.bench.set_heater(zone, on);
    }

    fn toggle_manual_enable(&mut self, zone: Zone) {
        let enabled = !self.bench.manual_enabled(zone);
        self.bench.set_manual_enable(zone, enabled);
    }

    fn adjust_retention(&mut self, dir: i64) {
        let next = match self.buffers[0].retention() {
            Retention::Count(n) => {
                let stepped = if dir < 0 {
                    n.saturating_sub(RETENTION_COUNT_STEP)
                } else {
                    n + RETENTION_COUNT_STEP
                };
                Retention::Count(stepped.max(1))
            }
            Retention::Span(secs) => {
                let stepped = secs + dir as f64 * RETENTION_SPAN_STEP;
                Retention::Span(stepped.max(RETENTION_SPAN_STEP))
            }
        };
        self.apply_retention(next);
    }

    fn switch_retention_mode(&mut self) {
        let next = match self.buffers[0].retention() {
            Retention::Count(_) => Retention::Span(DEFAULT_SPAN_SECS),
            Retention::Span(_) => Retention::Count(DEFAULT_COUNT),
        };
        self.apply_retention(next);
    }

    fn apply_retention(&mut self, retention: Retention) {
        for buf in &mut self.buffers {
            if let Err(e) = buf.set_retention(retention) {
                self.set_notice(e.to_string());
                return;
            }
        }
        self.set_notice(match retention {
            Retention::Count(n) => format!("retention: last {n} samples"),
            Retention::Span(secs) => format!("retention: last {secs:.0}s"),
        });
    }

    fn set_notice(&mut self, msg: String) {
        self.notice = Some(msg);
        self.notice_ticks = NOTICE_TICKS;
    }

    fn zone_enabled(&self, zone: Zone) -> bool {
        zone != Zone::B || self.zone_b_enabled
    }

    fn tick_rig(&mut self) {
        for zone in Zone::ALL {
            if !self.zone_enabled(zone) {
                continue;
            }
            let i = zone.index();
            let heater_on = self.bench.heater_on(zone);
            let sample = self.sources[i].next_sample(self.setpoints[i], heater_on);
            if let Err(e) = self.buffers[i].append(sample) {
                // drop the reading, tell the operator
                self.set_notice(e.to_string());
            }
        }

        // Age out the footer notice
        if self.notice.is_some() {
            self.notice_ticks = self.notice_ticks.saturating_sub(1);
            if self.notice_ticks == 0 {
                self.notice = None;
            }
        }
    }

    pub fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();

        // Root rows: header, screen body, footer
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(10),   // body
                Constraint::Length(1), // footer
            ])
            .split(area);

        draw_header(f, rows[0], self.screen);

        match self.screen {
            Screen::Main => self.draw_main(f, rows[1]),
            Screen::Setup => draw_setup(f, rows[1], &self.gains, self.gain_field, &self.bench),
        }

        draw_footer(
            f,
            rows[2],
            self.screen,
            self.notice.as_deref(),
            self.buffers[0].retention(),
            self.display_window,
        );
    }

    fn draw_main(&mut self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // zone panels
                Constraint::Min(6),    // trends
            ])
            .split(area);

        // With zone B off, zone A takes the full width
        let zone_cols: Vec<Constraint> = if self.zone_b_enabled {
            vec![Constraint::Percentage(50), Constraint::Percentage(50)]
        } else {
            vec![Constraint::Percentage(100)]
        };

        let panel_lr = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(zone_cols.clone())
            .split(rows[0]);
        for zone in Zone::ALL {
            if !self.zone_enabled(zone) {
                continue;
            }
            let i = zone.index();
            zones::draw_zone_panel(
                f,
                panel_lr[i],
                zone,
                self.setpoints[i],
                self.buffers[i].latest(),
                self.bench.heater_on(zone),
                zone == self.selected_zone,
            );
        }

        let trend_lr = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(zone_cols)
            .split(rows[1]);
        for zone in Zone::ALL {
            if !self.zone_enabled(zone) {
                continue;
            }
            let i = zone.index();
            // display_window is kept >= 1 by the key handlers, so the only
            // window error (zero size) cannot happen here
            let win = self.buffers[i]
                .window(Some(self.display_window))
                .unwrap_or_default();
            trend::draw_zone_trend(f, trend_lr[i], zone, &win);
        }
    }
}
