use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::Config;
use crate::event::{Event, FrameClock};
use crate::indicator::{DotPalette, Indicator, OriginState};
use crate::ui::theme::Theme;

/// How far one arrow press moves the drag slider.
const DRAG_STEP: f64 = 0.05;

// ── Application State ─────────────────────────────────────────────────

pub struct App {
    pub indicator: Indicator,
    pub clock: FrameClock,
    pub theme: Theme,
    pub should_quit: bool,

    /// Seek-bar position in [0, 1]. The thumb always follows the keys;
    /// the indicator decides for itself whether the dots follow it.
    pub drag_fraction: f64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme = Theme::from_config(&config.theme);
        let palette = DotPalette {
            left: config.theme.dot_left,
            center: config.theme.dot_center,
            right: config.theme.dot_right,
        };
        let mut indicator = Indicator::new(config.min_radius(), config.max_radius(), palette);
        indicator.set_origin_state(config.origin_state());

        Self {
            indicator,
            clock: FrameClock::new(config.period()),
            theme,
            should_quit: false,
            drag_fraction: 0.0,
        }
    }

    /// Handle one event from the handler
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.on_tick(),
            // The canvas re-measures itself on the next draw
            Event::Resize(_, _) => {}
        }
    }

    /// Feed the current clock fraction to the indicator. Only the running
    /// indicator consumes frames; stopped geometry must stay put.
    fn on_tick(&mut self) {
        if self.indicator.is_running() {
            self.indicator.update(self.clock.fraction());
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.start(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.indicator.stop(),
            KeyCode::Char(' ') => {
                if self.indicator.is_running() {
                    self.indicator.stop();
                } else {
                    self.start();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.nudge_drag(-DRAG_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.nudge_drag(DRAG_STEP),
            KeyCode::Char('o') | KeyCode::Char('O') => self.toggle_origin_state(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.indicator.reset(),
            _ => {}
        }
    }

    // ── Actions ───────────────────────────────────────────────────────

    /// Start the animation from the top of the cycle.
    fn start(&mut self) {
        if self.indicator.is_running() {
            return;
        }
        self.clock.restart();
        self.indicator.start();
    }

    fn nudge_drag(&mut self, delta: f64) {
        self.drag_fraction = (self.drag_fraction + delta).clamp(0.0, 1.0);
        self.indicator.drag(self.drag_fraction);
    }

    fn toggle_origin_state(&mut self) {
        let next = match self.indicator.origin_state() {
            OriginState::Origin => OriginState::Prepared,
            OriginState::Prepared => OriginState::Origin,
        };
        self.indicator.set_origin_state(next);
        debug!(state = ?next, "origin state toggled");
    }
}
