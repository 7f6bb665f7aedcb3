use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme::Theme;
use crate::app::App;

/// Render the bottom status bar with context-sensitive keybinding hints
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hints = if app.indicator.is_running() {
        running_hints(theme)
    } else {
        stopped_hints(theme)
    };

    let line = Line::from(hints);
    let para = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn stopped_hints(theme: &Theme) -> Vec<Span<'static>> {
    vec![
        key(theme, "s"),
        desc(theme, "Start "),
        key(theme, "←→"),
        desc(theme, "Drag "),
        key(theme, "o"),
        desc(theme, "Origin "),
        key(theme, "r"),
        desc(theme, "Reset "),
        key(theme, "q"),
        desc(theme, "Quit"),
    ]
}

fn running_hints(theme: &Theme) -> Vec<Span<'static>> {
    vec![
        key(theme, "x"),
        desc(theme, "Stop "),
        key(theme, "space"),
        desc(theme, "Toggle "),
        key(theme, "q"),
        desc(theme, "Quit"),
    ]
}

fn key(theme: &Theme, k: &'static str) -> Span<'static> {
    Span::styled(format!(" [{k}] "), theme.style_key_hint())
}

fn desc(theme: &Theme, d: &'static str) -> Span<'static> {
    Span::styled(d, theme.style_key_desc())
}
