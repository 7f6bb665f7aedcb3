use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::indicator::OriginState;

/// Render the top bar: app title plus a live state readout
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let state = if app.indicator.is_running() {
        Span::styled(
            " RUNNING ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" STOPPED ", theme.style_dim())
    };

    let origin = match app.indicator.origin_state() {
        OriginState::Origin => "rest: origin",
        OriginState::Prepared => "rest: prepared",
    };

    let line = Line::from(vec![
        Span::styled(" ● ● ● tridot ", theme.style_accent_bold()),
        Span::styled("│", theme.style_border()),
        state,
        Span::styled("│ ", theme.style_border()),
        Span::styled(origin, theme.style_dim()),
    ]);

    let para = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.style_border()),
    );
    f.render_widget(para, area);
}
