use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use crate::app::App;
use crate::indicator::OriginState;

/// Render the drag slider — the seek-bar analog. The thumb always shows
/// the key-driven fraction; the dots only follow it while the indicator
/// is stopped and resting in the origin state.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let live = !app.indicator.is_running()
        && app.indicator.origin_state() == OriginState::Origin;
    let fill = if live { theme.accent } else { theme.fg_dim };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" drag ", theme.style_accent_bold()))
                .borders(Borders::ALL)
                .border_style(theme.style_border()),
        )
        .gauge_style(Style::default().fg(fill))
        .ratio(app.drag_fraction)
        .label(Span::styled(
            format!("{:3.0}%", app.drag_fraction * 100.0),
            theme.style_default(),
        ));
    f.render_widget(gauge, area);
}
