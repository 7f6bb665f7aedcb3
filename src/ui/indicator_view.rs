use ratatui::layout::{Alignment, Rect};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Braille resolution: dots per terminal cell
const DOTS_PER_CELL_X: f64 = 2.0;
const DOTS_PER_CELL_Y: f64 = 4.0;

/// Render the indicator canvas. The block's inner area is the content
/// area; its size in braille dots is reported to the core every frame,
/// which is what creates the dots on first layout and keeps the spread
/// constants in step with resizes.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(" refresh ", theme.style_accent_bold()))
        .borders(Borders::ALL)
        .border_style(theme.style_border());
    let inner = block.inner(area);

    let width = f64::from(inner.width) * DOTS_PER_CELL_X;
    let height = f64::from(inner.height) * DOTS_PER_CELL_Y;
    app.indicator.set_content_size(width, height);

    // The core ignores degenerate sizes, so its recorded geometry is the
    // authoritative coordinate space for whatever dots it holds.
    let geometry = app.indicator.geometry().copied();
    let (Some(geometry), Some(circles)) = (geometry, app.indicator.circles()) else {
        let msg = Paragraph::new("window too small")
            .alignment(Alignment::Center)
            .style(theme.style_error())
            .block(block);
        f.render_widget(msg, area);
        return;
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, geometry.content_width])
        .y_bounds([0.0, geometry.content_height])
        .paint(move |ctx| {
            for dot in circles {
                ctx.draw(&Circle {
                    x: dot.x,
                    y: dot.y,
                    radius: dot.radius,
                    color: dot.color,
                });
            }
        });
    f.render_widget(canvas, area);
}
