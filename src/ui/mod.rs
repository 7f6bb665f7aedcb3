pub mod header;
pub mod indicator_view;
pub mod slider;
pub mod status_bar;
pub mod theme;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;

/// Render the full screen: header + indicator canvas + slider + status bar
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(5),    // Indicator canvas
            Constraint::Length(3), // Drag slider
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    header::render(f, app, chunks[0]);
    indicator_view::render(f, app, chunks[1]);
    slider::render(f, app, chunks[2]);
    status_bar::render(f, app, chunks[3]);
}
