//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Keyboard hints shown in the status bar
const HINTS: &str = "Tab/↓:next  Shift+Tab/↑:prev  Enter:submit on button  ^S:submit  Esc:quit";

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Backend reachability from the startup probe
    let conn_status = match app.state.backend_reachable {
        Some(true) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        Some(false) => Span::styled(" ○ ", Style::default().fg(Color::Red)),
        None => Span::styled(" ? ", Style::default().fg(Color::Gray)),
    };
    spans.push(conn_status);

    spans.push(Span::styled(
        app.orders_url.as_str(),
        Style::default().fg(Color::Blue),
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
