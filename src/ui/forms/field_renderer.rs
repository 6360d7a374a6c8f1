//! Field rendering utilities for forms

use crate::state::{FormField, ValidationError};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a bordered input for a form field.
///
/// `show_error` paints the border red when the field is invalid.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    show_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if show_error && !field.is_valid() {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let value = field.as_text();
    let display_str = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the inline validation message under a field, if any
pub fn draw_field_error(
    frame: &mut Frame,
    area: Rect,
    error: Option<&ValidationError>,
    show_error: bool,
) {
    let Some(error) = error.filter(|_| show_error) else {
        return;
    };

    let message = Paragraph::new(Span::styled(
        format!("  {error}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(message, area);
}
