//! Order form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one input box
const FIELD_HEIGHT: u16 = 3;
/// Width of the submit button
const BUTTON_WIDTH: u16 = 20;

/// Draw the order form with its submit button and feedback line
pub fn draw_order_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" New Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    // Each field takes its box plus one row for the validation message
    let mut constraints = Vec::with_capacity(FieldName::ALL.len() * 2 + 3);
    for _ in FieldName::ALL {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Feedback
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let state = &app.state;
    let active = state.form.active_field_name();

    for (idx, field) in state.form.fields().enumerate() {
        let show_error = state.show_field_error(field.is_dirty());
        let is_active = active == Some(field.name);
        draw_field(frame, chunks[idx * 2], field, is_active, show_error);
        let error = state.form.field_error(field.name);
        draw_field_error(frame, chunks[idx * 2 + 1], error, show_error);
    }

    let button_row = chunks[FieldName::ALL.len() * 2];
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BUTTON_WIDTH), Constraint::Min(0)])
        .split(button_row)[0];

    let submitting = state.submission.is_submitting;
    let label = if submitting {
        "Submitting..."
    } else {
        "Create Order"
    };
    render_button(
        frame,
        button_area,
        label,
        state.form.is_submit_button_active(),
        !submitting,
        Color::Green,
    );

    draw_feedback(frame, chunks[FieldName::ALL.len() * 2 + 1], app);
}

/// One line of submission feedback: progress, success or failure
fn draw_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let submission = &app.state.submission;

    let span = if submission.is_submitting {
        Span::styled("Sending order...", Style::default().fg(Color::Yellow))
    } else if let Some(msg) = &submission.last_success_message {
        Span::styled(
            format!("✓ {msg}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(msg) = &submission.last_error {
        Span::styled(
            format!("✗ {msg}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        return;
    };

    frame.render_widget(Paragraph::new(span), area);
}
