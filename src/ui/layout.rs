//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::Clock;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
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

/// Key hints for the current phase
fn get_view_hints<C: Clock>(app: &App<C>) -> &'static str {
    if app.form.is_editing() {
        "Tab/↑↓: move | Enter: next/submit | Esc: quit"
    } else {
        "Enter/r: register another | q/Esc: quit"
    }
}

/// Draw the status bar
pub fn draw_status_bar<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let mut spans = vec![Span::styled(
        format!(" {}", get_view_hints(app)),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(msg) = &app.status_message {
        let color = if app.form.is_editing() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
