//! Field rendering utilities for forms

use crate::state::FieldView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a field box plus its error line
pub fn field_height(field: &FieldView) -> u16 {
    let box_height = if field.is_multiline { 5 } else { 3 };
    box_height + 1
}

/// Draw a form field with its inline error message underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let has_error = field.error.is_some();
    let border_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);

    let cursor = if field.is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if field.value.is_empty() {
        let text = field.placeholder.unwrap_or(if field.is_active { "" } else { "(empty)" });
        vec![Line::from(vec![
            cursor_span.clone(),
            Span::styled(text, placeholder_style),
        ])]
    } else {
        field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    };
    if !field.value.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
    }

    let box_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(content, box_area);

    if let Some(error) = &field.error {
        let error_area = Rect {
            y: area.y + box_area.height,
            height: 1,
            ..area
        };
        let message = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, error_area);
    }
}

/// Draw a line of dimmed help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
