//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::state::FieldView;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Width of the form card
const FORM_WIDTH: u16 = 64;

/// Submit shortcut shown in the help text
const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Draw the registration form with its Submit button
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[FieldView],
    submit_focused: bool,
) {
    let card_area = Rect {
        x: area.x + area.width.saturating_sub(FORM_WIDTH) / 2,
        width: area.width.min(FORM_WIDTH),
        ..area
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (idx, field) in fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field);
    }

    let button_area = chunks[fields.len()];
    let button_width = button_area.width.min(16);
    let button_area = Rect {
        x: button_area.x + (button_area.width - button_width) / 2,
        width: button_width,
        ..button_area
    };
    render_button(frame, button_area, "Submit", submit_focused);

    draw_help_text(
        frame,
        chunks[fields.len() + 1],
        &format!("←/→ or Space: choose branch | {SUBMIT_SHORTCUT}: submit"),
    );
}
