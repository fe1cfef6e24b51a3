//! Registration success dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the success card shown after a registration is accepted
pub fn render_success_dialog(
    frame: &mut Frame,
    area: Rect,
    full_name: &str,
    dob: &str,
    branch_name: &str,
    age: i32,
) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" to register another, "),
        Span::styled("q", key_style),
        Span::raw(" to quit"),
    ];

    let header = vec![
        Line::from(Span::styled(
            "✔",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let message =
        format!("{full_name}\nBorn {dob}\n{branch_name}\n\nCalculated Age: {age} years");

    render_dialog(
        frame,
        area,
        DialogConfig {
            title: "Registration Successful!",
            title_color: Color::Green,
            border_color: Color::Green,
            header,
            message: &message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
