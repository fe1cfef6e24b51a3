//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::{Clock, RegistrationView};
use ratatui::Frame;

/// Main draw function
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.view() {
        RegistrationView::Form {
            fields,
            submit_focused,
        } => forms::draw_registration(
            frame,
            main_area,
            app.config.form_title(),
            &fields,
            submit_focused,
        ),
        RegistrationView::Success {
            full_name,
            dob,
            branch_name,
            age,
        } => components::render_success_dialog(
            frame,
            main_area,
            &full_name,
            &dob,
            branch_name,
            age,
        ),
    }

    layout::draw_status_bar(frame, status_area, app);
}
