//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = layout::create_layout(area);

    layout::draw_header(frame, screen.header);

    match app.state.current_view() {
        View::Form => forms::draw_application_form(frame, screen.body, app),
        View::Confirmation => confirmation::draw(
            frame,
            screen.body,
            app.state.confirmation.as_ref(),
            app.state.form.receipt.as_ref(),
        ),
    }

    layout::draw_footer(frame, screen.footer);
    layout::draw_status_bar(frame, screen.status, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
