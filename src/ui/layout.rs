//! Layout components (header, footer, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{SubmissionPhase, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTACT_EMAIL: &str = "hr@graphura.in";
const CONTACT_PHONE: &str = "+91 7378021327";
const COPYRIGHT: &str = "Copyright - 2025 | Graphura India Private Limited | All rights reserved.";

/// Header rows: title, tagline, contacts
const HEADER_HEIGHT: u16 = 3;

/// Screen regions
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the screen into header, body, footer, and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Draw the title, tagline, and contact details
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(Span::styled(
        "Application Form",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));
    let tagline = Line::from(Span::styled(
        "Join our team - Fill out all required fields to submit your application",
        Style::default().fg(Color::Gray),
    ));
    let contacts = Line::from(vec![
        Span::styled("✉ ", Style::default().fg(Color::Green)),
        Span::styled(CONTACT_EMAIL, Style::default().fg(Color::Gray)),
        Span::raw("    "),
        Span::styled("☎ ", Style::default().fg(Color::Green)),
        Span::styled(CONTACT_PHONE, Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(vec![title, tagline, contacts]).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the copyright footer
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        COPYRIGHT,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Key hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view() {
        View::Confirmation => "Esc: quit".to_string(),
        View::Form => {
            let on_choice = app
                .state
                .form
                .active_field_name()
                .is_some_and(|f| f.kind().is_choice());
            let choose = if on_choice { "  ←/→/Space: choose" } else { "" };
            format!("Tab/↓: next  Shift+Tab/↑: prev{choose}  {SUBMIT_SHORTCUT}: submit  Esc: quit")
        }
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let phase = match app.state.form.phase {
        SubmissionPhase::Idle => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionPhase::Submitting => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionPhase::Submitted => Span::styled(" ✔ ", Style::default().fg(Color::Green)),
    };
    spans.push(phase);

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);
}
