//! Confirmation screen with a bouncing check mark

use crate::state::ConfirmationState;
use crate::submission::SubmissionReceipt;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CHECK_MARK: [&str; 5] = [
    "            ██",
    "          ██  ",
    "██      ██    ",
    "  ██  ██      ",
    "    ██        ",
];
const CHECK_WIDTH: u16 = 14;

/// Rows of text drawn below the check mark
const MESSAGE_HEIGHT: u16 = 5;

fn build_check_mark() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Green);
    CHECK_MARK
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect()
}

fn build_message(receipt: Option<&SubmissionReceipt>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Application Submitted!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for your interest. We'll be in touch soon.",
            Style::default().fg(Color::Gray),
        )),
    ];
    if let Some(receipt) = receipt {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                receipt.short_reference(),
                Style::default().fg(Color::White),
            ),
        ]));
    }
    lines
}

/// Draw the confirmation screen
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    confirmation: Option<&ConfirmationState>,
    receipt: Option<&SubmissionReceipt>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let check = build_check_mark();
    let check_height = check.len() as u16;
    let content_height = check_height + 1 + MESSAGE_HEIGHT;

    let lift = confirmation.map(ConfirmationState::lift_rows).unwrap_or(0);
    let base_y = inner.y + inner.height.saturating_sub(content_height) / 2;
    // The check mark bounces inside the gap above it
    let check_y = base_y.saturating_sub(lift).max(inner.y);
    let check_area = Rect {
        x: inner.x + inner.width.saturating_sub(CHECK_WIDTH) / 2,
        y: check_y,
        width: CHECK_WIDTH.min(inner.width),
        height: check_height.min(inner.height.saturating_sub(check_y - inner.y)),
    };
    frame.render_widget(Paragraph::new(check), check_area);

    let message_y = base_y + check_height + 1;
    let bottom = inner.y + inner.height;
    if message_y >= bottom {
        return;
    }
    let message_area = Rect {
        x: inner.x,
        y: message_y,
        width: inner.width,
        height: MESSAGE_HEIGHT.min(bottom - message_y),
    };
    frame.render_widget(
        Paragraph::new(build_message(receipt)).alignment(Alignment::Center),
        message_area,
    );
}
