//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldName};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows reserved under each field for its error or hint message
pub const MESSAGE_HEIGHT: u16 = 1;
/// Bordered single-line control
pub const INPUT_HEIGHT: u16 = 3;
/// Bordered multi-line control
pub const TEXT_AREA_HEIGHT: u16 = 6;

const CURSOR: &str = "▌";

/// Everything needed to draw one field
pub struct FieldView<'a> {
    pub field: FieldName,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub show_hint: bool,
}

/// Total rows a field occupies, message row included
pub fn field_height(field: FieldName) -> u16 {
    let control = if field.kind().is_multiline() {
        TEXT_AREA_HEIGHT
    } else {
        INPUT_HEIGHT
    };
    control + MESSAGE_HEIGHT
}

/// Border colour: focus wins, then error, then filled
fn border_color(view: &FieldView) -> Color {
    if view.is_active {
        Color::Cyan
    } else if view.error.is_some() {
        Color::Red
    } else if !view.value.is_empty() {
        Color::Green
    } else {
        Color::DarkGray
    }
}

/// Draw a form field with its message row underneath
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    if area.height <= MESSAGE_HEIGHT {
        return;
    }
    let control_area = Rect {
        height: area.height - MESSAGE_HEIGHT,
        ..area
    };
    let message_area = Rect {
        y: area.y + control_area.height,
        height: MESSAGE_HEIGHT,
        ..area
    };

    let block = Block::default()
        .title(format!(" {} ", view.field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(view)));

    let content = control_content(view);
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        control_area,
    );

    if let Some(message) = message_line(view) {
        frame.render_widget(Paragraph::new(message), message_area);
    }
}

/// Lines shown inside the control's border
fn control_content<'a>(view: &FieldView<'a>) -> Vec<Line<'a>> {
    let value_style = if view.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor_style = Style::default().fg(Color::Cyan);
    let kind = view.field.kind();

    match kind {
        FieldKind::Radio(options) => {
            let mut spans = Vec::new();
            for option in options {
                let selected = option.value == view.value;
                let marker = if selected { "(•) " } else { "( ) " };
                let style = if selected {
                    value_style.add_modifier(Modifier::BOLD)
                } else {
                    placeholder_style
                };
                spans.push(Span::styled(format!("{marker}{}   ", option.label), style));
            }
            vec![Line::from(spans)]
        }
        FieldKind::Select(_) => {
            let line = match kind.option_label(view.value) {
                Some(label) => Line::from(vec![
                    Span::styled("‹ ", cursor_style),
                    Span::styled(label, value_style),
                    Span::styled(" ›", cursor_style),
                ]),
                None => Line::from(Span::styled(view.field.placeholder(), placeholder_style)),
            };
            vec![line]
        }
        FieldKind::Text | FieldKind::Date | FieldKind::TextArea => {
            if view.value.is_empty() && !view.is_active {
                return vec![Line::from(Span::styled(
                    view.field.placeholder(),
                    placeholder_style,
                ))];
            }
            let mut lines: Vec<Line> = view
                .value
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
                .collect();
            if view.is_active {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(Span::styled(CURSOR, cursor_style));
                }
            }
            lines
        }
    }
}

/// Error text, or a success hint for filled personal fields
fn message_line<'a>(view: &FieldView<'a>) -> Option<Line<'a>> {
    if let Some(error) = view.error {
        return Some(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
    }
    if !view.show_hint || view.value.is_empty() {
        return None;
    }
    view.field.success_hint().map(|hint| {
        Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::Green),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(field: FieldName, value: &str) -> FieldView<'_> {
        FieldView {
            field,
            value,
            error: None,
            is_active: false,
            show_hint: true,
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(FieldName::FullName), 4);
        assert_eq!(field_height(FieldName::InternshipDescription), 7);
    }

    #[test]
    fn test_border_color_priority() {
        let mut v = view(FieldName::City, "Pune");
        assert_eq!(border_color(&v), Color::Green);
        v.error = Some("bad");
        assert_eq!(border_color(&v), Color::Red);
        v.is_active = true;
        assert_eq!(border_color(&v), Color::Cyan);
        assert_eq!(border_color(&view(FieldName::City, "")), Color::DarkGray);
    }

    #[test]
    fn test_empty_inactive_shows_placeholder() {
        let lines = control_content(&view(FieldName::Email, ""));
        assert_eq!(text_of(&lines[0]), "your.email@example.com");
    }

    #[test]
    fn test_active_text_shows_cursor() {
        let mut v = view(FieldName::FullName, "Asha");
        v.is_active = true;
        let lines = control_content(&v);
        assert_eq!(text_of(&lines[0]), "Asha▌");
    }

    #[test]
    fn test_multiline_cursor_on_last_line() {
        let mut v = view(FieldName::InternshipDescription, "a\nb");
        v.is_active = true;
        let lines = control_content(&v);
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[1]), "b▌");
    }

    #[test]
    fn test_select_shows_option_label() {
        let lines = control_content(&view(FieldName::Gender, "female"));
        assert_eq!(text_of(&lines[0]), "‹ Female ›");
    }

    #[test]
    fn test_radio_marks_selected_option() {
        let lines = control_content(&view(FieldName::PreviousInternship, "no"));
        assert_eq!(text_of(&lines[0]).trim_end(), "( ) Yes   (•) No");
    }

    #[test]
    fn test_error_message_wins_over_hint() {
        let mut v = view(FieldName::FullName, "Asha");
        v.error = Some("Please provide your full name");
        let line = message_line(&v).unwrap();
        assert_eq!(text_of(&line), " Please provide your full name");
    }

    #[test]
    fn test_hint_only_for_filled_personal_fields() {
        assert_eq!(
            text_of(&message_line(&view(FieldName::FullName, "Asha")).unwrap()),
            " Looks good!"
        );
        assert!(message_line(&view(FieldName::FullName, "")).is_none());
        assert!(message_line(&view(FieldName::City, "Pune")).is_none());
    }

    #[test]
    fn test_hint_can_be_disabled() {
        let mut v = view(FieldName::Gender, "male");
        v.show_hint = false;
        assert!(message_line(&v).is_none());
    }
}
