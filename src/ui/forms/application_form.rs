//! Application form rendering

use super::field_renderer::{draw_field, field_height, FieldView};
use crate::app::App;
use crate::state::{ApplicationForm, FieldName, Section};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SECTION_HEIGHT: u16 = 2;

/// One vertical slot in the form body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Heading(Section),
    Field(FieldName),
    Submit,
}

impl FormRow {
    pub fn height(&self) -> u16 {
        match self {
            FormRow::Heading(_) => SECTION_HEIGHT,
            FormRow::Field(field) => field_height(*field),
            FormRow::Submit => BUTTON_HEIGHT,
        }
    }
}

/// Rows for the visible fields, with a heading before each section
pub fn form_rows(form: &ApplicationForm) -> Vec<FormRow> {
    let mut rows = Vec::new();
    let mut current_section = None;
    for field in form.visible_fields() {
        let section = field.section();
        if current_section != Some(section) {
            rows.push(FormRow::Heading(section));
            current_section = Some(section);
        }
        rows.push(FormRow::Field(field));
    }
    rows.push(FormRow::Submit);
    rows
}

/// Index of the row holding the focused field or the submit button
fn active_row(rows: &[FormRow], form: &ApplicationForm) -> usize {
    let target = match form.active_field_name() {
        Some(field) => FormRow::Field(field),
        None => FormRow::Submit,
    };
    rows.iter().position(|r| *r == target).unwrap_or(0)
}

/// Smallest scroll offset that keeps the active row fully visible
pub fn scroll_offset(rows: &[FormRow], active: usize, viewport_height: u16) -> u16 {
    let active_top: u16 = rows[..active.min(rows.len())]
        .iter()
        .map(FormRow::height)
        .sum();
    let active_bottom = active_top + rows.get(active).map(FormRow::height).unwrap_or(0);

    // A row taller than the viewport is anchored at its top
    active_bottom
        .saturating_sub(viewport_height)
        .min(active_top)
}

/// Draw the application form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let border_color = if form.is_submitting() {
        Color::Yellow
    } else {
        Color::Green
    };
    let block = Block::default()
        .title(" Application Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    if body.width == 0 || body.height == 0 {
        return;
    }

    let rows = form_rows(form);
    let offset = scroll_offset(&rows, active_row(&rows, form), body.height);
    let show_hints = app.config.show_success_hints();

    let mut y: u16 = 0;
    for row in rows {
        let height = row.height();
        let top = y;
        y += height;

        // Only rows that fit entirely inside the viewport are drawn
        if top < offset || y - offset > body.height {
            continue;
        }
        let row_area = Rect {
            y: body.y + (top - offset),
            height,
            ..body
        };

        match row {
            FormRow::Heading(section) => draw_heading(frame, row_area, section),
            FormRow::Field(field) => {
                let view = FieldView {
                    field,
                    value: form.draft.get(field),
                    error: form.errors.get(field),
                    is_active: form.active_field_name() == Some(field),
                    show_hint: show_hints,
                };
                draw_field(frame, row_area, &view);
            }
            FormRow::Submit => draw_submit(frame, row_area, form),
        }
    }
}

fn draw_heading(frame: &mut Frame, area: Rect, section: Section) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            section.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Color::Green),
        )),
    ]);
    frame.render_widget(heading, area);
}

fn draw_submit(frame: &mut Frame, area: Rect, form: &ApplicationForm) {
    let label = if form.is_submitting() {
        "Submitting Application..."
    } else {
        "Submit Application"
    };
    render_action_button(
        frame,
        area,
        label,
        form.is_submit_row_active(),
        !form.is_submitting(),
        Some(Color::Green),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Form;

    fn heights(rows: &[FormRow]) -> u16 {
        rows.iter().map(FormRow::height).sum()
    }

    #[test]
    fn test_rows_have_five_headings_and_submit() {
        let form = ApplicationForm::new();
        let rows = form_rows(&form);
        let headings = rows
            .iter()
            .filter(|r| matches!(r, FormRow::Heading(_)))
            .count();
        assert_eq!(headings, 5);
        assert_eq!(rows.first(), Some(&FormRow::Heading(Section::Personal)));
        assert_eq!(rows.last(), Some(&FormRow::Submit));
        assert_eq!(rows.len(), 20 + 5 + 1);
    }

    #[test]
    fn test_rows_include_description_only_when_yes() {
        let mut form = ApplicationForm::new();
        assert!(!form_rows(&form).contains(&FormRow::Field(FieldName::InternshipDescription)));
        form.set_value(FieldName::PreviousInternship, "yes");
        assert!(form_rows(&form).contains(&FormRow::Field(FieldName::InternshipDescription)));
    }

    #[test]
    fn test_no_scroll_at_top() {
        let form = ApplicationForm::new();
        let rows = form_rows(&form);
        assert_eq!(scroll_offset(&rows, active_row(&rows, &form), 20), 0);
    }

    #[test]
    fn test_scroll_keeps_submit_visible() {
        let mut form = ApplicationForm::new();
        form.set_active_field(100);
        let rows = form_rows(&form);
        let total = heights(&rows);
        let offset = scroll_offset(&rows, active_row(&rows, &form), 20);
        assert_eq!(offset, total - 20);
    }

    #[test]
    fn test_scroll_keeps_active_field_at_bottom_edge() {
        let mut form = ApplicationForm::new();
        form.focus_field(FieldName::State);
        let rows = form_rows(&form);
        let active = active_row(&rows, &form);
        assert_eq!(rows[active - 1], FormRow::Heading(Section::Address));

        let viewport = 10;
        let offset = scroll_offset(&rows, active, viewport);
        let bottom = heights(&rows[..=active]);
        assert_eq!(offset, bottom - viewport);
        // The section heading still fits above the field
        assert!(offset <= heights(&rows[..active - 1]));
    }

    #[test]
    fn test_scroll_with_tiny_viewport_anchors_row_top() {
        let mut form = ApplicationForm::new();
        form.focus_field(FieldName::City);
        let rows = form_rows(&form);
        let active = active_row(&rows, &form);
        let offset = scroll_offset(&rows, active, 2);
        assert_eq!(offset, heights(&rows[..active]));
    }
}
