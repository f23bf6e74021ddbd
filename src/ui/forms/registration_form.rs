//! Registration form rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::{FieldKind, FieldSpec, Form, RegistrationForm, Section, FIELDS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Widest the form column grows
const MAX_FORM_WIDTH: u16 = 72;
/// Most dropdown options shown at once
const MAX_DROPDOWN_ROWS: u16 = 8;

/// One entry of the scrollable form column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Heading(Section),
    Field(&'static FieldSpec),
    Submit,
}

/// Row placed at a virtual offset from the top of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Row {
    kind: RowKind,
    top: u16,
    height: u16,
}

impl Row {
    fn bottom(&self) -> u16 {
        self.top + self.height
    }

    /// Position in focus order, headings have none
    fn focus_index(&self) -> Option<usize> {
        match self.kind {
            RowKind::Heading(_) => None,
            RowKind::Field(spec) => Some(spec.name as usize),
            RowKind::Submit => Some(RegistrationForm::SUBMIT_ROW),
        }
    }
}

/// Lay out every heading, field and the submit button top to bottom
fn form_rows() -> Vec<Row> {
    let mut rows = Vec::with_capacity(FIELDS.len() + Section::ALL.len() + 1);
    let mut top = 0;

    for section in Section::ALL {
        rows.push(Row {
            kind: RowKind::Heading(section),
            top,
            height: 1,
        });
        top += 1;
        for spec in section.fields() {
            let height = spec.content_height() + 2;
            rows.push(Row {
                kind: RowKind::Field(spec),
                top,
                height,
            });
            top += height;
        }
        top += 1;
    }
    rows.push(Row {
        kind: RowKind::Submit,
        top,
        height: BUTTON_HEIGHT,
    });
    rows
}

/// Scroll offset that brings the focused row into view
fn scroll_offset(rows: &[Row], active: usize, viewport: u16) -> u16 {
    rows.iter()
        .find(|r| r.focus_index() == Some(active))
        .map_or(0, |row| row.bottom().saturating_sub(viewport).min(row.top))
}

/// Screen area of a row, clipped at the bottom of the viewport.
/// Rows starting above the scroll offset or below the viewport are hidden.
fn visible_rect(row: &Row, offset: u16, viewport: Rect) -> Option<Rect> {
    let top = row.top.checked_sub(offset)?;
    if top >= viewport.height {
        return None;
    }
    Some(Rect {
        y: viewport.y + top,
        height: row.height.min(viewport.height - top),
        ..viewport
    })
}

/// Draw the registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();
    let width = MAX_FORM_WIDTH.min(area.width);
    let outer = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" >_ ", Style::default().fg(accent)),
            Span::styled(
                "REGISTRATION ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let viewport = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    if viewport.width == 0 || viewport.height == 0 {
        return;
    }

    let form = &app.state.form;
    let data = app.controller.data();
    let errors = app.controller.errors();
    let rows = form_rows();
    let offset = scroll_offset(&rows, form.active_field(), viewport.height);
    let mut active_rect = None;

    for row in &rows {
        let Some(rect) = visible_rect(row, offset, viewport) else {
            continue;
        };

        match row.kind {
            RowKind::Heading(section) => {
                let heading = Line::from(vec![
                    Span::styled("// ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        section.title(),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                ]);
                frame.render_widget(Paragraph::new(heading), rect);
            }
            RowKind::Field(spec) => {
                let is_active = form.active_field() == spec.name as usize;
                if is_active {
                    active_rect = Some(rect);
                }
                let field = FieldView {
                    spec,
                    value: data.get(spec.name),
                    is_active,
                    error: errors.get(&spec.name).map(String::as_str),
                    accent,
                };
                draw_field(frame, rect, &field);
            }
            RowKind::Submit => {
                let button_width = 30u16.min(rect.width);
                let button = Rect {
                    x: rect.x + (rect.width - button_width) / 2,
                    width: button_width,
                    ..rect
                };
                render_button(
                    frame,
                    button,
                    "Initialize Registration",
                    form.is_submit_row_active(),
                    accent,
                );
            }
        }
    }

    if let (Some(dropdown), Some(spec), Some(anchor)) =
        (form.dropdown, form.active_spec(), active_rect)
    {
        if let FieldKind::Select(options) = spec.kind {
            draw_dropdown(frame, area, anchor, options, dropdown.highlighted, accent);
        }
    }
}

/// Option list below (or above) the select field it belongs to
fn draw_dropdown(
    frame: &mut Frame,
    bounds: Rect,
    anchor: Rect,
    options: &[&str],
    highlighted: usize,
    accent: Color,
) {
    let height = (options.len() as u16).min(MAX_DROPDOWN_ROWS) + 2;
    let below = bounds.bottom().saturating_sub(anchor.bottom());
    let y = if below >= height {
        anchor.bottom()
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    let area = Rect {
        x: anchor.x + 2,
        y,
        width: anchor.width.saturating_sub(4),
        height: height.min(bounds.height),
    };
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| ListItem::new(format!(" {option}")))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(highlighted));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;

    fn row_of(rows: &[Row], index: usize) -> Row {
        rows.iter()
            .copied()
            .find(|r| r.focus_index() == Some(index))
            .unwrap()
    }

    #[test]
    fn test_rows_follow_field_order() {
        let focusable: Vec<usize> = form_rows().iter().filter_map(Row::focus_index).collect();
        let expected: Vec<usize> = (0..=RegistrationForm::SUBMIT_ROW).collect();
        assert_eq!(focusable, expected);
    }

    #[test]
    fn test_every_section_has_a_heading() {
        let headings = form_rows()
            .iter()
            .filter(|r| matches!(r.kind, RowKind::Heading(_)))
            .count();
        assert_eq!(headings, Section::ALL.len());
    }

    #[test]
    fn test_rows_do_not_overlap() {
        let rows = form_rows();
        for pair in rows.windows(2) {
            assert!(pair[0].bottom() <= pair[1].top);
        }
    }

    #[test]
    fn test_multiline_field_is_taller() {
        let rows = form_rows();
        assert_eq!(row_of(&rows, FieldName::Skills as usize).height, 5);
        assert_eq!(row_of(&rows, FieldName::Name as usize).height, 3);
    }

    #[test]
    fn test_no_scroll_when_focus_fits() {
        assert_eq!(scroll_offset(&form_rows(), 0, 20), 0);
    }

    #[test]
    fn test_scroll_keeps_focus_visible() {
        let rows = form_rows();
        let viewport = 20;
        for index in 0..=RegistrationForm::SUBMIT_ROW {
            let row = row_of(&rows, index);
            let offset = scroll_offset(&rows, index, viewport);
            assert!(row.top >= offset, "row {index} above viewport");
            assert!(row.bottom() - offset <= viewport, "row {index} below viewport");
        }
    }

    #[test]
    fn test_scroll_reaches_submit_button() {
        let rows = form_rows();
        let last = rows.last().unwrap();
        assert_eq!(
            scroll_offset(&rows, RegistrationForm::SUBMIT_ROW, 20),
            last.bottom() - 20
        );
    }

    mod clipping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_focused_row_taller_than_viewport_is_clipped() {
            let rows = form_rows();
            let skills = row_of(&rows, FieldName::Skills as usize);
            let viewport = Rect::new(2, 4, 40, 3);

            let offset = scroll_offset(&rows, FieldName::Skills as usize, viewport.height);
            assert_eq!(
                visible_rect(&skills, offset, viewport),
                Some(Rect::new(2, 4, 40, 3))
            );
        }

        #[test]
        fn test_row_overhanging_bottom_is_clipped() {
            let row = Row {
                kind: RowKind::Submit,
                top: 8,
                height: BUTTON_HEIGHT,
            };
            let viewport = Rect::new(0, 1, 30, 10);
            assert_eq!(visible_rect(&row, 0, viewport), Some(Rect::new(0, 9, 30, 2)));
        }

        #[test]
        fn test_rows_outside_viewport_are_hidden() {
            let row = Row {
                kind: RowKind::Submit,
                top: 5,
                height: BUTTON_HEIGHT,
            };
            let viewport = Rect::new(0, 0, 30, 10);
            assert_eq!(visible_rect(&row, 6, viewport), None);
            assert_eq!(visible_rect(&row, 0, Rect { height: 5, ..viewport }), None);
        }

        #[test]
        fn test_short_terminal_still_draws_focused_field() {
            use crate::config::InductionConfig;
            use crate::timer::{MockScheduler, TimerEvent, TimerHandle};
            use ratatui::{backend::TestBackend, Terminal};
            use tokio::sync::mpsc::unbounded_channel;

            let mut scheduler = MockScheduler::new();
            scheduler
                .expect_once()
                .returning(|_, _| TimerHandle::detached());
            let (tx, rx) = unbounded_channel();
            let mut app = App::with_scheduler(InductionConfig::default(), Box::new(scheduler), rx);
            app.controller.start();
            tx.send(TimerEvent::LoadingElapsed).unwrap();
            app.poll_timers();
            app.state.form.focus(FieldName::Skills.spec());

            // Two border rows leave a three-row viewport
            let mut terminal = Terminal::new(TestBackend::new(60, 5)).unwrap();
            terminal
                .draw(|frame| draw_registration(frame, frame.area(), &app))
                .unwrap();
            let screen: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|c| c.symbol())
                .collect();
            assert!(screen.contains("Skills"));
        }
    }
}
