//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Per-frame inputs for drawing one field
pub struct FieldView<'a> {
    pub spec: &'static FieldSpec,
    pub value: &'a str,
    pub is_active: bool,
    pub error: Option<&'a str>,
    pub accent: Color,
}

impl FieldView<'_> {
    /// Rows the field occupies, borders included
    pub fn height(&self) -> u16 {
        self.spec.content_height() + 2
    }
}

/// Draw a form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let border_color = match (field.error.is_some(), field.is_active) {
        (true, _) => Color::Red,
        (false, true) => field.accent,
        (false, false) => Color::DarkGray,
    };

    let mut title = vec![Span::styled(
        format!(" {}", field.spec.label),
        Style::default().fg(if field.is_active {
            field.accent
        } else {
            Color::Gray
        }),
    )];
    if field.spec.marked {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    title.push(Span::raw(" "));

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let content = match field.spec.kind {
        FieldKind::Text { multiline } => text_content(field, multiline),
        FieldKind::Select(_) => select_content(field),
        FieldKind::Radio(options) => radio_content(field, options),
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn cursor(field: &FieldView) -> Span<'static> {
    if field.is_active {
        Span::styled("▌", Style::default().fg(field.accent))
    } else {
        Span::raw("")
    }
}

fn text_content<'a>(field: &FieldView<'a>, multiline: bool) -> Paragraph<'a> {
    let value_style = Style::default().fg(Color::White);
    let mut lines: Vec<Line> = if field.value.is_empty() {
        vec![Line::from(Span::styled(
            field.spec.placeholder,
            Style::default().fg(Color::DarkGray),
        ))]
    } else if multiline {
        field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(field.value, value_style))]
    };

    if let Some(prefix) = field.spec.prefix {
        if let Some(first) = lines.first_mut() {
            first.spans.insert(
                0,
                Span::styled(format!("{prefix} "), Style::default().fg(Color::Gray)),
            );
        }
    }

    if field.is_active {
        if field.value.is_empty() {
            // Cursor sits before the placeholder
            if let Some(first) = lines.first_mut() {
                let at = usize::from(field.spec.prefix.is_some());
                first.spans.insert(at, cursor(field));
            }
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor(field));
        }
    }

    // Keep the tail of long notes in view
    let overflow = lines.len().saturating_sub(field.spec.content_height() as usize);
    Paragraph::new(lines).scroll((overflow as u16, 0))
}

fn select_content<'a>(field: &FieldView<'a>) -> Paragraph<'a> {
    let text = if field.value.is_empty() {
        Span::styled(
            format!("Select {}", field.spec.label),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(field.value, Style::default().fg(Color::White))
    };
    Paragraph::new(Line::from(vec![
        text,
        Span::styled(" ▾", Style::default().fg(field.accent)),
    ]))
}

fn radio_content<'a>(
    field: &FieldView<'a>,
    options: &'static [(&'static str, &'static str)],
) -> Paragraph<'a> {
    let spans: Vec<Span> = options
        .iter()
        .flat_map(|(label, value)| {
            let chosen = *value == field.value;
            let style = if chosen {
                Style::default()
                    .fg(field.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            [
                Span::styled(if chosen { "(•) " } else { "( ) " }, style),
                Span::styled(*label, style),
                Span::raw("   "),
            ]
        })
        .collect();
    Paragraph::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(field: &FieldView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, field.height())).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), field))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn view(name: FieldName, value: &str) -> FieldView<'_> {
        FieldView {
            spec: name.spec(),
            value,
            is_active: false,
            error: None,
            accent: Color::Green,
        }
    }

    #[test]
    fn test_heights_follow_kind() {
        assert_eq!(view(FieldName::Name, "").height(), 3);
        assert_eq!(view(FieldName::Skills, "").height(), 5);
    }

    #[test]
    fn test_empty_text_shows_placeholder() {
        let spec = FieldName::Name.spec();
        assert!(render(&view(FieldName::Name, "")).contains(spec.placeholder));
    }

    #[test]
    fn test_marked_label_has_asterisk() {
        assert!(render(&view(FieldName::Name, "")).contains("Full Name *"));
    }

    #[test]
    fn test_prefix_precedes_value() {
        assert!(render(&view(FieldName::Whatsapp, "9999999999")).contains("+91 9999999999"));
    }

    #[test]
    fn test_empty_select_prompts() {
        let out = render(&view(FieldName::Branch, ""));
        assert!(out.contains("Select "));
        assert!(out.contains('▾'));
    }

    #[test]
    fn test_radio_marks_choice() {
        let out = render(&view(FieldName::Gender, "female"));
        assert!(out.contains("( ) Male"));
        assert!(out.contains("(•) Female"));
    }

    #[test]
    fn test_error_is_drawn() {
        let field = FieldView {
            error: Some("Link Required"),
            ..view(FieldName::Github, "")
        };
        assert!(render(&field).contains("Link Required"));
    }
}
