//! Layout components (navbar, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FormStatus, ViewState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into navbar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Rectangle of the given size centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the top navbar
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();
    let brand = Line::from(vec![
        Span::styled(
            " ENIGMA",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" // ", Style::default().fg(Color::DarkGray)),
        Span::styled("INDUCTION", Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(brand), area);

    let label = format!("[{}] ", app.controller.view().label());
    let label_area = Rect {
        x: area.right().saturating_sub(label.len() as u16),
        width: (label.len() as u16).min(area.width),
        ..area
    };
    frame.render_widget(
        Paragraph::new(label).style(Style::default().fg(Color::DarkGray)),
        label_area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", view_hints(app.controller.view())),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            msg,
            Style::default().fg(app.config.accent_color()),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(view: ViewState) -> String {
    match view {
        ViewState::Landing => "Enter:register  q:quit".to_string(),
        ViewState::Loading => "Establishing uplink...".to_string(),
        ViewState::Form(FormStatus::Editing) => {
            format!("Tab/↓:next  S-Tab/↑:prev  Enter:open  ^U:clear  {SUBMIT_SHORTCUT}:submit")
        }
        ViewState::Form(FormStatus::Processing) => "Please wait...".to_string(),
        ViewState::Form(FormStatus::Success) => format!("{COPY_SHORTCUT}:copy link  q:quit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_centered_rect_centers() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(20, 10, area), Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn test_layout_reserves_bars() {
        let (nav, content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(nav.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(content.height, 22);
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in [
            ViewState::Landing,
            ViewState::Loading,
            ViewState::Form(FormStatus::Editing),
            ViewState::Form(FormStatus::Processing),
            ViewState::Form(FormStatus::Success),
        ] {
            assert!(!view_hints(view).is_empty());
        }
    }

    #[test]
    fn test_editing_hints_mention_submit() {
        assert!(view_hints(ViewState::Form(FormStatus::Editing)).contains(SUBMIT_SHORTCUT));
    }
}
