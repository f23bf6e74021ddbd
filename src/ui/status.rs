//! Processing and success panels shown in place of the form

use super::layout::centered_rect;
use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

const PANEL_WIDTH: u16 = 56;

fn panel(accent: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
}

/// Draw the simulated submission
pub fn draw_processing(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();
    let panel_area = centered_rect(PANEL_WIDTH, 9, area);
    let block = panel(accent);
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Icon
            Constraint::Length(1),
            Constraint::Length(1), // Message
            Constraint::Length(1),
            Constraint::Length(1), // Progress
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    // Blinking prompt
    let blink = app.view_elapsed().as_millis() / 500 % 2 == 0;
    let icon = Line::from(vec![
        Span::styled(">", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::styled(
            if blink { "_" } else { " " },
            Style::default().fg(accent),
        ),
    ]);
    frame.render_widget(Paragraph::new(icon).alignment(Alignment::Center), chunks[0]);

    let message = app.controller.loading_message().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(
            message,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[2],
    );

    let progress = app.controller.progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(Color::DarkGray))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));
    frame.render_widget(gauge, chunks[4]);
}

/// Draw the success confirmation with the community link
pub fn draw_success(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();
    let panel_area = centered_rect(PANEL_WIDTH, 13, area);
    let block = panel(accent);
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("✓", bold(accent))),
        Line::from(""),
        Line::from(Span::styled("REGISTRATION SUCCESSFUL", bold(Color::White))),
        Line::from(""),
        Line::from(Span::styled("JOIN OUR DISCORD", bold(accent))),
        Line::from(Span::styled(
            app.config.invite_url(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            "to explore crazy tasks",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{COPY_SHORTCUT}:copy link  q:quit"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
