//! Landing screen rendering with ASCII art logo

use super::components::{render_button, BUTTON_HEIGHT};
use super::decor::{Decoration, FloatingGlyphs, Plain};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

const LOGO: [&str; 6] = [
    "███████╗███╗   ██╗██╗ ██████╗ ███╗   ███╗ █████╗ ",
    "██╔════╝████╗  ██║██║██╔════╝ ████╗ ████║██╔══██╗",
    "█████╗  ██╔██╗ ██║██║██║  ███╗██╔████╔██║███████║",
    "██╔══╝  ██║╚██╗██║██║██║   ██║██║╚██╔╝██║██╔══██║",
    "███████╗██║ ╚████║██║╚██████╔╝██║ ╚═╝ ██║██║  ██║",
    "╚══════╝╚═╝  ╚═══╝╚═╝ ╚═════╝ ╚═╝     ╚═╝╚═╝  ╚═╝",
];
const LOGO_WIDTH: u16 = 49;
const TAGLINE: &str = "DECODE  //  BUILD  //  BELONG";
/// Time for the logo to settle into place
const DROP_DURATION: Duration = Duration::from_millis(900);
/// Rows the logo falls from
const DROP_HEIGHT: f32 = 6.0;

/// Rows above its resting place the logo is drawn at, `elapsed` after entry
fn logo_lift(elapsed: Duration) -> u16 {
    let progress = (elapsed.as_secs_f32() / DROP_DURATION.as_secs_f32()).min(1.0);
    ((1.0 - simple_easing::cubic_out(progress)) * DROP_HEIGHT).round() as u16
}

/// Draw the landing screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let elapsed = app.view_elapsed();
    let accent = app.config.accent_color();

    if app.config.decorations_enabled() {
        FloatingGlyphs::new(accent).render(frame, area, elapsed);
    } else {
        Plain.render(frame, area, elapsed);
    }

    // logo + blank + tagline + blank + button
    let block_height = LOGO.len() as u16 + 2 + 1 + BUTTON_HEIGHT;
    let base_y = area.y + area.height.saturating_sub(block_height) / 2;
    let logo_y = base_y.saturating_sub(logo_lift(elapsed)).max(area.y);

    let logo_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let logo: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, logo_style)))
        .collect();
    let logo_area = Rect {
        x: area.x + area.width.saturating_sub(LOGO_WIDTH) / 2,
        y: logo_y,
        width: LOGO_WIDTH.min(area.width),
        height: (LOGO.len() as u16).min(area.bottom().saturating_sub(logo_y)),
    };
    frame.render_widget(Paragraph::new(logo), logo_area);

    let tagline_y = base_y + LOGO.len() as u16 + 1;
    if tagline_y < area.bottom() {
        let tagline_area = Rect {
            y: tagline_y,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(TAGLINE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            tagline_area,
        );
    }

    let button_y = tagline_y + 2;
    if button_y + BUTTON_HEIGHT <= area.bottom() {
        let button_width = 24u16.min(area.width);
        let button_area = Rect {
            x: area.x + (area.width - button_width) / 2,
            y: button_y,
            width: button_width,
            height: BUTTON_HEIGHT,
        };
        render_button(frame, button_area, "REGISTER HERE", true, accent);
    }

    let hint = "Press Enter to begin";
    if area.height > block_height + 2 {
        let hint_area = Rect {
            y: area.bottom() - 2,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}
