//! Loading transition rendering

use super::decor::{Decoration, NeonSpeeder, Plain};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let elapsed = app.view_elapsed();

    match (&app.loader_state, app.config.decorations_enabled()) {
        (Some(loader), true) => {
            NeonSpeeder::new(loader, app.config.accent_color()).render(frame, area, elapsed)
        }
        _ => {
            Plain.render(frame, area, elapsed);
            let dots = ".".repeat(1 + (elapsed.as_millis() / 400 % 3) as usize);
            let line_area = Rect {
                y: area.y + area.height / 2,
                height: area.height.min(1),
                ..area
            };
            frame.render_widget(
                Paragraph::new(format!("Loading{dots}"))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray)),
                line_area,
            );
        }
    }
}
