//! Decorative animation widgets
//!
//! Decorations only draw; they hold no state of their own and are rebuilt
//! each frame from elapsed time (or the loader state).

use crate::state::LoaderState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Render-only backdrop
pub trait Decoration {
    fn render(&self, frame: &mut Frame, area: Rect, elapsed: Duration);
}

/// Draws nothing, used when decorations are turned off
pub struct Plain;

impl Decoration for Plain {
    fn render(&self, _frame: &mut Frame, _area: Rect, _elapsed: Duration) {}
}

const GLYPHS: [&str; 15] = [
    "</>", "{ }", "0x1F", "#!", "λ", "∑", "&&", "=>", "~$", "::", "//", "01", "[ ]", "%", "<<",
];

/// Tech glyphs drifting upward across the screen
pub struct FloatingGlyphs {
    color: Color,
}

impl FloatingGlyphs {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Column, row and text of every glyph visible at `elapsed`
    fn positions(area: Rect, elapsed: Duration) -> Vec<(u16, u16, &'static str)> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }
        let t = elapsed.as_secs_f32();

        GLYPHS
            .iter()
            .enumerate()
            .filter_map(|(i, glyph)| {
                // Loop length between 20 and 40 seconds
                let period = 20.0 + (i * 7 % 21) as f32;
                let phase = i as f32 / GLYPHS.len() as f32;
                let travelled = (t / period + phase).fract();

                let width = glyph.chars().count() as u16;
                let span = u32::from(area.width.saturating_sub(width));
                let x = area.x + (((i * 37 + 11) % 100) as u32 * span / 100) as u16;
                let y = area.y + ((1.0 - travelled) * area.height as f32) as u16;

                (y < area.bottom() && width <= area.width).then_some((x, y, *glyph))
            })
            .collect()
    }
}

impl Decoration for FloatingGlyphs {
    fn render(&self, frame: &mut Frame, area: Rect, elapsed: Duration) {
        let style = Style::default().fg(self.color).add_modifier(Modifier::DIM);
        for (x, y, glyph) in Self::positions(area, elapsed) {
            let cell = Rect {
                x,
                y,
                width: glyph.chars().count() as u16,
                height: 1,
            };
            frame.render_widget(Paragraph::new(Span::styled(glyph, style)), cell);
        }
    }
}

/// Speeder racing through light streaks, with a cycling caption
pub struct NeonSpeeder<'a> {
    loader: &'a LoaderState,
    color: Color,
}

impl<'a> NeonSpeeder<'a> {
    const STREAK_ROWS: u16 = 7;
    const STREAK_PERIOD: usize = 23;
    /// Columns per unit of distance
    const PACE: f32 = 18.0;
    const CRAFT: &'static str = "═╬══▶";

    pub fn new(loader: &'a LoaderState, color: Color) -> Self {
        Self { loader, color }
    }

    /// One row of streaks, scrolled by the distance travelled
    fn streak_row(width: u16, row: u16, distance: f32, speed: f32) -> String {
        let offset = (distance * Self::PACE) as usize + row as usize * 7;
        let length = (2.0 + speed * 2.0) as usize;
        (0..width as usize)
            .map(|col| {
                if (col + offset) % Self::STREAK_PERIOD < length {
                    '━'
                } else {
                    ' '
                }
            })
            .collect()
    }
}

impl Decoration for NeonSpeeder<'_> {
    fn render(&self, frame: &mut Frame, area: Rect, elapsed: Duration) {
        let rows = Self::STREAK_ROWS.min(area.height);
        let top = area.y + area.height.saturating_sub(rows + 2) / 2;
        let middle = rows / 2;

        // Faint flicker on the outer streaks
        let flicker = (elapsed.as_millis() / 120) % 2 == 0;

        for row in 0..rows {
            let style = if row == middle {
                Style::default().fg(self.color).add_modifier(Modifier::BOLD)
            } else if flicker && (row == 0 || row + 1 == rows) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(self.color).add_modifier(Modifier::DIM)
            };
            let line = Self::streak_row(area.width, row, self.loader.distance, self.loader.speed);
            let row_area = Rect {
                y: top + row,
                height: 1,
                ..area
            };
            frame.render_widget(Paragraph::new(Span::styled(line, style)), row_area);
        }

        let craft_width = Self::CRAFT.chars().count() as u16;
        if area.width >= craft_width {
            let craft_area = Rect {
                x: area.x + (area.width - craft_width) / 2,
                y: top + middle,
                width: craft_width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    Self::CRAFT,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                craft_area,
            );
        }

        let caption_y = top + rows + 1;
        if caption_y < area.bottom() {
            let caption = Line::from(vec![
                Span::styled(
                    self.loader.message(),
                    Style::default().fg(self.color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  x{:.1}", self.loader.speed),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let caption_area = Rect {
                y: caption_y,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(caption).alignment(Alignment::Center),
                caption_area,
            );
        }
    }
}
