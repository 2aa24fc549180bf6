use crate::app::action::Action;
use crate::components::Surfaces;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use std::time::Instant;

// Screens only use the accent fill so far.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FabColor {
    Primary,
    #[default]
    Accent,
}

impl FabColor {
    pub fn fill(self) -> Color {
        match self {
            FabColor::Primary => Theme::PRIMARY,
            FabColor::Accent => Theme::ACCENT,
        }
    }
}

/// Floating action button: a square-ish glyph tile anchored by the caller.
#[derive(Debug, Clone)]
pub struct Fab {
    id: SurfaceId,
    glyph: &'static str,
    color: FabColor,
    mini: bool,
    on_press: Option<Action>,
}

impl Fab {
    pub const LARGE: (u16, u16) = (7, 3);
    pub const MINI: (u16, u16) = (5, 3);

    pub fn new(id: SurfaceId, glyph: &'static str) -> Self {
        Self {
            id,
            glyph,
            color: FabColor::default(),
            mini: false,
            on_press: None,
        }
    }

    #[allow(dead_code)]
    pub fn color(mut self, color: FabColor) -> Self {
        self.color = color;
        self
    }

    pub fn mini(mut self, mini: bool) -> Self {
        self.mini = mini;
        self
    }

    pub fn on_press(mut self, action: Action) -> Self {
        self.on_press = Some(action);
        self
    }

    /// (width, height) in cells.
    pub fn size(&self) -> (u16, u16) {
        if self.mini {
            Self::MINI
        } else {
            Self::LARGE
        }
    }

    /// Anchor to the bottom-right corner of `area`, inset by `margin` cells.
    pub fn anchored(&self, area: Rect, margin: u16) -> Rect {
        let (w, h) = self.size();
        let x = area.right().saturating_sub(w + margin).max(area.x);
        let y = area.bottom().saturating_sub(h + margin).max(area.y);
        Rect::new(x, y, w, h).intersection(area)
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        rect: Rect,
        surfaces: &Surfaces,
        now: Instant,
        hits: &mut HitMap,
    ) {
        if rect.is_empty() {
            return;
        }
        let fill = self.color.fill();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::blend(fill, Color::Rgb(0, 0, 0), 0.3)))
            .style(Style::default().bg(fill).fg(Theme::WHITE));
        frame.render_widget(block, rect);

        let buf = frame.buffer_mut();
        surfaces.paint(buf, self.id, rect, Theme::ripple_light(fill), now);
        let cx = rect.x + rect.width / 2;
        let cy = rect.y + rect.height / 2;
        buf.set_string(
            cx,
            cy,
            self.glyph,
            Style::default().fg(Theme::WHITE).add_modifier(Modifier::BOLD),
        );

        hits.push(Hit::new(self.id, rect, self.on_press.clone()).rippling());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_large_accent() {
        let fab = Fab::new(SurfaceId::CreateGroupFab, "+");
        assert_eq!(fab.size(), Fab::LARGE);
        assert_eq!(fab.color, FabColor::Accent);
        assert_eq!(fab.color.fill(), Theme::ACCENT);
    }

    #[test]
    fn mini_is_smaller() {
        let fab = Fab::new(SurfaceId::CreateGroupFab, "+").mini(true);
        assert_eq!(fab.size(), Fab::MINI);
        assert!(Fab::MINI.0 < Fab::LARGE.0);
    }

    #[test]
    fn anchors_bottom_right() {
        let fab = Fab::new(SurfaceId::CreateGroupFab, "+").color(FabColor::Primary);
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(fab.anchored(area, 1), Rect::new(32, 16, 7, 3));
    }

    #[test]
    fn anchoring_clips_to_tiny_areas() {
        let fab = Fab::new(SurfaceId::CreateGroupFab, "+");
        let area = Rect::new(5, 5, 4, 2);
        let rect = fab.anchored(area, 1);
        assert!(area.contains(rect.as_position()) || rect.is_empty());
        assert!(rect.width <= 4 && rect.height <= 2);
    }
}
