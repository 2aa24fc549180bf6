use crate::app::action::Action;
use crate::app::nav::Screen;
use crate::app::state::AppState;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

const ITEMS: [(&str, &str); 3] = [("⌂", "Home"), ("♪", "Alerts"), ("☺", "Profile")];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Theme::GREY_200))
        .style(Style::default().bg(Theme::WHITE));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }

    let current = state.nav.current();
    let slot = inner.width / ITEMS.len() as u16;
    for (i, ((glyph, label), screen)) in ITEMS.iter().zip(Screen::BOTTOM_NAV).enumerate() {
        let x = inner.x + slot * i as u16;
        let width = if i == ITEMS.len() - 1 {
            inner.right() - x
        } else {
            slot
        };
        let rect = Rect::new(x, inner.y, width, inner.height);
        let style = if current == screen {
            Theme::nav_active()
        } else {
            Theme::nav_inactive()
        };

        let surface = SurfaceId::BottomNav(i);
        let buf = frame.buffer_mut();
        state
            .surfaces
            .paint(buf, surface, rect, Theme::ripple_dark(), state.now);
        let text = format!("{glyph} {label}");
        let text_w = text.chars().count() as u16;
        buf.set_stringn(
            rect.x + rect.width.saturating_sub(text_w) / 2,
            rect.y,
            &text,
            rect.width as usize,
            style,
        );
        hits.push(Hit::new(surface, rect, Some(Action::go(screen))).rippling());
    }
}
