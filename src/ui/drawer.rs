use crate::app::action::Action;
use crate::app::nav::Screen;
use crate::app::state::{AppState, DRAWER_ITEMS};
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::layout::split_top;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear};

const MAX_WIDTH: u16 = 30;

/// Panel width: 80% of the frame, capped.
pub fn panel_width(frame_width: u16) -> u16 {
    (frame_width * 4 / 5).min(MAX_WIDTH)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    // Dim everything beneath; the backdrop swallows presses outside the panel.
    let dim = Theme::blend(Theme::SURFACE, Color::Rgb(0, 0, 0), 0.5);
    frame.buffer_mut().set_style(area, Style::default().bg(dim));
    hits.push(Hit::new(SurfaceId::Backdrop, area, Some(Action::SetDrawer(false))));

    let panel = Rect::new(area.x, area.y, panel_width(area.width), area.height);
    frame.render_widget(Clear, panel);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::WHITE)), panel);
    hits.push(Hit::new(SurfaceId::DrawerPanel, panel, None));

    let (header, list) = split_top(panel, 4);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Theme::PRIMARY_DARK))
        .style(Theme::app_bar());
    let inner = block.inner(header);
    frame.render_widget(block, header);
    if inner.height >= 2 {
        let profile = &state.config.profile;
        let buf = frame.buffer_mut();
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            &profile.name,
            inner.width.saturating_sub(1) as usize,
            Theme::app_bar(),
        );
        buf.set_stringn(
            inner.x + 1,
            inner.y + 1,
            &profile.email,
            inner.width.saturating_sub(1) as usize,
            Style::default().fg(Theme::GREY_200).bg(Theme::PRIMARY),
        );
    }

    let mut y = list.y;
    for (i, (label, glyph, screen)) in DRAWER_ITEMS.iter().enumerate() {
        if y >= list.bottom() {
            return;
        }
        let row = Rect::new(list.x, y, list.width, 1);
        let text = format!(" {glyph}  {label}");
        entry(
            frame,
            row,
            &text,
            SurfaceId::DrawerItem(i),
            Action::go(*screen),
            i == state.drawer_cursor,
            state,
            hits,
        );
        y += 1;
    }

    y += 1;
    if y >= list.bottom() {
        return;
    }
    frame.buffer_mut().set_stringn(
        list.x + 1,
        y,
        "SUBSCRIBED",
        list.width.saturating_sub(1) as usize,
        Theme::caption(),
    );
    y += 1;

    for (i, group) in state.subscribed_groups().iter().enumerate() {
        if y >= list.bottom() {
            return;
        }
        let row = Rect::new(list.x, y, list.width, 1);
        let text = format!(" #  {}", group.name);
        let cursor = DRAWER_ITEMS.len() + i;
        entry(
            frame,
            row,
            &text,
            SurfaceId::DrawerGroup(group.id),
            Action::go_with(Screen::Details, group),
            cursor == state.drawer_cursor,
            state,
            hits,
        );
        y += 1;
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    frame: &mut Frame,
    row: Rect,
    text: &str,
    surface: SurfaceId,
    action: Action,
    selected: bool,
    state: &AppState,
    hits: &mut HitMap,
) {
    let buf = frame.buffer_mut();
    if selected {
        buf.set_style(row, Theme::selected_row());
    }
    state
        .surfaces
        .paint(buf, surface, row, Theme::ripple_dark(), state.now);
    buf.set_stringn(row.x, row.y, text, row.width as usize, Theme::body());
    hits.push(Hit::new(surface, row, Some(action)).rippling());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_eighty_percent_capped() {
        assert_eq!(panel_width(60), 30);
        assert_eq!(panel_width(30), 24);
        assert_eq!(panel_width(5), 4);
    }
}
