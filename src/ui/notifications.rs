use super::app_bar::{self, AppBar, Leading};
use crate::app::action::Action;
use crate::app::state::AppState;
use crate::components::{Button, ButtonVariant, Card};
use crate::ui::hit::{HitMap, SurfaceId};
use crate::ui::layout::{inset, split_top};
use crate::ui::theme::Theme;
use ratatui::prelude::*;

const ITEM_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let body = app_bar::render(
        frame,
        area,
        AppBar {
            title: "Notifications",
            leading: Leading::Menu,
            trailing: None,
        },
        state,
        hits,
    );
    let body = inset(body, 1, 0);

    let (header, list) = split_top(body, 2);
    if !header.is_empty() {
        frame.buffer_mut().set_stringn(
            header.x,
            header.y,
            "RECENT",
            header.width as usize,
            Theme::caption(),
        );
        let clear = Button::new(SurfaceId::ClearAll, "Clear all")
            .variant(ButtonVariant::Text)
            .on_press(Action::ClearNotifications);
        let width = clear.width().min(header.width);
        let rect = Rect::new(header.right() - width, header.y, width, 1);
        clear.render(frame, rect, &state.surfaces, state.now, hits);
    }

    if state.notifications.is_empty() {
        if !list.is_empty() {
            frame.buffer_mut().set_stringn(
                list.x,
                list.y,
                "You're all caught up.",
                list.width as usize,
                Theme::caption(),
            );
        }
        return;
    }

    for (i, n) in state.notifications.iter().enumerate() {
        let y = list.y + i as u16 * ITEM_HEIGHT;
        if y >= list.bottom() {
            break;
        }
        let height = ITEM_HEIGHT.min(list.bottom() - y);
        let inner = Card::new().render(frame, Rect::new(list.x, y, list.width, height), hits);
        if inner.is_empty() {
            continue;
        }
        let buf = frame.buffer_mut();
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            format!("♪ {}", n.text),
            inner.width.saturating_sub(1) as usize,
            Theme::body(),
        );
        if inner.height > 1 {
            buf.set_stringn(
                inner.x + 3,
                inner.y + 1,
                &n.time,
                inner.width.saturating_sub(3) as usize,
                Theme::caption(),
            );
        }
    }
}
