use super::app_bar::{self, AppBar, Leading};
use crate::app::action::Action;
use crate::app::handler::chip_subject;
use crate::app::nav::Screen;
use crate::app::state::AppState;
use crate::components::{Button, ButtonColor, ButtonVariant, Card, Fab};
use crate::data::{Group, Subject};
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::layout::{inset, split_top};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

const CARD_HEIGHT: u16 = 7;
/// Below this body width the FAB shrinks to its mini size.
const COMPACT_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let body = app_bar::render(
        frame,
        area,
        AppBar {
            title: "StudyCircle",
            leading: Leading::Menu,
            trailing: Some((SurfaceId::SearchIcon, "⌕", Action::go(Screen::Search))),
        },
        state,
        hits,
    );

    let (chips, rest) = split_top(body, 2);
    render_chips(frame, chips, state, hits);

    let list = inset(rest, 1, 0);
    let groups = state.visible_groups();
    if groups.is_empty() && !list.is_empty() {
        frame.buffer_mut().set_stringn(
            list.x,
            list.y,
            "No groups for this subject yet.",
            list.width as usize,
            Theme::caption(),
        );
    }

    let fits = (list.height / CARD_HEIGHT).max(1) as usize;
    let cursor = state.home_cursor.min(groups.len().saturating_sub(1));
    let offset = cursor.saturating_sub(fits - 1);
    for (row, group) in groups.iter().skip(offset).take(fits).enumerate() {
        let y = list.y + row as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(list.bottom().saturating_sub(y));
        let card_area = Rect::new(list.x, y, list.width, height);
        render_card(frame, card_area, group, offset + row == cursor, state, hits);
    }

    let fab = Fab::new(SurfaceId::CreateGroupFab, "+")
        .mini(body.width < COMPACT_WIDTH)
        .on_press(Action::Toast("Create Group feature would open here!".into()));
    let rect = fab.anchored(body, 1);
    fab.render(frame, rect, &state.surfaces, state.now, hits);
}

fn render_chips(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    if area.is_empty() {
        return;
    }
    let selected = state.home_filter;
    let labels = std::iter::once("All").chain(Subject::ALL.iter().map(|s| s.label()));

    let mut x = area.x + 1;
    for (i, label) in labels.enumerate() {
        let text = format!(" {label} ");
        let width = text.width() as u16;
        if x + width > area.right() {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);
        let style = if chip_subject(i) == selected {
            Theme::chip_selected()
        } else {
            Theme::chip()
        };
        let surface = SurfaceId::Chip(i);
        let buf = frame.buffer_mut();
        buf.set_style(rect, style);
        state
            .surfaces
            .paint(buf, surface, rect, Theme::ripple_light(Theme::PRIMARY), state.now);
        buf.set_string(x, area.y, &text, Style::default());
        hits.push(Hit::new(surface, rect, Some(Action::SelectChip(chip_subject(i)))).rippling());
        x += width + 1;
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    group: &Group,
    selected: bool,
    state: &AppState,
    hits: &mut HitMap,
) {
    let inner = Card::new()
        .accent(selected)
        .pressable(
            SurfaceId::GroupCard(group.id),
            Action::go_with(Screen::Details, group),
        )
        .render(frame, area, hits);
    if inner.is_empty() {
        return;
    }
    let inner = inset(inner, 1, 0);
    let buf = frame.buffer_mut();
    let width = inner.width as usize;

    buf.set_stringn(inner.x, inner.y, &group.name, width, Theme::title());
    if inner.height > 1 {
        let tag = format!(" {} ", group.subject.label().to_uppercase());
        let tag_w = tag.width() as u16;
        buf.set_stringn(inner.x, inner.y + 1, &tag, width, Theme::subject_tag());
        if tag_w + 1 < inner.width {
            buf.set_stringn(
                inner.x + tag_w + 1,
                inner.y + 1,
                format!("{} members", group.members),
                (inner.width - tag_w - 1) as usize,
                Theme::caption(),
            );
        }
    }
    if inner.height > 2 {
        buf.set_stringn(inner.x, inner.y + 2, &group.description, width, Theme::body());
    }
    if inner.height > 4 {
        let row = Rect::new(inner.x, inner.y + 4, inner.width, 1);
        let view = Button::new(SurfaceId::ViewInfo(group.id), "View Info")
            .variant(ButtonVariant::Text)
            .on_press(Action::go_with(Screen::Details, group));
        let view_w = view.width();
        view.render(frame, row, &state.surfaces, state.now, hits);

        let join_x = (row.x + view_w + 1).min(row.right());
        let join_row = Rect::new(join_x, row.y, row.right() - join_x, 1);
        Button::new(SurfaceId::JoinGroup(group.id), "Join Group")
            .color(ButtonColor::Accent)
            .on_press(Action::go_with(Screen::Chat, group))
            .render(frame, join_row, &state.surfaces, state.now, hits);
    }
}
