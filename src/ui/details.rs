use super::app_bar::{self, AppBar, Leading};
use crate::app::action::Action;
use crate::app::nav::Screen;
use crate::app::state::AppState;
use crate::components::{Button, ButtonColor, ButtonVariant, Card};
use crate::ui::hit::{HitMap, SurfaceId};
use crate::ui::layout::{inset, split_bottom, split_top};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const MEMBERS_SHOWN: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let Some(group) = state.nav.group_for_view() else {
        return;
    };

    let body = app_bar::render(
        frame,
        area,
        AppBar {
            title: "Group Details",
            leading: Leading::Back,
            trailing: None,
        },
        state,
        hits,
    );
    let body = inset(body, 1, 0);
    let (content, actions) = split_bottom(body, 2);

    let (header, rest) = split_top(content, 4);
    if header.height > 1 {
        let buf = frame.buffer_mut();
        buf.set_stringn(header.x, header.y + 1, &group.name, header.width as usize, Theme::title());
        if header.height > 2 {
            let tag = format!(" {} ", group.subject.label().to_uppercase());
            let tag_w = tag.width() as u16;
            buf.set_stringn(header.x, header.y + 2, &tag, header.width as usize, Theme::subject_tag());
            if tag_w + 1 < header.width {
                buf.set_stringn(
                    header.x + tag_w + 1,
                    header.y + 2,
                    format!("☺ {} members", group.members),
                    (header.width - tag_w - 1) as usize,
                    Theme::caption(),
                );
            }
        }
    }

    let (about, rest) = split_top(rest, 5);
    let inner = Card::new().title("About").render(frame, about, hits);
    frame.render_widget(
        Paragraph::new(group.description.as_str())
            .style(Theme::body())
            .wrap(Wrap { trim: true }),
        inset(inner, 1, 0),
    );

    let (members, _) = split_top(rest, MEMBERS_SHOWN as u16 + 2);
    let inner = Card::new().title("Members").render(frame, members, hits);
    for i in 0..MEMBERS_SHOWN.min(inner.height as usize) {
        frame.buffer_mut().set_stringn(
            inner.x + 1,
            inner.y + i as u16,
            format!("☺ Student {}", i + 1),
            inner.width.saturating_sub(1) as usize,
            Theme::body(),
        );
    }

    let (_, row) = split_top(actions, 1);
    let half = row.width / 2;
    let left = Rect::new(row.x, row.y, half.saturating_sub(1), row.height);
    let right = Rect::new(row.x + half, row.y, row.width - half, row.height);
    let pending = state.join_requests.contains(&group.id);
    Button::new(
        SurfaceId::RequestJoin,
        if pending { "Requested" } else { "Request Join" },
    )
    .variant(ButtonVariant::Outlined)
    .full_width(true)
    .on_press(Action::RequestJoin(group.id))
    .render(frame, left, &state.surfaces, state.now, hits);
    Button::new(SurfaceId::OpenChat, "Open Chat")
        .color(ButtonColor::Accent)
        .full_width(true)
        .on_press(Action::go_with(Screen::Chat, group))
        .render(frame, right, &state.surfaces, state.now, hits);
}
