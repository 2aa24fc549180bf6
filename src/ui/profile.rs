use super::app_bar::{self, AppBar, Leading};
use crate::app::action::Action;
use crate::app::nav::Screen;
use crate::app::state::AppState;
use crate::components::Card;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::layout::{inset, split_top};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

// Shown as-is; there is no backend to count against.
const STATS: [(&str, &str); 2] = [("12", "Groups"), ("48", "Friends")];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let body = app_bar::render(
        frame,
        area,
        AppBar {
            title: "My Profile",
            leading: Leading::Menu,
            trailing: None,
        },
        state,
        hits,
    );
    let body = inset(body, 1, 0);
    let profile = &state.config.profile;

    let (header, rest) = split_top(body, 5);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "( ☺ )",
            Style::default().fg(Theme::PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.name.as_str(), Theme::title())),
        Line::from(Span::styled(profile.department.as_str(), Theme::caption())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), header);

    let (stats, rest) = split_top(rest, 4);
    let inner = Card::new().render(frame, stats, hits);
    if inner.height >= 2 {
        let half = inner.width / 2;
        for (i, (value, label)) in STATS.iter().enumerate() {
            let col = Rect::new(inner.x + half * i as u16, inner.y, half, 2);
            let text = vec![
                Line::from(Span::styled(
                    *value,
                    Style::default().fg(Theme::PRIMARY).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, Theme::caption())),
            ];
            frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), col);
        }
    }

    let (_, groups_area) = split_top(rest, 1);
    let joined = state.joined_groups();
    let height = (joined.len() as u16 + 2).min(groups_area.height);
    let inner = Card::new()
        .title("My Groups")
        .render(frame, Rect::new(groups_area.x, groups_area.y, groups_area.width, height), hits);
    for (i, group) in joined.iter().enumerate().take(inner.height as usize) {
        let rect = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let buf = frame.buffer_mut();
        if i == state.profile_cursor {
            buf.set_style(rect, Theme::selected_row());
        }
        let surface = SurfaceId::ProfileGroup(group.id);
        state
            .surfaces
            .paint(buf, surface, rect, Theme::ripple_dark(), state.now);
        buf.set_stringn(
            rect.x + 1,
            rect.y,
            format!("● {}", group.name),
            rect.width.saturating_sub(3) as usize,
            Theme::body(),
        );
        if rect.width > 2 {
            buf.set_string(rect.right() - 2, rect.y, "›", Theme::caption());
        }
        hits.push(
            Hit::new(surface, rect, Some(Action::go_with(Screen::Details, group))).rippling(),
        );
    }
}
