use super::app_bar::{self, AppBar, Leading};
use crate::app::action::Action;
use crate::app::nav::Screen;
use crate::app::state::AppState;
use crate::components::{Button, ButtonColor, Card, TextInput};
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::layout::{inset, split_top};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let body = app_bar::render(
        frame,
        area,
        AppBar {
            title: "Find Groups",
            leading: Leading::Back,
            trailing: None,
        },
        state,
        hits,
    );
    let body = inset(body, 1, 0);

    let (_, rest) = split_top(body, 1);
    let (input_area, rest) = split_top(rest, TextInput::HEIGHT);
    state
        .search_input
        .render(frame, input_area, &state.surfaces, state.now, hits);

    let (select_area, rest) = split_top(rest, 3);
    render_subject_select(frame, select_area, state, hits);

    let (location, rest) = split_top(rest, 2);
    if !location.is_empty() {
        frame.buffer_mut().set_stringn(
            location.x + 1,
            location.y,
            "⌖ Current Location (Campus)",
            location.width.saturating_sub(1) as usize,
            Theme::body(),
        );
    }

    let (apply_area, rest) = split_top(rest, 2);
    Button::new(SurfaceId::ApplyFilters, "Apply Filters")
        .color(ButtonColor::Accent)
        .full_width(true)
        .on_press(Action::ApplySearch)
        .render(frame, apply_area, &state.surfaces, state.now, hits);

    render_results(frame, rest, state, hits);
}

fn render_subject_select(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::input_idle())
        .title(" Subject ")
        .style(Style::default().bg(Theme::WHITE).fg(Theme::TEXT));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }
    let label = state.search_subject.map_or("Any Subject", |s| s.label());
    let buf = frame.buffer_mut();
    state
        .surfaces
        .paint(buf, SurfaceId::SubjectSelect, inner, Theme::ripple_dark(), state.now);
    buf.set_stringn(inner.x, inner.y, label, inner.width as usize, Theme::title());
    if inner.width > 2 {
        buf.set_string(inner.right() - 1, inner.y, "▾", Theme::caption());
    }
    hits.push(Hit::new(SurfaceId::SubjectSelect, area, Some(Action::CycleSearchSubject)).rippling());
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let Some(results) = &state.search_results else {
        return;
    };
    let title = format!("Results ({})", results.len());
    let inner = Card::new().title(&title).render(frame, area, hits);
    if inner.is_empty() {
        return;
    }
    if results.is_empty() {
        frame.buffer_mut().set_stringn(
            inner.x + 1,
            inner.y,
            "No matching groups.",
            inner.width.saturating_sub(1) as usize,
            Theme::caption(),
        );
        return;
    }

    let rows = inner.height as usize;
    let offset = state.search_cursor.saturating_sub(rows.saturating_sub(1));
    let groups = results.iter().filter_map(|id| state.group(*id));
    for (row, group) in groups.enumerate().skip(offset).take(rows) {
        let y = inner.y + (row - offset) as u16;
        let rect = Rect::new(inner.x, y, inner.width, 1);
        let buf = frame.buffer_mut();
        if row == state.search_cursor {
            buf.set_style(rect, Theme::selected_row());
        }
        let surface = SurfaceId::SearchResult(group.id);
        state
            .surfaces
            .paint(buf, surface, rect, Theme::ripple_dark(), state.now);
        let text = format!(" {}  · {} · {} members", group.name, group.subject, group.members);
        buf.set_stringn(rect.x, rect.y, text, rect.width as usize, Theme::body());
        hits.push(
            Hit::new(surface, rect, Some(Action::go_with(Screen::Details, group))).rippling(),
        );
    }
}
