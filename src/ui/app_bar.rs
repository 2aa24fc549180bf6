use crate::app::action::Action;
use crate::app::nav::Screen;
use crate::app::state::AppState;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crate::ui::layout::{split_top, APP_BAR_HEIGHT};
use crate::ui::theme::Theme;
use ratatui::prelude::*;

const ICON_WIDTH: u16 = 5;

pub enum Leading {
    /// Opens the drawer.
    Menu,
    /// Goes back to home.
    Back,
}

pub struct AppBar<'a> {
    pub title: &'a str,
    pub leading: Leading,
    pub trailing: Option<(SurfaceId, &'static str, Action)>,
}

/// Draw the bar at the top of `area` and return the area below it.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    bar: AppBar<'_>,
    state: &AppState,
    hits: &mut HitMap,
) -> Rect {
    let (bar_area, rest) = split_top(area, APP_BAR_HEIGHT);
    if bar_area.is_empty() {
        return rest;
    }
    frame.buffer_mut().set_style(bar_area, Theme::app_bar());

    let (surface, glyph, action) = match bar.leading {
        Leading::Menu => (SurfaceId::MenuButton, "≡", Action::SetDrawer(true)),
        Leading::Back => (SurfaceId::BackButton, "←", Action::go(Screen::Home)),
    };
    let leading = Rect::new(bar_area.x, bar_area.y, ICON_WIDTH.min(bar_area.width), bar_area.height);
    icon_button(frame, leading, glyph, surface, action, state, hits);

    let mut title_right = bar_area.right();
    if let Some((surface, glyph, action)) = bar.trailing {
        let x = bar_area.right().saturating_sub(ICON_WIDTH).max(leading.right());
        let trailing = Rect::new(x, bar_area.y, bar_area.right() - x, bar_area.height);
        icon_button(frame, trailing, glyph, surface, action, state, hits);
        title_right = x;
    }

    let title_x = leading.right() + 1;
    if title_right > title_x {
        frame.buffer_mut().set_stringn(
            title_x,
            bar_area.y + bar_area.height / 2,
            bar.title.to_uppercase(),
            (title_right - title_x) as usize,
            Theme::app_bar(),
        );
    }
    rest
}

/// A borderless glyph button on the app bar's primary fill.
pub fn icon_button(
    frame: &mut Frame,
    rect: Rect,
    glyph: &str,
    surface: SurfaceId,
    action: Action,
    state: &AppState,
    hits: &mut HitMap,
) {
    if rect.is_empty() {
        return;
    }
    let buf = frame.buffer_mut();
    state
        .surfaces
        .paint(buf, surface, rect, Theme::ripple_light(Theme::PRIMARY), state.now);
    buf.set_string(
        rect.x + rect.width / 2,
        rect.y + rect.height / 2,
        glyph,
        Style::default().fg(Theme::WHITE).add_modifier(Modifier::BOLD),
    );
    hits.push(Hit::new(surface, rect, Some(action)).rippling());
}
