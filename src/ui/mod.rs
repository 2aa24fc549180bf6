mod app_bar;
mod bottom_nav;
mod chat;
mod details;
mod drawer;
pub mod hit;
mod home;
mod layout;
mod notifications;
mod profile;
mod search;
mod splash;
pub mod theme;

use crate::app::nav::Screen;
use crate::app::state::AppState;
use hit::HitMap;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use theme::Theme;

/// Draw the whole UI and record every interactive surface in `hits`.
pub fn render(frame: &mut Frame, state: &AppState, hits: &mut HitMap) {
    hits.clear();

    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BACKDROP)),
        frame.area(),
    );
    let area = layout::phone_frame(frame.area());

    let screen = state.nav.current();
    if screen == Screen::Splash {
        splash::render(frame, area, state, hits);
        return;
    }

    frame.render_widget(Block::default().style(Theme::screen()), area);
    let app_layout = layout::compute_layout(area, screen.shows_bottom_nav());

    match screen {
        Screen::Home => home::render(frame, app_layout.body, state, hits),
        Screen::Search => search::render(frame, app_layout.body, state, hits),
        Screen::Details => details::render(frame, app_layout.body, state, hits),
        Screen::Chat => chat::render(frame, app_layout.body, state, hits),
        Screen::Notifications => notifications::render(frame, app_layout.body, state, hits),
        Screen::Profile => profile::render(frame, app_layout.body, state, hits),
        Screen::Splash => {}
    }

    if let Some(nav_area) = app_layout.bottom_nav {
        bottom_nav::render(frame, nav_area, state, hits);
    }

    render_toast(frame, app_layout.toast, state);

    if state.nav.drawer_open() {
        drawer::render(frame, area, state, hits);
    }
}

fn render_toast(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(text) = &state.toast else {
        return;
    };
    let paragraph = Paragraph::new(format!(" {text} "))
        .style(Theme::toast())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::handler::apply_action;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(state: &AppState, width: u16, height: u16) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = HitMap::new();
        terminal.draw(|f| render(f, state, &mut hits)).unwrap();
        (screen_text(&terminal), hits)
    }

    fn state_on(screen: Screen, with_group: bool) -> AppState {
        let now = Instant::now();
        let mut state = AppState::new(AppConfig::default(), now);
        let group = with_group.then(|| state.groups[0].clone());
        apply_action(&mut state, Action::Navigate { screen, group }, now);
        state
    }

    #[test]
    fn splash_shows_brand() {
        let state = AppState::new(AppConfig::default(), Instant::now());
        let (text, hits) = draw(&state, 60, 24);
        assert!(text.contains("StudyCircle"));
        assert!(text.contains("FIND. JOIN. LEARN."));
        assert!(hits.find(hit::SurfaceId::SignIn).is_none());
    }

    #[test]
    fn every_screen_renders_at_common_sizes() {
        let screens = [
            Screen::Home,
            Screen::Search,
            Screen::Details,
            Screen::Chat,
            Screen::Notifications,
            Screen::Profile,
        ];
        for screen in screens {
            for (w, h) in [(80, 24), (60, 40), (30, 10), (8, 4)] {
                let state = state_on(screen, true);
                let _ = draw(&state, w, h);
            }
        }
    }

    #[test]
    fn chat_shows_group_name_and_messages() {
        let state = state_on(Screen::Chat, true);
        let (text, _) = draw(&state, 60, 30);
        assert!(text.contains("CALCULUS II STUDY GROUP"));
        assert!(text.contains("library room 304"));
    }

    #[test]
    fn details_without_group_is_blank() {
        let state = state_on(Screen::Details, false);
        let (text, hits) = draw(&state, 60, 30);
        assert!(!text.contains("ABOUT"));
        assert!(hits.is_empty());
    }

    #[test]
    fn bottom_nav_only_on_top_level_screens() {
        let (_, hits) = draw(&state_on(Screen::Home, false), 60, 30);
        assert!(hits.find(hit::SurfaceId::BottomNav(0)).is_some());
        let (_, hits) = draw(&state_on(Screen::Chat, true), 60, 30);
        assert!(hits.find(hit::SurfaceId::BottomNav(0)).is_none());
    }

    #[test]
    fn fab_shrinks_on_narrow_frames() {
        let state = state_on(Screen::Home, false);
        let (_, hits) = draw(&state, 60, 30);
        assert_eq!(hits.find(hit::SurfaceId::CreateGroupFab).map(|h| h.area.width), Some(7));
        let (_, hits) = draw(&state, 30, 30);
        assert_eq!(hits.find(hit::SurfaceId::CreateGroupFab).map(|h| h.area.width), Some(5));
    }

    #[test]
    fn toast_is_drawn() {
        let mut state = state_on(Screen::Home, false);
        state.show_toast("Saved".into(), Instant::now());
        let (text, _) = draw(&state, 60, 30);
        assert!(text.contains(" Saved "));
    }
}
