use crate::app::action::{Action, InputId};
use crate::app::event::AppEvent;
use crate::app::nav::Screen;
use crate::app::state::*;
use crate::data::Subject;
use crate::ui::hit::{Hit, HitMap, SurfaceId};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Instant;
use tracing::{debug, info};

/// Turn one input event into actions. `hits` is the hit map from the most
/// recent render, so it matches what the user is looking at.
pub fn handle_event(
    state: &mut AppState,
    event: AppEvent,
    hits: &HitMap,
    now: Instant,
) -> Vec<Action> {
    state.now = now;
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, hits, now),
        AppEvent::Tick => handle_tick(state, now),
    }
}

fn handle_tick(state: &mut AppState, now: Instant) -> Vec<Action> {
    let mut actions = Vec::new();
    state.tick_count = state.tick_count.wrapping_add(1);

    if state.boot_timer.poll(now) {
        info!("splash timer fired");
        actions.push(Action::go(Screen::Home));
    }

    if state.surfaces.tick(now) || state.surfaces.animating() {
        state.dirty = true;
    }

    if state.toast_timer.poll(now) {
        state.toast = None;
        state.dirty = true;
    }

    // Spinner
    if state.nav.current() == Screen::Splash {
        state.dirty = true;
    }

    actions
}

fn handle_terminal(state: &mut AppState, event: CEvent, hits: &HitMap, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) => {
            state.dirty = true;
            handle_key(state, key, hits, now)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse, hits, now),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent, hits: &HitMap, now: Instant) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let Some(hit) = hits.at(mouse.column, mouse.row) else {
        if state.focused_input().is_some() {
            state.blur_inputs();
        }
        return vec![];
    };

    // Pressing anywhere but the focused field blurs it.
    if let Some(focused) = state.focused_input() {
        if hit.surface != state.input(focused).surface() {
            state.blur_inputs();
        }
    }

    let local = hit.local(mouse.column, mouse.row);
    press(state, hit, local, now)
}

/// Ripple and activation both originate here, from the same press. Disabled
/// surfaces swallow the press entirely.
fn press(state: &mut AppState, hit: &Hit, (x, y): (u16, u16), now: Instant) -> Vec<Action> {
    if !hit.enabled {
        debug!(surface = ?hit.surface, "press on disabled surface");
        return vec![];
    }
    if hit.ripples {
        state.surfaces.pointer_down(hit.surface, x, y, now);
        state.dirty = true;
    }
    hit.action.clone().into_iter().collect()
}

/// Keyboard activation: press the surface at its center, if it is on screen.
fn activate(state: &mut AppState, hits: &HitMap, surface: SurfaceId, now: Instant) -> Vec<Action> {
    match hits.find(surface) {
        Some(hit) => {
            let center = hit.center();
            press(state, hit, center, now)
        }
        None => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, hits: &HitMap, now: Instant) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    let screen = state.nav.current();
    if screen == Screen::Splash {
        // Only offered once the boot timer is spent, i.e. after logout.
        if key.code == KeyCode::Enter && !state.boot_timer.is_armed() {
            return activate(state, hits, SurfaceId::SignIn, now);
        }
        return vec![];
    }

    if state.nav.drawer_open() {
        return handle_drawer_key(state, key, hits, now);
    }

    if let Some(input) = state.focused_input() {
        return handle_input_key(state, input, key, hits, now);
    }

    match key.code {
        KeyCode::Esc if screen.has_back_arrow() => {
            return activate(state, hits, SurfaceId::BackButton, now);
        }
        KeyCode::Char('m') => {
            return activate(state, hits, SurfaceId::MenuButton, now);
        }
        KeyCode::Char(c @ '1'..='3') if screen.shows_bottom_nav() => {
            let idx = (c as usize) - ('1' as usize);
            return activate(state, hits, SurfaceId::BottomNav(idx), now);
        }
        _ => {}
    }

    match screen {
        Screen::Home => handle_home_key(state, key, hits, now),
        Screen::Search => handle_search_key(state, key, hits, now),
        Screen::Details => match key.code {
            KeyCode::Char('c') => activate(state, hits, SurfaceId::OpenChat, now),
            KeyCode::Char('r') => activate(state, hits, SurfaceId::RequestJoin, now),
            _ => vec![],
        },
        Screen::Chat => match key.code {
            KeyCode::Tab | KeyCode::Char('i') => activate(state, hits, SurfaceId::ChatInput, now),
            _ => vec![],
        },
        Screen::Notifications => match key.code {
            KeyCode::Char('x') => activate(state, hits, SurfaceId::ClearAll, now),
            _ => vec![],
        },
        Screen::Profile => handle_profile_key(state, key, hits, now),
        Screen::Splash => vec![],
    }
}

fn handle_drawer_key(state: &mut AppState, key: KeyEvent, hits: &HitMap, now: Instant) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => activate(state, hits, SurfaceId::Backdrop, now),
        KeyCode::Up => {
            state.drawer_cursor = state.drawer_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            state.drawer_cursor = (state.drawer_cursor + 1).min(state.drawer_len().saturating_sub(1));
            vec![]
        }
        KeyCode::Enter => {
            let idx = state.drawer_cursor;
            let surface = if idx < DRAWER_ITEMS.len() {
                SurfaceId::DrawerItem(idx)
            } else {
                match state.subscribed_groups().get(idx - DRAWER_ITEMS.len()) {
                    Some(g) => SurfaceId::DrawerGroup(g.id),
                    None => return vec![],
                }
            };
            activate(state, hits, surface, now)
        }
        _ => vec![],
    }
}

fn handle_input_key(
    state: &mut AppState,
    id: InputId,
    key: KeyEvent,
    hits: &HitMap,
    now: Instant,
) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => {
            state.blur_inputs();
            return vec![];
        }
        KeyCode::Enter => {
            let submit = match id {
                InputId::Search => SurfaceId::ApplyFilters,
                InputId::Chat => SurfaceId::SendMessage,
            };
            return activate(state, hits, submit, now);
        }
        _ => {}
    }

    let input = state.input_mut(id);
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    vec![]
}

fn handle_home_key(state: &mut AppState, key: KeyEvent, hits: &HitMap, now: Instant) -> Vec<Action> {
    let selected = state.home_selection().map(|g| g.id);
    match key.code {
        KeyCode::Up => {
            state.home_cursor = state.home_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            let last = state.visible_groups().len().saturating_sub(1);
            state.home_cursor = (state.home_cursor + 1).min(last);
            vec![]
        }
        KeyCode::Enter => match selected {
            Some(id) => activate(state, hits, SurfaceId::ViewInfo(id), now),
            None => vec![],
        },
        KeyCode::Char('j') => match selected {
            Some(id) => activate(state, hits, SurfaceId::JoinGroup(id), now),
            None => vec![],
        },
        KeyCode::Char('/') => activate(state, hits, SurfaceId::SearchIcon, now),
        KeyCode::Char('n') => activate(state, hits, SurfaceId::CreateGroupFab, now),
        KeyCode::Char('h') | KeyCode::Left => {
            let idx = chip_index(state.home_filter);
            let prev = if idx == 0 { Subject::ALL.len() } else { idx - 1 };
            activate(state, hits, SurfaceId::Chip(prev), now)
        }
        KeyCode::Char('l') | KeyCode::Right => {
            let next = (chip_index(state.home_filter) + 1) % (Subject::ALL.len() + 1);
            activate(state, hits, SurfaceId::Chip(next), now)
        }
        _ => vec![],
    }
}

/// Chip 0 is "All"; chip `i + 1` is `Subject::ALL[i]`.
pub fn chip_index(filter: Option<Subject>) -> usize {
    match filter {
        None => 0,
        Some(s) => Subject::ALL.iter().position(|x| *x == s).map_or(0, |i| i + 1),
    }
}

pub fn chip_subject(index: usize) -> Option<Subject> {
    index.checked_sub(1).and_then(|i| Subject::ALL.get(i).copied())
}

fn handle_search_key(state: &mut AppState, key: KeyEvent, hits: &HitMap, now: Instant) -> Vec<Action> {
    let results = state.search_results.as_deref().unwrap_or(&[]);
    match key.code {
        KeyCode::Tab | KeyCode::Char('i') => activate(state, hits, SurfaceId::SearchInput, now),
        KeyCode::Char('s') => activate(state, hits, SurfaceId::SubjectSelect, now),
        KeyCode::Enter => activate(state, hits, SurfaceId::ApplyFilters, now),
        KeyCode::Up => {
            state.search_cursor = state.search_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            let last = results.len().saturating_sub(1);
            state.search_cursor = (state.search_cursor + 1).min(last);
            vec![]
        }
        KeyCode::Char('o') => match results.get(state.search_cursor).copied() {
            Some(id) => activate(state, hits, SurfaceId::SearchResult(id), now),
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_profile_key(state: &mut AppState, key: KeyEvent, hits: &HitMap, now: Instant) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.profile_cursor = state.profile_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            let last = state.joined_groups().len().saturating_sub(1);
            state.profile_cursor = (state.profile_cursor + 1).min(last);
            vec![]
        }
        KeyCode::Enter => match state.joined_groups().get(state.profile_cursor) {
            Some(g) => {
                let id = g.id;
                activate(state, hits, SurfaceId::ProfileGroup(id), now)
            }
            None => vec![],
        },
        _ => vec![],
    }
}

/// Apply one action to the state.
pub fn apply_action(state: &mut AppState, action: Action, now: Instant) {
    state.dirty = true;
    match action {
        Action::Navigate { screen, group } => {
            let leaving = state.nav.current();
            let was_showing = state.nav.selected().map(|g| g.id);
            state.nav.transition(screen, group);
            let showing = state.nav.selected().map(|g| g.id);
            // Group screens share surface ids across groups.
            if leaving != screen || (screen.needs_group() && was_showing != showing) {
                state.unmount_screen();
            }
            if leaving == Screen::Splash && screen != Screen::Splash && state.boot_timer.is_armed() {
                debug!("splash left early, cancelling boot timer");
                state.boot_timer.cancel();
            }
        }
        Action::SetDrawer(open) => {
            if open {
                state.drawer_cursor = 0;
                state.blur_inputs();
            }
            state.nav.set_drawer_open(open);
        }
        Action::SelectChip(subject) => {
            state.home_filter = subject;
            state.home_cursor = 0;
        }
        Action::CycleSearchSubject => state.cycle_search_subject(),
        Action::ApplySearch => {
            state.blur_inputs();
            state.apply_search();
        }
        Action::FocusInput(id) => state.focus_input(id),
        Action::SendMessage => {
            let Some(id) = state.nav.selected().map(|g| g.id) else {
                return;
            };
            let text = state.chat_input.take();
            let text = text.trim();
            if !text.is_empty() {
                state.post_message(id, text.to_string());
            }
        }
        Action::RequestJoin(id) => {
            if state.join_requests.insert(id) {
                info!(group = id, "join requested");
                state.show_toast("Join request sent".to_string(), now);
            } else {
                state.show_toast("Join request already pending".to_string(), now);
            }
        }
        Action::ClearNotifications => state.notifications.clear(),
        Action::Toast(text) => state.show_toast(text, now),
        Action::Quit => state.should_quit = true,
    }
}
