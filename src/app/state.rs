use crate::app::action::InputId;
use crate::app::nav::{Navigation, Screen};
use crate::app::timer::OneShot;
use crate::components::{Surfaces, TextInput};
use crate::config::model::DEFAULT_TIMESTAMP_FORMAT;
use crate::config::AppConfig;
use crate::data::{self, ChatMessage, Group, GroupId, Notification, Subject};
use chrono::Local;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::time::{Duration, Instant};
use tracing::warn;

/// Fixed drawer destinations, top to bottom.
pub const DRAWER_ITEMS: [(&str, &str, Screen); 5] = [
    ("Home", "⌂", Screen::Home),
    ("Find Groups", "⌕", Screen::Search),
    ("Notifications", "♪", Screen::Notifications),
    ("Profile", "☺", Screen::Profile),
    ("Logout", "⇥", Screen::Splash),
];

/// How many groups the drawer lists under "Subscribed".
pub const SUBSCRIBED_IN_DRAWER: usize = 2;
/// How many groups the profile lists as joined.
pub const JOINED_ON_PROFILE: usize = 3;

pub struct AppState {
    pub config: AppConfig,
    pub nav: Navigation,
    /// Splash-to-home timer, armed once at startup.
    pub boot_timer: OneShot,
    pub surfaces: Surfaces,

    pub groups: Vec<Group>,
    pub notifications: Vec<Notification>,
    pub chats: HashMap<GroupId, Vec<ChatMessage>>,
    pub join_requests: HashSet<GroupId>,

    pub home_filter: Option<Subject>,
    pub home_cursor: usize,
    pub drawer_cursor: usize,
    pub profile_cursor: usize,

    pub search_input: TextInput,
    pub search_subject: Option<Subject>,
    /// `None` until filters have been applied once.
    pub search_results: Option<Vec<GroupId>>,
    pub search_cursor: usize,

    pub chat_input: TextInput,

    pub toast: Option<String>,
    pub toast_timer: OneShot,

    pub now: Instant,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let ui = &config.ui;
        let surfaces = Surfaces::new(Duration::from_millis(ui.ripple_ms), ui.ripple_policy);
        let boot_timer = OneShot::armed(now, Duration::from_millis(ui.splash_ms));
        Self {
            nav: Navigation::new(),
            boot_timer,
            surfaces,
            groups: data::groups(),
            notifications: data::notifications(),
            chats: HashMap::new(),
            join_requests: HashSet::new(),
            home_filter: None,
            home_cursor: 0,
            drawer_cursor: 0,
            profile_cursor: 0,
            search_input: TextInput::new(InputId::Search)
                .with_label("Search groups")
                .with_icon("⌕"),
            search_subject: None,
            search_results: None,
            search_cursor: 0,
            chat_input: TextInput::new(InputId::Chat).with_label("Type a message"),
            toast: None,
            toast_timer: OneShot::new(),
            now,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            config,
        }
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Groups shown on the home screen under the current chip filter.
    pub fn visible_groups(&self) -> Vec<&Group> {
        self.groups
            .iter()
            .filter(|g| self.home_filter.is_none_or(|s| g.subject == s))
            .collect()
    }

    /// The home card under the keyboard cursor.
    pub fn home_selection(&self) -> Option<&Group> {
        let visible = self.visible_groups();
        visible.get(self.home_cursor.min(visible.len().saturating_sub(1))).copied()
    }

    pub fn subscribed_groups(&self) -> &[Group] {
        &self.groups[..SUBSCRIBED_IN_DRAWER.min(self.groups.len())]
    }

    pub fn joined_groups(&self) -> &[Group] {
        &self.groups[..JOINED_ON_PROFILE.min(self.groups.len())]
    }

    /// Drawer entries: fixed items followed by subscribed groups.
    pub fn drawer_len(&self) -> usize {
        DRAWER_ITEMS.len() + self.subscribed_groups().len()
    }

    pub fn chat_for(&self, id: GroupId) -> Vec<ChatMessage> {
        self.chats
            .get(&id)
            .cloned()
            .unwrap_or_else(data::seed_messages)
    }

    pub fn post_message(&mut self, id: GroupId, text: String) {
        let now = Local::now();
        let mut time = String::new();
        if write!(time, "{}", now.format(&self.config.ui.timestamp_format)).is_err() {
            warn!(format = %self.config.ui.timestamp_format, "bad timestamp format");
            time = now.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
        }
        self.chats
            .entry(id)
            .or_insert_with(data::seed_messages)
            .push(ChatMessage {
                sender: "Me".to_string(),
                text,
                time,
                own: true,
            });
        self.dirty = true;
    }

    pub fn input(&self, id: InputId) -> &TextInput {
        match id {
            InputId::Search => &self.search_input,
            InputId::Chat => &self.chat_input,
        }
    }

    pub fn input_mut(&mut self, id: InputId) -> &mut TextInput {
        match id {
            InputId::Search => &mut self.search_input,
            InputId::Chat => &mut self.chat_input,
        }
    }

    /// The input that currently has focus on the visible screen.
    pub fn focused_input(&self) -> Option<InputId> {
        match self.nav.current() {
            Screen::Search if self.search_input.is_focused() => Some(InputId::Search),
            Screen::Chat if self.chat_input.is_focused() => Some(InputId::Chat),
            _ => None,
        }
    }

    pub fn focus_input(&mut self, id: InputId) {
        self.blur_inputs();
        self.input_mut(id).focus();
        self.dirty = true;
    }

    pub fn blur_inputs(&mut self) {
        self.search_input.blur();
        self.chat_input.blur();
        self.dirty = true;
    }

    pub fn cycle_search_subject(&mut self) {
        self.search_subject = match self.search_subject {
            None => Some(Subject::ALL[0]),
            Some(s) => {
                let idx = Subject::ALL.iter().position(|x| *x == s).unwrap_or(0);
                Subject::ALL.get(idx + 1).copied()
            }
        };
        self.dirty = true;
    }

    pub fn apply_search(&mut self) {
        let query = self.search_input.value().trim().to_lowercase();
        let subject = self.search_subject;
        let results = self
            .groups
            .iter()
            .filter(|g| subject.is_none_or(|s| g.subject == s))
            .filter(|g| {
                query.is_empty()
                    || g.name.to_lowercase().contains(&query)
                    || g.description.to_lowercase().contains(&query)
            })
            .map(|g| g.id)
            .collect();
        self.search_results = Some(results);
        self.search_cursor = 0;
        self.dirty = true;
    }

    pub fn show_toast(&mut self, text: String, now: Instant) {
        self.toast = Some(text);
        self.toast_timer
            .arm(now, Duration::from_millis(self.config.ui.toast_ms));
        self.dirty = true;
    }

    /// Reset per-screen view state when the visible screen changes: every
    /// mounted surface is torn down and inputs lose focus.
    pub fn unmount_screen(&mut self) {
        self.surfaces.unmount_all();
        self.blur_inputs();
        self.home_cursor = 0;
        self.profile_cursor = 0;
        self.search_cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Instant::now())
    }

    #[test]
    fn chip_filter_limits_home_list() {
        let mut s = state();
        assert_eq!(s.visible_groups().len(), 4);
        s.home_filter = Some(Subject::Physics);
        let names: Vec<_> = s.visible_groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Physics Lab Partners"]);
        s.home_filter = Some(Subject::Arts);
        assert!(s.visible_groups().is_empty());
        assert!(s.home_selection().is_none());
    }

    #[test]
    fn search_matches_name_description_and_subject() {
        let mut s = state();
        for c in "exam".chars() {
            s.search_input.insert_char(c);
        }
        s.apply_search();
        assert_eq!(s.search_results, Some(vec![4]));

        s.search_input.take();
        s.cycle_search_subject();
        assert_eq!(s.search_subject, Some(Subject::Math));
        s.apply_search();
        assert_eq!(s.search_results, Some(vec![1]));
    }

    #[test]
    fn subject_cycle_wraps_to_any() {
        let mut s = state();
        for _ in 0..Subject::ALL.len() {
            s.cycle_search_subject();
        }
        assert_eq!(s.search_subject, Some(Subject::Arts));
        s.cycle_search_subject();
        assert_eq!(s.search_subject, None);
    }

    #[test]
    fn posted_messages_are_per_group() {
        let mut s = state();
        s.post_message(1, "see you there".into());
        let chat = s.chat_for(1);
        assert_eq!(chat.len(), data::seed_messages().len() + 1);
        assert!(chat.last().is_some_and(|m| m.own && m.text == "see you there"));
        assert_eq!(s.chat_for(2), data::seed_messages());
    }

    #[test]
    fn bad_timestamp_format_falls_back_instead_of_panicking() {
        let mut config = AppConfig::default();
        config.ui.timestamp_format = "%Q".into();
        let mut s = AppState::new(config, Instant::now());
        s.post_message(1, "hi".into());
        let last = s.chat_for(1).pop().unwrap();
        assert_eq!(last.text, "hi");
        assert!(!last.time.is_empty());
    }

    #[test]
    fn only_one_input_focused_at_a_time() {
        let mut s = state();
        s.focus_input(InputId::Search);
        s.focus_input(InputId::Chat);
        assert!(!s.search_input.is_focused());
        assert!(s.chat_input.is_focused());
    }
}
