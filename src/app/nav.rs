//! Screen navigation: which view is visible, which group it is about, and
//! whether the side drawer is open.

use crate::data::Group;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Home,
    Search,
    Details,
    Chat,
    Notifications,
    Profile,
}

impl Screen {
    /// Destinations reachable from the bottom navigation bar.
    pub const BOTTOM_NAV: [Screen; 3] = [Screen::Home, Screen::Notifications, Screen::Profile];

    pub fn shows_bottom_nav(self) -> bool {
        Self::BOTTOM_NAV.contains(&self)
    }

    /// Screens whose app bar shows a back arrow instead of the menu icon.
    pub fn has_back_arrow(self) -> bool {
        matches!(self, Screen::Search | Screen::Details | Screen::Chat)
    }

    /// Screens that render the selected group and nothing without one.
    pub fn needs_group(self) -> bool {
        matches!(self, Screen::Details | Screen::Chat)
    }
}

/// Process-wide UI navigation state. Mutated only through `transition` and
/// `set_drawer_open`.
#[derive(Debug, Clone)]
pub struct Navigation {
    current: Screen,
    selected: Option<Group>,
    drawer_open: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            current: Screen::Splash,
            selected: None,
            drawer_open: false,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn selected(&self) -> Option<&Group> {
        self.selected.as_ref()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Switch to `target`. A supplied group replaces the selection; without
    /// one the previous selection is kept. Always closes the drawer.
    pub fn transition(&mut self, target: Screen, group: Option<Group>) {
        debug!(from = ?self.current, to = ?target, group = group.as_ref().map(|g| g.id), "transition");
        self.current = target;
        if let Some(group) = group {
            self.selected = Some(group);
        }
        self.drawer_open = false;
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        debug!(open, "drawer");
        self.drawer_open = open;
    }

    /// The group to render for the current screen, if the screen needs one.
    /// `None` on `Details`/`Chat` means "render nothing".
    pub fn group_for_view(&self) -> Option<&Group> {
        if self.current.needs_group() {
            self.selected.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn g(n: usize) -> Group {
        data::groups()[n].clone()
    }

    const ALL: [Screen; 7] = [
        Screen::Splash,
        Screen::Home,
        Screen::Search,
        Screen::Details,
        Screen::Chat,
        Screen::Notifications,
        Screen::Profile,
    ];

    #[test]
    fn starts_on_splash_with_nothing_selected() {
        let nav = Navigation::new();
        assert_eq!(nav.current(), Screen::Splash);
        assert!(nav.selected().is_none());
        assert!(!nav.drawer_open());
    }

    #[test]
    fn current_is_always_last_target() {
        let mut nav = Navigation::new();
        for (i, target) in ALL.iter().cycle().take(30).enumerate() {
            let group = (i % 3 == 0).then(|| g(i % 4));
            nav.transition(*target, group);
            assert_eq!(nav.current(), *target);
        }
    }

    #[test]
    fn selection_replaced_only_when_supplied() {
        let mut nav = Navigation::new();
        nav.transition(Screen::Details, Some(g(0)));
        assert_eq!(nav.selected(), Some(&g(0)));
        nav.transition(Screen::Home, None);
        assert_eq!(nav.selected(), Some(&g(0)));
        nav.transition(Screen::Chat, Some(g(2)));
        assert_eq!(nav.selected(), Some(&g(2)));
        nav.transition(Screen::Profile, None);
        nav.transition(Screen::Chat, None);
        assert_eq!(nav.group_for_view(), Some(&g(2)));
    }

    #[test]
    fn every_transition_closes_drawer() {
        for target in ALL {
            let mut nav = Navigation::new();
            nav.set_drawer_open(true);
            nav.transition(target, None);
            assert!(!nav.drawer_open(), "{target:?} left the drawer open");
        }
    }

    #[test]
    fn drawer_toggle_restores_without_transition() {
        let mut nav = Navigation::new();
        nav.transition(Screen::Home, Some(g(1)));
        nav.set_drawer_open(true);
        assert!(nav.drawer_open());
        nav.set_drawer_open(false);
        assert!(!nav.drawer_open());
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.selected(), Some(&g(1)));
    }

    #[test]
    fn intervening_transition_forces_drawer_closed() {
        let mut nav = Navigation::new();
        nav.set_drawer_open(true);
        nav.transition(Screen::Search, None);
        nav.set_drawer_open(false);
        assert!(!nav.drawer_open());
    }

    #[test]
    fn logout_keeps_selection() {
        let mut nav = Navigation::new();
        nav.transition(Screen::Chat, Some(g(3)));
        nav.transition(Screen::Splash, None);
        assert_eq!(nav.current(), Screen::Splash);
        assert_eq!(nav.selected(), Some(&g(3)));
    }

    #[test]
    fn details_without_group_renders_nothing() {
        let mut nav = Navigation::new();
        nav.transition(Screen::Details, None);
        assert_eq!(nav.current(), Screen::Details);
        assert!(nav.group_for_view().is_none());
    }
}
