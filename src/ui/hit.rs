//! Hit regions recorded while rendering.
//!
//! Every interactive surface registers its on-screen rectangle together with
//! the action it triggers. Later registrations sit on top: a button drawn
//! inside a card wins over the card, and the drawer backdrop wins over the
//! screen beneath it.

use crate::app::action::Action;
use crate::data::GroupId;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    MenuButton,
    BackButton,
    SearchIcon,
    Backdrop,
    DrawerPanel,
    DrawerItem(usize),
    DrawerGroup(GroupId),
    Chip(usize),
    GroupCard(GroupId),
    ViewInfo(GroupId),
    JoinGroup(GroupId),
    CreateGroupFab,
    SearchInput,
    SubjectSelect,
    ApplyFilters,
    SearchResult(GroupId),
    RequestJoin,
    OpenChat,
    ChatInput,
    SendMessage,
    ClearAll,
    ProfileGroup(GroupId),
    BottomNav(usize),
    SignIn,
}

#[derive(Debug, Clone)]
pub struct Hit {
    pub surface: SurfaceId,
    pub area: Rect,
    pub action: Option<Action>,
    /// Surfaces without ripple feedback (cards, backdrop, list rows).
    pub ripples: bool,
    pub enabled: bool,
}

impl Hit {
    pub fn new(surface: SurfaceId, area: Rect, action: Option<Action>) -> Self {
        Self {
            surface,
            area,
            action,
            ripples: false,
            enabled: true,
        }
    }

    pub fn rippling(mut self) -> Self {
        self.ripples = true;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Position of `(col, row)` relative to the surface's top-left cell.
    pub fn local(&self, col: u16, row: u16) -> (u16, u16) {
        (col.saturating_sub(self.area.x), row.saturating_sub(self.area.y))
    }

    pub fn center(&self) -> (u16, u16) {
        (self.area.width / 2, self.area.height / 2)
    }
}

#[derive(Debug, Default)]
pub struct HitMap {
    hits: Vec<Hit>,
}

impl HitMap {
    pub fn new() -> Self {
        Self { hits: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.hits.clear();
    }

    pub fn push(&mut self, hit: Hit) {
        if !hit.area.is_empty() {
            self.hits.push(hit);
        }
    }

    /// Topmost surface under `(col, row)`.
    pub fn at(&self, col: u16, row: u16) -> Option<&Hit> {
        let pos = Position::new(col, row);
        self.hits.iter().rev().find(|h| h.area.contains(pos))
    }

    pub fn find(&self, surface: SurfaceId) -> Option<&Hit> {
        self.hits.iter().rev().find(|h| h.surface == surface)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::nav::Screen;

    #[test]
    fn later_registrations_win() {
        let mut hits = HitMap::new();
        hits.push(Hit::new(SurfaceId::GroupCard(1), Rect::new(0, 0, 20, 6), None));
        hits.push(Hit::new(
            SurfaceId::JoinGroup(1),
            Rect::new(10, 5, 8, 1),
            Some(Action::go(Screen::Chat)),
        ));
        assert_eq!(hits.at(12, 5).map(|h| h.surface), Some(SurfaceId::JoinGroup(1)));
        assert_eq!(hits.at(2, 2).map(|h| h.surface), Some(SurfaceId::GroupCard(1)));
        assert!(hits.at(30, 2).is_none());
    }

    #[test]
    fn empty_areas_are_ignored() {
        let mut hits = HitMap::new();
        hits.push(Hit::new(SurfaceId::ClearAll, Rect::new(3, 3, 0, 1), None));
        assert!(hits.is_empty());
    }

    #[test]
    fn local_coordinates() {
        let hit = Hit::new(SurfaceId::OpenChat, Rect::new(10, 4, 12, 1), None);
        assert_eq!(hit.local(13, 4), (3, 0));
        assert_eq!(hit.center(), (6, 0));
    }
}
