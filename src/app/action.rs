use crate::app::nav::Screen;
use crate::data::{Group, GroupId, Subject};

/// Which text field an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    Search,
    Chat,
}

/// What a surface does when activated.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate { screen: Screen, group: Option<Group> },
    SetDrawer(bool),
    SelectChip(Option<Subject>),
    CycleSearchSubject,
    ApplySearch,
    FocusInput(InputId),
    SendMessage,
    RequestJoin(GroupId),
    ClearNotifications,
    Toast(String),
    Quit,
}

impl Action {
    pub fn go(screen: Screen) -> Self {
        Action::Navigate {
            screen,
            group: None,
        }
    }

    pub fn go_with(screen: Screen, group: &Group) -> Self {
        Action::Navigate {
            screen,
            group: Some(group.clone()),
        }
    }
}
