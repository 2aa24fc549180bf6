//! Bundled mock data: groups, notifications and seed chat messages.
//!
//! Nothing here is fetched or persisted; the catalog is rebuilt on every start.

use std::fmt;

pub type GroupId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Physics,
    Coding,
    Biology,
    History,
    Arts,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Math,
        Subject::Physics,
        Subject::Coding,
        Subject::Biology,
        Subject::History,
        Subject::Arts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Physics => "Physics",
            Subject::Coding => "Coding",
            Subject::Biology => "Biology",
            Subject::History => "History",
            Subject::Arts => "Arts",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A study group. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub subject: Subject,
    pub members: u32,
    pub description: String,
    pub image: String,
    pub joined: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
    pub time: String,
    pub own: bool,
}

fn group(
    id: GroupId,
    name: &str,
    subject: Subject,
    members: u32,
    description: &str,
    image: &str,
) -> Group {
    Group {
        id,
        name: name.to_string(),
        subject,
        members,
        description: description.to_string(),
        image: image.to_string(),
        joined: None,
    }
}

pub fn groups() -> Vec<Group> {
    vec![
        group(
            1,
            "Calculus II Study Group",
            Subject::Math,
            12,
            "Weekly problem solving sessions for Calc II. Join us at the library!",
            "images/study-group-library.jpg",
        ),
        group(
            2,
            "Physics Lab Partners",
            Subject::Physics,
            8,
            "Looking for partners for the upcoming thermodynamics project.",
            "images/physics-lab.jpg",
        ),
        group(
            3,
            "Java & Algorithms",
            Subject::Coding,
            24,
            "Practicing LeetCode and data structures together.",
            "images/coding-session.jpg",
        ),
        group(
            4,
            "Bio 101 Review",
            Subject::Biology,
            15,
            "Preparing for the midterm exam. Bring your notes!",
            "images/biology-notes.jpg",
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            text: "Your join request was approved for \"Physics Lab Partners\"".into(),
            time: "2h ago".into(),
        },
        Notification {
            id: 2,
            text: "New message in \"Calculus II Study Group\"".into(),
            time: "5h ago".into(),
        },
        Notification {
            id: 3,
            text: "StudyCircle: Welcome to the community!".into(),
            time: "1d ago".into(),
        },
    ]
}

/// The conversation every group chat starts with.
pub fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            sender: "Alice".into(),
            text: "Hey everyone, are we meeting today?".into(),
            time: "10:30 AM".into(),
            own: false,
        },
        ChatMessage {
            sender: "Bob".into(),
            text: "Yes, library room 304 at 2 PM.".into(),
            time: "10:32 AM".into(),
            own: false,
        },
        ChatMessage {
            sender: "Me".into(),
            text: "I'll be there!".into(),
            time: "10:35 AM".into(),
            own: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn group_ids_are_unique() {
        let ids: HashSet<_> = groups().iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), groups().len());
    }
}
