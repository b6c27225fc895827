use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Explore,
    Notifications,
    Messages,
    Profile,
}

impl View {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "home" => Some(View::Home),
            "explore" => Some(View::Explore),
            "notifications" => Some(View::Notifications),
            "messages" => Some(View::Messages),
            "profile" => Some(View::Profile),
            _ => None,
        }
    }

    /// Id of the page section holding this view.
    pub fn section_id(self) -> &'static str {
        match self {
            View::Home => "homeView",
            View::Explore => "exploreView",
            View::Notifications => "notificationsView",
            View::Messages => "messagesView",
            View::Profile => "profileView",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Search,
    Composer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    FocusComposer,
}

impl Shortcut {
    /// Ctrl+K / Cmd+K and Ctrl+N / Cmd+N. Plain keys are not shortcuts.
    pub fn from_key(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        if !ctrl_or_meta {
            return None;
        }
        match key {
            "k" | "K" => Some(Shortcut::FocusSearch),
            "n" | "N" => Some(Shortcut::FocusComposer),
            _ => None,
        }
    }

    pub fn target(self) -> Focus {
        match self {
            Shortcut::FocusSearch => Focus::Search,
            Shortcut::FocusComposer => Focus::Composer,
        }
    }
}
