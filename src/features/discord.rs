//! Discord Editor
//!
//! Notification-integration section. Collapsible; the expanded flag is
//! presentation state only.

use super::SectionEditor;
use crate::domain::DiscordConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscordEdit {
    Enabled(bool),
    ToggleEnabled,
    WebhookUrl(String),
    PingUser(bool),
    TogglePingUser,
}

#[derive(Debug, Clone, Default)]
pub struct DiscordEditor {
    expanded: bool,
}

impl DiscordEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

impl SectionEditor for DiscordEditor {
    type Section = DiscordConfig;
    type Edit = DiscordEdit;

    fn apply(&mut self, current: &DiscordConfig, edit: DiscordEdit) -> DiscordConfig {
        let mut next = current.clone();
        match edit {
            DiscordEdit::Enabled(enabled) => next.enabled = Some(enabled),
            DiscordEdit::ToggleEnabled => next.enabled = Some(!current.enabled()),
            DiscordEdit::WebhookUrl(url) => next.webhook_url = Some(url),
            DiscordEdit::PingUser(ping) => next.ping_user = Some(ping),
            DiscordEdit::TogglePingUser => next.ping_user = Some(!current.ping_user()),
        }
        next
    }
}
