//! General Editor
//!
//! Language, theme and channel. Owns the channel validity flag.

use tracing::debug;

use super::SectionEditor;
use crate::domain::{GeneralConfig, Language, Theme};
use crate::validation::is_valid_channel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneralEdit {
    Language(Language),
    Theme(Option<Theme>),
    /// Raw channel input, one keystroke's worth
    Channel(String),
}

#[derive(Debug, Clone)]
pub struct GeneralEditor {
    channel_valid: bool,
}

impl GeneralEditor {
    pub fn new(current: &GeneralConfig) -> Self {
        Self {
            channel_valid: is_valid_channel(&current.channel),
        }
    }

    pub fn channel_valid(&self) -> bool {
        self.channel_valid
    }

    /// Focus left the channel field
    pub fn on_channel_blur(&mut self, current: &GeneralConfig) -> bool {
        self.channel_valid = is_valid_channel(&current.channel);
        self.channel_valid
    }
}

impl SectionEditor for GeneralEditor {
    type Section = GeneralConfig;
    type Edit = GeneralEdit;

    fn apply(&mut self, current: &GeneralConfig, edit: GeneralEdit) -> GeneralConfig {
        let mut next = current.clone();
        match edit {
            GeneralEdit::Language(language) => next.language = language,
            GeneralEdit::Theme(theme) => next.theme = theme,
            GeneralEdit::Channel(input) => {
                let channel = input.to_lowercase();
                self.channel_valid = is_valid_channel(&channel);
                if !self.channel_valid {
                    debug!("channel {channel:?} fails the charset rule");
                }
                next.channel = channel;
            }
        }
        next
    }
}
