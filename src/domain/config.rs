//! Config - Agent Configuration Document
//!
//! The persisted document the editor stages and commits. Top-level fields are
//! grouped into sections; nested optional fields stay `Option` so an absent
//! field and an explicit default compare as different values. Keys the editor
//! does not model are carried in `extra` maps and written back untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_CHANNEL;
use crate::error::Result;

/// Interface language of the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Portuguese (Brazil)
    #[default]
    #[serde(rename = "pt-br")]
    PtBr,
    /// Spanish (Latin America)
    #[serde(rename = "es-la")]
    EsLa,
    /// English (US)
    #[serde(rename = "en-us")]
    EnUs,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::PtBr, Language::EsLa, Language::EnUs];

    /// Locale code as stored in the document
    pub fn code(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-br",
            Language::EsLa => "es-la",
            Language::EnUs => "en-us",
        }
    }

    /// Parse a locale code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::PtBr => "Português",
            Language::EsLa => "Español",
            Language::EnUs => "English",
        }
    }
}

/// Color theme names understood by the styling layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Latte, Theme::Frappe, Theme::Macchiato, Theme::Mocha];

    /// Shown when the document leaves the theme unset
    pub const BASELINE: Theme = Theme::Mocha;

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Latte => "latte",
            Theme::Frappe => "frappe",
            Theme::Macchiato => "macchiato",
            Theme::Mocha => "mocha",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Language, theme and chat channel. Stored flat at the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Interface language
    pub language: Language,
    /// Color theme; `None` renders with [`Theme::BASELINE`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Chat channel the agent joins
    pub channel: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: None,
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl GeneralConfig {
    /// Theme to display, without writing the fallback back
    pub fn display_theme(&self) -> Theme {
        self.theme.unwrap_or(Theme::BASELINE)
    }
}

/// Keys a section does not model, kept for the round trip
pub type ExtraFields = BTreeMap<String, Value>;

/// Purchase rules for one ball type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntry {
    /// Buy automatically when the ball runs out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_on_missing: Option<bool>,
    /// Cash threshold for buying a single ball
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_one: Option<i64>,
    /// Cash threshold for buying ten balls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_ten: Option<i64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ShopEntry {
    pub fn buy_on_missing(&self) -> bool {
        self.buy_on_missing.unwrap_or(false)
    }
}

/// Shop section: ball name -> purchase rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopConfig {
    pub balls: BTreeMap<String, ShopEntry>,
}

impl ShopConfig {
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn entry(&self, ball: &str) -> Option<&ShopEntry> {
        self.balls.get(ball)
    }
}

/// Capture section: which balls each tier may throw, in preference order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchConfig {
    /// Handle uncaptured species with the captured tier lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_uncapt_as_capt: Option<bool>,
    /// Tier name (`S`, `uncapt_S`, ...) -> ordered ball names
    #[serde(flatten)]
    pub tiers: BTreeMap<String, Vec<String>>,
}

impl CatchConfig {
    pub fn is_empty(&self) -> bool {
        self.treat_uncapt_as_capt.is_none() && self.tiers.is_empty()
    }

    pub fn treat_uncapt_as_capt(&self) -> bool {
        self.treat_uncapt_as_capt.unwrap_or(false)
    }

    pub fn tier(&self, name: &str) -> &[String] {
        self.tiers.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Stats-display section: thresholds used to score stat-based balls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsBallsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy_ball: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feather_ball: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heal_ball: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_ball: Option<i64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl StatsBallsConfig {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Notification-integration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_user: Option<bool>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl DiscordConfig {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn webhook_url(&self) -> &str {
        self.webhook_url.as_deref().unwrap_or("")
    }

    pub fn ping_user(&self) -> bool {
        self.ping_user.unwrap_or(false)
    }
}

/// The whole agent configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(flatten)]
    pub general: GeneralConfig,
    #[serde(default, skip_serializing_if = "ShopConfig::is_empty")]
    pub shop: ShopConfig,
    #[serde(default, skip_serializing_if = "CatchConfig::is_empty")]
    pub catch: CatchConfig,
    #[serde(default, skip_serializing_if = "StatsBallsConfig::is_empty")]
    pub stats_balls: StatsBallsConfig,
    #[serde(default, skip_serializing_if = "DiscordConfig::is_empty")]
    pub discord: DiscordConfig,
    /// Top-level keys outside every section
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ConfigDocument {
    /// Parse a document from its JSON form
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the whole document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize for writing to disk
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
