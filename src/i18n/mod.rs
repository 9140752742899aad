//! i18n - Display Labels
//!
//! Read-only lookups into the `locales/` catalogs, keyed by the document's
//! language. The editor never changes locale data itself.

use rust_i18n::t;

use crate::domain::Language;

/// Fixed set of labels the page displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiLabel {
    PageTitle,
    Save,
    Saving,
    Unsaved,
    Language,
    Theme,
    Channel,
    ChannelInvalid,
    ShopTitle,
    BuyOnMissing,
    BuyOne,
    BuyTen,
    CatchTitle,
    TreatUncaptAsCapt,
    StatsTitle,
    DiscordTitle,
    DiscordEnabled,
    WebhookUrl,
    PingUser,
}

impl UiLabel {
    pub const ALL: [UiLabel; 19] = [
        UiLabel::PageTitle,
        UiLabel::Save,
        UiLabel::Saving,
        UiLabel::Unsaved,
        UiLabel::Language,
        UiLabel::Theme,
        UiLabel::Channel,
        UiLabel::ChannelInvalid,
        UiLabel::ShopTitle,
        UiLabel::BuyOnMissing,
        UiLabel::BuyOne,
        UiLabel::BuyTen,
        UiLabel::CatchTitle,
        UiLabel::TreatUncaptAsCapt,
        UiLabel::StatsTitle,
        UiLabel::DiscordTitle,
        UiLabel::DiscordEnabled,
        UiLabel::WebhookUrl,
        UiLabel::PingUser,
    ];

    /// Catalog key
    pub fn key(&self) -> &'static str {
        match self {
            UiLabel::PageTitle => "page.title",
            UiLabel::Save => "page.save",
            UiLabel::Saving => "page.saving",
            UiLabel::Unsaved => "page.unsaved",
            UiLabel::Language => "general.language",
            UiLabel::Theme => "general.theme",
            UiLabel::Channel => "general.channel",
            UiLabel::ChannelInvalid => "general.channel_invalid",
            UiLabel::ShopTitle => "shop.title",
            UiLabel::BuyOnMissing => "shop.buy_on_missing",
            UiLabel::BuyOne => "shop.buy_one",
            UiLabel::BuyTen => "shop.buy_ten",
            UiLabel::CatchTitle => "catch.title",
            UiLabel::TreatUncaptAsCapt => "catch.treat_uncapt_as_capt",
            UiLabel::StatsTitle => "stats.title",
            UiLabel::DiscordTitle => "discord.title",
            UiLabel::DiscordEnabled => "discord.enabled",
            UiLabel::WebhookUrl => "discord.webhook_url",
            UiLabel::PingUser => "discord.ping_user",
        }
    }
}

/// Translate a label
pub fn label(language: Language, label: UiLabel) -> String {
    t!(label.key(), locale = language.code()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_document_language() {
        assert_eq!(label(Language::EnUs, UiLabel::Save), "Save");
        assert_eq!(label(Language::PtBr, UiLabel::Save), "Salvar");
        assert_eq!(label(Language::EsLa, UiLabel::Save), "Guardar");
    }

    #[test]
    fn every_label_is_translated() {
        for language in Language::ALL {
            for ui_label in UiLabel::ALL {
                let text = label(language, ui_label);
                assert!(!text.is_empty());
                assert!(
                    !text.ends_with(ui_label.key()),
                    "{} missing for {}",
                    ui_label.key(),
                    language.code()
                );
            }
        }
    }
}
