//! Page Model
//!
//! Everything the settings page shows, derived from the controller and the
//! editors in one pass. Labels follow the draft's language.

use crate::domain::{ConfigDocument, SectionKey};
use crate::i18n::{UiLabel, label};
use crate::domain::Language;
use crate::services::Persistence;
use crate::state::ConfigController;
use crate::theme::root_attribute;
use crate::validation::StatField;

use super::session::Editors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub title: String,
    pub save_label: String,
    pub unsaved_label: String,
    /// `Language: English`-style line for the general section
    pub language_line: String,
    /// `(name, value)` on the root node
    pub theme_attribute: (&'static str, &'static str),
    /// Labelled field lines for every section, in page order
    pub fields: Vec<String>,
    pub dirty: bool,
    pub save_enabled: bool,
    pub saving: bool,
    pub changed_sections: Vec<SectionKey>,
    pub channel_warning: Option<String>,
    pub discord_expanded: bool,
    pub issues: Vec<String>,
}

impl PageModel {
    pub fn build<P: Persistence>(controller: &ConfigController<P>, editors: &Editors) -> Self {
        let draft: &ConfigDocument = controller.draft();
        let language = draft.general.language;
        let saving = controller.in_flight().is_some();

        Self {
            title: label(language, UiLabel::PageTitle),
            save_label: label(
                language,
                if saving { UiLabel::Saving } else { UiLabel::Save },
            ),
            unsaved_label: label(language, UiLabel::Unsaved),
            language_line: format!(
                "{}: {}",
                label(language, UiLabel::Language),
                language.display_name()
            ),
            theme_attribute: root_attribute(&draft.general),
            fields: field_lines(draft, language, editors.discord.expanded()),
            dirty: controller.is_dirty(),
            save_enabled: controller.can_commit(),
            saving,
            changed_sections: controller.changed_sections(),
            channel_warning: (!editors.general.channel_valid())
                .then(|| label(language, UiLabel::ChannelInvalid)),
            discord_expanded: editors.discord.expanded(),
            issues: controller.issues().iter().map(ToString::to_string).collect(),
        }
    }

    /// Plain-text rendering for the shell
    pub fn render(&self) -> String {
        let mut out = format!("== {} ==\n", self.title);
        out.push_str(&format!("{}\n", self.language_line));
        out.push_str(&format!(
            "{}=\"{}\"\n",
            self.theme_attribute.0, self.theme_attribute.1
        ));
        for line in &self.fields {
            out.push_str(line);
            out.push('\n');
        }
        if self.dirty {
            let sections: Vec<&str> = self.changed_sections.iter().map(|s| s.name()).collect();
            out.push_str(&format!("{}: {}\n", self.unsaved_label, sections.join(", ")));
        }
        if let Some(warning) = &self.channel_warning {
            out.push_str(&format!("! {warning}\n"));
        }
        for issue in &self.issues {
            out.push_str(&format!("! {issue}\n"));
        }
        out.push_str(&format!(
            "discord panel: {}\n",
            if self.discord_expanded { "open" } else { "closed" }
        ));
        out.push_str(&format!(
            "[{}] {}",
            self.save_label,
            if self.save_enabled { "enabled" } else { "disabled" }
        ));
        out
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn field_lines(draft: &ConfigDocument, language: Language, discord_expanded: bool) -> Vec<String> {
    let text = |ui_label| label(language, ui_label);
    let mut lines = vec![
        format!(
            "{}: {}",
            text(UiLabel::Theme),
            draft.general.display_theme().name()
        ),
        format!("{}: {}", text(UiLabel::Channel), draft.general.channel),
    ];

    lines.push(format!("-- {} --", text(UiLabel::ShopTitle)));
    for (ball, entry) in &draft.shop.balls {
        lines.push(format!(
            "{ball}: {} {} | {} {} | {} {}",
            text(UiLabel::BuyOnMissing),
            entry.buy_on_missing(),
            text(UiLabel::BuyOne),
            optional(entry.buy_one),
            text(UiLabel::BuyTen),
            optional(entry.buy_ten),
        ));
    }

    lines.push(format!("-- {} --", text(UiLabel::CatchTitle)));
    lines.push(format!(
        "{}: {}",
        text(UiLabel::TreatUncaptAsCapt),
        draft.catch.treat_uncapt_as_capt()
    ));
    for (tier, balls) in &draft.catch.tiers {
        lines.push(format!("{tier}: {}", balls.join(", ")));
    }

    lines.push(format!("-- {} --", text(UiLabel::StatsTitle)));
    for field in StatField::ALL {
        lines.push(format!(
            "{}: {}",
            field.name(),
            optional(field.get(&draft.stats_balls))
        ));
    }

    // Collapsed panel shows only its title
    lines.push(format!("-- {} --", text(UiLabel::DiscordTitle)));
    if discord_expanded {
        let discord = &draft.discord;
        lines.push(format!("{}: {}", text(UiLabel::DiscordEnabled), discord.enabled()));
        lines.push(format!("{}: {}", text(UiLabel::WebhookUrl), discord.webhook_url()));
        lines.push(format!("{}: {}", text(UiLabel::PingUser), discord.ping_user()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, factory_document};
    use crate::features::{GeneralEdit, GeneralEditor};
    use crate::services::{MemoryStore, WriteMode};
    use crate::settings::CommitPolicy;
    use std::rc::Rc;

    fn controller(store: &Rc<MemoryStore>) -> ConfigController<Rc<MemoryStore>> {
        ConfigController::new(Rc::clone(store), CommitPolicy::default(), store.current())
    }

    #[test]
    fn clean_page_disables_save() {
        let store = Rc::new(MemoryStore::new(factory_document()));
        let controller = controller(&store);
        let editors = Editors::new(controller.draft());

        let page = PageModel::build(&controller, &editors);
        assert!(!page.dirty);
        assert!(!page.save_enabled);
        assert_eq!(page.theme_attribute, ("data-theme", "mocha"));
        assert!(page.channel_warning.is_none());
    }

    #[test]
    fn labels_switch_with_draft_language() {
        let store = Rc::new(MemoryStore::new(factory_document()));
        let mut controller = controller(&store);
        let mut editors = Editors::new(controller.draft());

        controller.edit(&mut editors.general, GeneralEdit::Language(Language::EnUs));
        let page = PageModel::build(&controller, &editors);
        assert_eq!(page.save_label, "Save");
        assert_eq!(page.language_line, "Language: English");
        assert!(page.dirty);
        assert!(page.save_enabled);
        assert_eq!(page.changed_sections, vec![SectionKey::General]);
    }

    #[test]
    fn in_flight_commit_shows_saving() {
        let store = Rc::new(MemoryStore::new(factory_document()));
        store.set_mode(WriteMode::Hold);
        let mut controller = controller(&store);
        let mut general = GeneralEditor::new(&controller.draft().general);

        controller.edit(&mut general, GeneralEdit::Channel("other".to_string()));
        controller.commit().expect("commit");

        let editors = Editors::new(controller.draft());
        let page = PageModel::build(&controller, &editors);
        assert!(page.saving);
        assert!(!page.save_enabled);
        assert!(page.render().contains("disabled"));
    }

    #[test]
    fn sections_render_with_translated_labels() {
        let store = Rc::new(MemoryStore::new(factory_document()));
        let mut controller = controller(&store);
        let mut editors = Editors::new(controller.draft());
        controller.edit(&mut editors.general, GeneralEdit::Language(Language::EnUs));

        let rendered = PageModel::build(&controller, &editors).render();
        for text in [
            "Theme: mocha",
            "Channel: ",
            "-- Shop --",
            "Buy when missing",
            "Buy one above",
            "Buy ten above",
            "-- Capture --",
            "Treat uncaptured as captured: ",
            "-- Stat balls --",
            "feather_ball: ",
            "-- Discord notifications --",
        ] {
            assert!(rendered.contains(text), "{text:?} missing from\n{rendered}");
        }
        assert!(!rendered.contains("Webhook URL"));

        editors.discord.toggle_expanded();
        let expanded = PageModel::build(&controller, &editors).render();
        assert!(expanded.contains("Enabled: false"));
        assert!(expanded.contains("Webhook URL: "));
        assert!(expanded.contains("Ping me: false"));
    }
}
