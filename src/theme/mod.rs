//! Theme - Root Presentation Attribute
//!
//! The styling layer reads one attribute off the page root. An unset theme
//! renders with the baseline without touching the document.

use crate::constants::THEME_ATTRIBUTE;
use crate::domain::GeneralConfig;

/// `(name, value)` for the root presentation node
pub fn root_attribute(general: &GeneralConfig) -> (&'static str, &'static str) {
    (THEME_ATTRIBUTE, general.display_theme().name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;

    #[test]
    fn unset_theme_displays_baseline() {
        let general = GeneralConfig::default();
        assert_eq!(root_attribute(&general), ("data-theme", "mocha"));
        assert_eq!(general.theme, None);
    }

    #[test]
    fn chosen_theme_is_exposed() {
        let general = GeneralConfig {
            theme: Some(Theme::Latte),
            ..GeneralConfig::default()
        };
        assert_eq!(root_attribute(&general), ("data-theme", "latte"));
    }
}
